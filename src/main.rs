//! Daily Rover API: Earth-date validation in front of Mars Rover image requests.
//! Used by: binary entrypoint.

pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod photos;
pub mod server;
pub mod state;
pub mod telemetry;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::Config::from_env()?;
    let state = state::build_state(&config);
    tracing::info!(zone = %config.zone, "starting daily-rover-api on {}", config.bind_addr);

    server::run(state, &config.bind_addr).await?;
    Ok(())
}

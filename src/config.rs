//! Runtime configuration from environment variables.
//! Used by: main, state.

use crate::clock::Zone;
use crate::error::Result;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8181";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `BIND_ADDR`
    pub bind_addr: String,
    /// `ROVER_TIMEZONE`: `local`, `utc` or an offset like `+02:00`.
    pub zone: Zone,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let zone = match lookup("ROVER_TIMEZONE") {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => defaults.zone,
        };
        Ok(Self { bind_addr, zone })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            zone: Zone::default(),
        }
    }
}

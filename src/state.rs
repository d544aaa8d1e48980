//! Shared application state.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::clock::{Clock, SystemClock, Zone};
use crate::config::Config;
use crate::telemetry::Metrics;

pub struct AppStateInner {
    pub clock: Box<dyn Clock>,
    pub zone: Zone,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

impl AppStateInner {
    /// Current wall-clock time in the configured zone.
    pub fn wall_clock(&self) -> NaiveDateTime {
        self.zone.wall_clock(self.clock.now())
    }
}

struct StateBuilder {
    clock: Box<dyn Clock>,
    zone: Zone,
}

impl StateBuilder {
    fn build(self) -> AppState {
        let metrics = Metrics::new(self.clock.now());
        Arc::new(AppStateInner {
            clock: self.clock,
            zone: self.zone,
            metrics,
        })
    }
}

pub fn build_state(config: &Config) -> AppState {
    StateBuilder {
        clock: Box::new(SystemClock),
        zone: config.zone,
    }
    .build()
}

#[cfg(test)]
pub fn build_test_state(now: chrono::DateTime<chrono::Utc>) -> AppState {
    build_test_state_in(now, Zone::Utc)
}

#[cfg(test)]
pub fn build_test_state_in(now: chrono::DateTime<chrono::Utc>, zone: Zone) -> AppState {
    StateBuilder {
        clock: Box::new(crate::clock::FixedClock(now)),
        zone,
    }
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_state_reads_fixed_instant() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let state = build_test_state(now);
        assert_eq!(state.wall_clock(), now.naive_utc());
        assert_eq!(state.metrics.snapshot().started_at, now);
    }

    #[test]
    fn state_uses_configured_zone() {
        let config = Config {
            bind_addr: "127.0.0.1:0".into(),
            zone: Zone::Utc,
        };
        assert_eq!(build_state(&config).zone, Zone::Utc);
    }
}

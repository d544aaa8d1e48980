//! Current-instant source and the time zone used to read it.
//! Used by: state, config, photos::fetch.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};

use crate::error::Error;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Time zone in which dates are compared and formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl Zone {
    /// Wall-clock reading of `instant` in this zone.
    pub fn wall_clock(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Zone::Local => instant.with_timezone(&Local).naive_local(),
            Zone::Utc => instant.naive_utc(),
            Zone::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Zone::Local),
            "utc" | "z" => Ok(Zone::Utc),
            other => other
                .parse::<FixedOffset>()
                .map(Zone::Fixed)
                .map_err(|_| Error::Config(format!("unknown time zone: {s}"))),
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Local => write!(f, "local"),
            Zone::Utc => write!(f, "utc"),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 23, 30, 0).unwrap()
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock(instant());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn utc_wall_clock_matches_instant() {
        assert_eq!(Zone::Utc.wall_clock(instant()), instant().naive_utc());
    }

    #[test]
    fn fixed_offset_shifts_wall_clock() {
        let zone: Zone = "+02:00".parse().unwrap();
        let wall = zone.wall_clock(instant());
        assert_eq!(wall.to_string(), "2024-03-11 01:30:00");
    }

    #[test]
    fn parses_named_zones() {
        assert_eq!("local".parse::<Zone>().unwrap(), Zone::Local);
        assert_eq!("UTC".parse::<Zone>().unwrap(), Zone::Utc);
    }

    #[test]
    fn rejects_unknown_zone() {
        let result = "Mars/Gale_Crater".parse::<Zone>();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}

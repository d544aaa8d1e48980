//! Mars Rover image requests for a given or derived Earth date.
//! Used by: handlers::photos.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::clock::Zone;
use crate::error::Result;
use crate::photos::earth_date;

pub fn images_for_date(earth_date: &str) -> String {
    let message = format!("Fetching Mars Rover images for {earth_date}");
    tracing::info!(earth_date, "{}", message);
    message
}

/// Validates `input` against `now` (wall-clock) and echoes it verbatim.
pub fn for_earth_date(input: &str, now: NaiveDateTime) -> Result<String> {
    earth_date::validate(input, now)?;
    Ok(images_for_date(input))
}

/// Instant minus 24 hours, read in `zone`. Not a calendar-day decrement.
pub fn yesterday(now: DateTime<Utc>, zone: Zone) -> String {
    earth_date::format(zone.wall_clock(now - Duration::hours(24)))
}

pub fn for_yesterday(now: DateTime<Utc>, zone: Zone) -> String {
    images_for_date(&yesterday(now, zone))
}

//! Strict `YYYY-MM-DD` parsing and the not-in-the-future check.
//! Used by: photos::fetch.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};

pub const FORMAT: &str = "%Y-%m-%d";

/// chrono accepts single-digit fields and signed years, so the shape is
/// checked before handing the string over.
fn has_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn parse(input: &str) -> Result<NaiveDate> {
    if !has_date_shape(input) {
        return Err(Error::InvalidFormat(input.to_owned()));
    }
    NaiveDate::parse_from_str(input, FORMAT).map_err(|_| Error::InvalidFormat(input.to_owned()))
}

/// Parses `input` and rejects dates whose midnight lies after `now`.
pub fn validate(input: &str, now: NaiveDateTime) -> Result<NaiveDate> {
    let date = parse(input)?;
    if date.and_time(NaiveTime::MIN) > now {
        return Err(Error::FutureDate(input.to_owned()));
    }
    Ok(date)
}

pub fn format(wall_clock: NaiveDateTime) -> String {
    wall_clock.format(FORMAT).to_string()
}

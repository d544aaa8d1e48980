//! Mars Rover photo endpoints keyed by Earth date.
//! Used by: server.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use percent_encoding::percent_decode_str;

use crate::error::Result;
use crate::photos::fetch;
use crate::state::AppState;

/// Last path segment, percent-decoded with invalid UTF-8 replaced.
fn raw_earth_date(uri: &Uri) -> String {
    let segment = uri.path().rsplit('/').next().unwrap_or_default();
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

pub async fn by_earth_date(
    State(state): State<AppState>,
    uri: Uri,
    earth_date: std::result::Result<Path<String>, PathRejection>,
) -> Result<String> {
    // A lossy decode always carries U+FFFD, so validation rejects it as malformed.
    let earth_date = match earth_date {
        Ok(Path(earth_date)) => earth_date,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "earth date segment not decodable");
            raw_earth_date(&uri)
        }
    };
    let message = fetch::for_earth_date(&earth_date, state.wall_clock()).inspect_err(|err| {
        tracing::debug!(earth_date = %earth_date, error = %err, "earth date rejected");
        state.metrics.record_rejection(err);
    })?;
    state.metrics.record_photo_request();
    Ok(message)
}

pub async fn yesterday(State(state): State<AppState>) -> String {
    state.metrics.record_yesterday_request();
    fetch::for_yesterday(state.clock.now(), state.zone)
}

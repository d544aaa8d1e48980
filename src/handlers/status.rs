//! Status (liveness) endpoint.
//! Used by: server.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: u16,
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    state.metrics.record_status_check();
    Json(StatusResponse {
        status: StatusCode::OK.as_u16(),
    })
}

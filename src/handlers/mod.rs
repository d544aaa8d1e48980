//! HTTP handler modules.
//! Used by: server.

pub mod metrics;
pub mod photos;
pub mod status;

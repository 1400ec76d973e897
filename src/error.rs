//! Library error type.
//!
//! None of these errors is fatal to the discovery pipeline: the application
//! state machine turns location and provider failures into fallbacks. They
//! exist so providers can report what went wrong and the logs can say so.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacesError {
    /// Geolocation was denied, timed out or is not supported.
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// A nearby search or a per-place detail fetch failed.
    #[error("Places query failed: {0}")]
    ProviderQueryFailed(String),

    #[error("Invalid opening hours: {0}")]
    InvalidSchedule(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! Where the user is.
//!
//! A [`LocationProvider`] answers a single position query. The driver
//! bounds the query with the configured timeout and treats a timeout the
//! same as any other failure.

use async_trait::async_trait;

use crate::error::PlacesError;
use crate::models::place::Coordinate;

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> Result<Coordinate, PlacesError>;
}

/// Always reports the same coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> Result<Coordinate, PlacesError> {
        if self.0.is_valid() {
            Ok(self.0)
        } else {
            Err(PlacesError::LocationUnavailable(format!(
                "({}, {}) is not a valid coordinate",
                self.0.lat, self.0.lng
            )))
        }
    }
}

/// Position lookup that always fails, e.g. when no position source is
/// configured.
#[derive(Debug, Clone, Default)]
pub struct Unavailable {
    reason: String,
}

impl Unavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait]
impl LocationProvider for Unavailable {
    async fn current_location(&self) -> Result<Coordinate, PlacesError> {
        let reason = if self.reason.is_empty() {
            "no position source"
        } else {
            self.reason.as_str()
        };
        Err(PlacesError::LocationUnavailable(reason.to_string()))
    }
}

//! User-tunable settings.
//!
//! Loaded from `settings.toml`; every field has a default so a partial file
//! (or no file at all) is fine.

use std::time::Duration as StdDuration;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::models::place::Coordinate;
use crate::services::countdown::{CountdownConfig, UrgencyThresholds};
use crate::services::places::NearbyRequest;

/// New York City, used when the user's position is unknown.
pub const FALLBACK_LOCATION: Coordinate = Coordinate::new(40.7128, -74.0060);

/// Upper bound the places provider accepts for a nearby search.
pub const MAX_SEARCH_RADIUS_M: u32 = 50_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search_radius_m: u32,
    pub tick_interval_secs: u64,
    pub search_debounce_ms: u64,
    pub location_timeout_secs: u64,
    /// Hour used when a place has no hours for today.
    pub default_closing_hour: u32,
    pub urgent_minutes: i64,
    pub warning_minutes: i64,
    /// Ask the provider for places that are open at search time only.
    pub open_now_only: bool,
    /// Where to search when the user's position is unknown.
    pub fallback_location: Coordinate,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fallback_location: FALLBACK_LOCATION,
            search_radius_m: 2000,
            tick_interval_secs: 60,
            search_debounce_ms: 300,
            location_timeout_secs: 10,
            default_closing_hour: 23,
            urgent_minutes: 30,
            warning_minutes: 120,
            open_now_only: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if !self.fallback_location.is_valid() {
            return Err(SettingsValidationError::InvalidFallbackLocation);
        }
        if self.search_radius_m == 0 || self.search_radius_m > MAX_SEARCH_RADIUS_M {
            return Err(SettingsValidationError::RadiusOutOfRange);
        }
        if self.tick_interval_secs == 0 {
            return Err(SettingsValidationError::ZeroTickInterval);
        }
        if self.default_closing_hour > 23 {
            return Err(SettingsValidationError::InvalidClosingHour);
        }
        if self.urgent_minutes <= 0 || self.warning_minutes <= self.urgent_minutes {
            return Err(SettingsValidationError::InvalidThresholds);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> StdDuration {
        StdDuration::from_secs(self.tick_interval_secs)
    }

    pub fn search_debounce(&self) -> StdDuration {
        StdDuration::from_millis(self.search_debounce_ms)
    }

    pub fn location_timeout(&self) -> StdDuration {
        StdDuration::from_secs(self.location_timeout_secs)
    }

    /// Nearby search around `location` with the configured radius and
    /// open-now flag.
    pub fn nearby_request(&self, location: Coordinate) -> NearbyRequest {
        NearbyRequest::around(location, self.search_radius_m).with_open_now(self.open_now_only)
    }

    pub fn countdown_config(&self) -> CountdownConfig {
        CountdownConfig {
            default_closing_hour: self.default_closing_hour,
            thresholds: UrgencyThresholds {
                urgent: Duration::minutes(self.urgent_minutes),
                warning: Duration::minutes(self.warning_minutes),
            },
        }
    }
}

/// Validation errors for Settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsValidationError {
    InvalidFallbackLocation,
    RadiusOutOfRange,
    ZeroTickInterval,
    InvalidClosingHour,
    InvalidThresholds,
}

impl std::fmt::Display for SettingsValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFallbackLocation => write!(f, "Fallback location is not a valid coordinate"),
            Self::RadiusOutOfRange => {
                write!(f, "Search radius must be between 1 and {} meters", MAX_SEARCH_RADIUS_M)
            }
            Self::ZeroTickInterval => write!(f, "Countdown tick interval must be at least 1 second"),
            Self::InvalidClosingHour => write!(f, "Default closing hour must be between 0 and 23"),
            Self::InvalidThresholds => {
                write!(f, "Urgent minutes must be positive and below warning minutes")
            }
        }
    }
}

impl std::error::Error for SettingsValidationError {}

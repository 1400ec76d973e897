//! Place records as delivered by a places provider.
//!
//! The serde layout follows the provider's nearby-search payload
//! (`place_id`, `vicinity`, `types`, `geometry.location`) so result sets can
//! be loaded straight from JSON. Places are read-only to the rest of the
//! crate.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::schedule::WeeklySchedule;

pub type PlaceId = String;

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub periods: WeeklySchedule,
}

/// Extra fields from the per-place detail fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "place_id")]
    pub id: PlaceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
    /// Raw provider type tags, e.g. `["cafe", "food", "point_of_interest"]`.
    #[serde(default, rename = "types")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<PlaceDetails>,
}

impl Place {
    pub fn new(id: impl Into<PlaceId>, name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vicinity: None,
            tags: Vec::new(),
            rating: None,
            geometry: Geometry { location },
            details: None,
        }
    }

    pub fn with_vicinity(mut self, vicinity: impl Into<String>) -> Self {
        self.vicinity = Some(vicinity.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating.clamp(0.0, 5.0));
        self
    }

    pub fn with_schedule(mut self, schedule: WeeklySchedule) -> Self {
        self.details.get_or_insert_with(PlaceDetails::default).opening_hours =
            Some(OpeningHours { periods: schedule });
        self
    }

    pub fn with_details(mut self, details: PlaceDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn location(&self) -> Coordinate {
        self.geometry.location
    }

    pub fn schedule(&self) -> Option<&WeeklySchedule> {
        self.details
            .as_ref()
            .and_then(|details| details.opening_hours.as_ref())
            .map(|hours| &hours.periods)
    }

    pub fn has_schedule(&self) -> bool {
        self.schedule().is_some()
    }

    /// Places without published hours are assumed open.
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        self.schedule().map_or(true, |schedule| schedule.is_open_at(at))
    }

    pub fn category(&self) -> Category {
        Category::classify(&self.tags)
    }
}

use chrono::{DateTime, FixedOffset, Offset, TimeZone};
use serde::Serialize;

use crate::models::category::Category;
use crate::models::place::{Coordinate, Place, PlaceId};
use crate::services::countdown::{TrackedCountdown, UrgencyTier};
use crate::utils::geo::distance_label;

use super::state::{LocationStatus, ViewMode};

/// Display record for one visible place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceViewModel {
    pub id: PlaceId,
    pub name: String,
    pub category: Category,
    pub category_label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
    pub location: Coordinate,
    pub distance_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub urgency: UrgencyTier,
    pub countdown_label: String,
    pub closes_at: DateTime<FixedOffset>,
    pub is_favorite: bool,
}

impl PlaceViewModel {
    pub fn build<Tz: TimeZone>(
        place: &Place,
        countdown: &TrackedCountdown<Tz>,
        user_location: Option<Coordinate>,
        is_favorite: bool,
    ) -> Self {
        let category = place.category();
        let offset = countdown.closes_at.offset().fix();
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            category,
            category_label: category.display_name(),
            icon: category.icon(),
            color: category.color(),
            vicinity: place.vicinity.clone(),
            location: place.location(),
            distance_label: distance_label(user_location, place.location()),
            rating: place.rating,
            urgency: countdown.last_tier,
            countdown_label: countdown.last_label.clone(),
            closes_at: countdown.closes_at.with_timezone(&offset),
            is_favorite,
        }
    }
}

/// One full redraw handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub view: ViewMode,
    pub location_status: LocationStatus,
    pub using_fixtures: bool,
    pub places: Vec<PlaceViewModel>,
}

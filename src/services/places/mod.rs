//! Places provider seam.
//!
//! A provider answers a nearby search and, optionally, a per-place detail
//! fetch that adds opening hours and contact fields. Implementations never
//! retry; the application state machine substitutes the built-in fixtures
//! on the first failure.

mod file;
mod fixtures;

pub use file::JsonFilePlaces;
pub use fixtures::{fixture_places, FixturePlaces};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::PlacesError;
use crate::models::category::Category;
use crate::models::place::{Coordinate, Place, PlaceDetails};
use crate::utils::geo::distance_m;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyRequest {
    pub location: Coordinate,
    pub radius_m: u32,
    pub types: Vec<Category>,
    /// Only return places that are open at the time of the search.
    #[serde(default = "default_open_now")]
    pub open_now: bool,
}

fn default_open_now() -> bool {
    true
}

impl NearbyRequest {
    /// Search every searchable category around `location` for places that
    /// are open now.
    pub fn around(location: Coordinate, radius_m: u32) -> Self {
        Self {
            location,
            radius_m,
            types: Category::SEARCHABLE.to_vec(),
            open_now: true,
        }
    }

    pub fn with_open_now(mut self, open_now: bool) -> Self {
        self.open_now = open_now;
        self
    }

    /// Whether `place` lies inside the search circle, classifies as one of
    /// the requested categories and, for an open-now search, is open at
    /// `at`. An empty type list accepts any place.
    pub fn accepts(&self, place: &Place, at: NaiveDateTime) -> bool {
        let within = distance_m(self.location, place.location()) <= f64::from(self.radius_m);
        let typed = self.types.is_empty() || self.types.contains(&place.category());
        let open = !self.open_now || place.is_open_at(at);
        within && typed && open
    }
}

#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn nearby(&self, request: &NearbyRequest) -> Result<Vec<Place>, PlacesError>;

    /// Detail fetch for one place. Providers whose search results already
    /// carry details keep the default.
    async fn details(&self, _place_id: &str) -> Result<Option<PlaceDetails>, PlacesError> {
        Ok(None)
    }
}

/// Nearby search followed by a detail fetch for every place that came back
/// without opening hours. Any failure fails the whole query.
pub async fn search_with_details(
    provider: &dyn PlacesProvider,
    request: &NearbyRequest,
) -> Result<Vec<Place>, PlacesError> {
    let mut places = provider.nearby(request).await?;

    for place in places.iter_mut().filter(|place| !place.has_schedule()) {
        if let Some(details) = provider.details(&place.id).await? {
            place.details = Some(details);
        }
    }

    log::debug!(
        "Nearby search at ({:.4}, {:.4}) r={}m returned {} place(s)",
        request.location.lat,
        request.location.lng,
        request.radius_m,
        places.len()
    );
    Ok(places)
}

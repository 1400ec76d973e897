use async_trait::async_trait;

use super::{NearbyRequest, PlacesProvider};
use crate::error::PlacesError;
use crate::models::place::Place;

const FIXTURES_JSON: &str = include_str!("fixtures.json");

/// Built-in demo places shown when the real provider is unavailable.
pub fn fixture_places() -> Vec<Place> {
    match serde_json::from_str(FIXTURES_JSON) {
        Ok(places) => places,
        Err(err) => {
            log::error!("Built-in fixture places are unreadable: {}", err);
            Vec::new()
        }
    }
}

/// Provider that answers every search with the full fixture set,
/// regardless of location or radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixturePlaces;

#[async_trait]
impl PlacesProvider for FixturePlaces {
    async fn nearby(&self, _request: &NearbyRequest) -> Result<Vec<Place>, PlacesError> {
        Ok(fixture_places())
    }
}

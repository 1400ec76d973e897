use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Local;

use super::{NearbyRequest, PlacesProvider};
use crate::error::PlacesError;
use crate::models::place::Place;

/// Provider backed by a JSON array of place records on disk.
///
/// The file is re-read on every search so edits show up on the next query.
#[derive(Debug, Clone)]
pub struct JsonFilePlaces {
    path: PathBuf,
}

impl JsonFilePlaces {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_all(&self) -> Result<Vec<Place>, PlacesError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            PlacesError::ProviderQueryFailed(format!("cannot read {}: {}", self.path.display(), err))
        })?;
        serde_json::from_str(&raw).map_err(|err| {
            PlacesError::ProviderQueryFailed(format!("cannot parse {}: {}", self.path.display(), err))
        })
    }
}

#[async_trait]
impl PlacesProvider for JsonFilePlaces {
    async fn nearby(&self, request: &NearbyRequest) -> Result<Vec<Place>, PlacesError> {
        let places = self.read_all().await?;
        let total = places.len();
        let now = Local::now().naive_local();
        let accepted: Vec<Place> = places
            .into_iter()
            .filter(|place| request.accepts(place, now))
            .collect();
        log::debug!(
            "{}: {} of {} place(s) inside the search area",
            self.path.display(),
            accepted.len(),
            total
        );
        Ok(accepted)
    }
}

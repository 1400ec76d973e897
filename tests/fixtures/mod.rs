// Test fixtures - reusable test data
// Provides consistent places, clocks and fake collaborators across test files
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

/// Fixed instants for testing
pub mod times {
    use super::*;

    /// Wednesday 18 June 2025 at `h:m` UTC
    pub fn wednesday(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 18, h, m, 0).unwrap()
    }

    /// Sunday 22 June 2025 at `h:m` UTC
    pub fn sunday(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 22, h, m, 0).unwrap()
    }
}

/// Sample places for testing
pub mod places {
    use nearby_places::models::place::{Coordinate, Place};
    use nearby_places::models::schedule::{ClockTime, DayHours, WeeklySchedule};

    pub fn hours(open: u16, close: u16) -> DayHours {
        DayHours::new(
            ClockTime::from_hhmm(open).unwrap(),
            ClockTime::from_hhmm(close).unwrap(),
        )
    }

    /// Place a few hundred meters from lower Manhattan, open 08:00 until `close` daily
    pub fn closing_at(id: &str, name: &str, tags: &[&str], close: u16) -> Place {
        Place::new(id, name, Coordinate::new(40.7150, -74.0020))
            .with_vicinity("Hudson St, Tribeca")
            .with_tags(tags.iter().copied())
            .with_schedule(WeeklySchedule::uniform(hours(800, close)))
    }

    pub fn without_hours(id: &str, name: &str, tags: &[&str]) -> Place {
        Place::new(id, name, Coordinate::new(40.7150, -74.0020)).with_tags(tags.iter().copied())
    }

    /// One place per searchable category plus an untagged one
    pub fn neighbourhood() -> Vec<Place> {
        vec![
            closing_at("r1", "Bella Italia", &["restaurant", "food"], 2300),
            closing_at("c1", "Bean There", &["cafe"], 1800),
            closing_at("s1", "Corner Books", &["store", "book_store"], 2000),
            closing_at("t1", "Film Forum", &["movie_theater"], 2400),
            closing_at("m1", "City Museum", &["museum"], 1700),
            closing_at("a1", "Harbor View", &["tourist_attraction"], 2200),
            without_hours("o1", "Pocket Park", &["park"]),
        ]
    }
}

/// Fake collaborators for driving the application
pub mod fakes {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use nearby_places::app::{RenderFrame, Renderer};
    use nearby_places::error::PlacesError;
    use nearby_places::models::place::{Coordinate, Place, PlaceDetails};
    use nearby_places::services::location::LocationProvider;
    use nearby_places::services::places::{NearbyRequest, PlacesProvider};

    /// Returns a fixed result set and remembers every request
    #[derive(Default)]
    pub struct RecordingPlaces {
        places: Vec<Place>,
        requests: Arc<Mutex<Vec<NearbyRequest>>>,
    }

    impl RecordingPlaces {
        pub fn new(places: Vec<Place>) -> Self {
            Self {
                places,
                requests: Arc::default(),
            }
        }

        pub fn requests(&self) -> Vec<NearbyRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PlacesProvider for RecordingPlaces {
        async fn nearby(&self, request: &NearbyRequest) -> Result<Vec<Place>, PlacesError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.places.clone())
        }
    }

    /// Nearby search fails outright
    pub struct FailingPlaces;

    #[async_trait]
    impl PlacesProvider for FailingPlaces {
        async fn nearby(&self, _request: &NearbyRequest) -> Result<Vec<Place>, PlacesError> {
            Err(PlacesError::ProviderQueryFailed("REQUEST_DENIED".into()))
        }
    }

    /// Nearby search succeeds but every detail fetch fails
    pub struct BrokenDetails(pub Vec<Place>);

    #[async_trait]
    impl PlacesProvider for BrokenDetails {
        async fn nearby(&self, _request: &NearbyRequest) -> Result<Vec<Place>, PlacesError> {
            Ok(self.0.clone())
        }

        async fn details(&self, place_id: &str) -> Result<Option<PlaceDetails>, PlacesError> {
            Err(PlacesError::ProviderQueryFailed(format!("details for {place_id}: NOT_FOUND")))
        }
    }

    /// Never answers within any reasonable timeout
    pub struct SlowLocation;

    #[async_trait]
    impl LocationProvider for SlowLocation {
        async fn current_location(&self) -> Result<Coordinate, PlacesError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Coordinate::new(0.0, 0.0))
        }
    }

    /// Keeps everything it was asked to show
    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub frames: Vec<RenderFrame>,
        pub notices: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, frame: &RenderFrame) {
            self.frames.push(frame.clone());
        }

        fn notice(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }
}

//! Category filter and free-text search over a place set.
//!
//! Both predicates are applied together: a place is visible when its
//! category passes the selection AND, if a query is set, its name or
//! vicinity contains the query (case-insensitive). The result is an
//! order-preserving subsequence of the input.

use serde::{Deserialize, Serialize};

use crate::models::filter::FilterState;
use crate::models::place::Place;

/// Free-text search input. Surrounding whitespace is ignored and an empty
/// query filters nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Lower-cased, trimmed needle, or `None` when there is nothing to match.
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.0.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}

impl From<&str> for SearchQuery {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// `needle` must already be lower-cased.
pub fn matches_needle(place: &Place, needle: &str) -> bool {
    place.name.to_lowercase().contains(needle)
        || place
            .vicinity
            .as_deref()
            .is_some_and(|vicinity| vicinity.to_lowercase().contains(needle))
}

pub fn apply_filters<'a>(places: &'a [Place], filter: &FilterState, query: &SearchQuery) -> Vec<&'a Place> {
    let needle = query.needle();

    places
        .iter()
        .filter(|place| filter.admits(place.category()))
        .filter(|place| needle.as_deref().map_or(true, |needle| matches_needle(place, needle)))
        .collect()
}

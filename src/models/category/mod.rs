//! Canonical place categories.
//!
//! Providers tag places with many overlapping type strings. Each place is
//! reduced to exactly one [`Category`] by a fixed first-match priority, so
//! a place tagged both `cafe` and `restaurant` is a restaurant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Restaurant,
    Cafe,
    Store,
    MovieTheater,
    Museum,
    TouristAttraction,
    Other,
}

/// Classification priority: the first row with a matching tag wins.
const TAG_PRIORITY: &[(Category, &[&str])] = &[
    (Category::Restaurant, &["restaurant"]),
    (Category::Cafe, &["cafe", "coffee"]),
    (Category::Store, &["store", "shopping"]),
    (Category::MovieTheater, &["movie_theater"]),
    (Category::Museum, &["museum"]),
    (Category::TouristAttraction, &["tourist_attraction"]),
];

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Restaurant,
        Category::Cafe,
        Category::Store,
        Category::MovieTheater,
        Category::Museum,
        Category::TouristAttraction,
        Category::Other,
    ];

    /// Categories a nearby search asks the provider for.
    pub const SEARCHABLE: [Category; 6] = [
        Category::Restaurant,
        Category::Cafe,
        Category::Store,
        Category::MovieTheater,
        Category::Museum,
        Category::TouristAttraction,
    ];

    /// Reduce raw provider tags to one category. Total: anything unmatched,
    /// including an empty tag list, is [`Category::Other`].
    pub fn classify<S: AsRef<str>>(tags: &[S]) -> Category {
        TAG_PRIORITY
            .iter()
            .find(|(_, aliases)| {
                tags.iter().any(|tag| {
                    aliases
                        .iter()
                        .any(|alias| tag.as_ref().trim().eq_ignore_ascii_case(alias))
                })
            })
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }

    /// Stable key, identical to the provider tag for the category.
    pub fn key(self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Cafe => "cafe",
            Category::Store => "store",
            Category::MovieTheater => "movie_theater",
            Category::Museum => "museum",
            Category::TouristAttraction => "tourist_attraction",
            Category::Other => "other",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Restaurant => "Restaurant",
            Category::Cafe => "Café",
            Category::Store => "Shop",
            Category::MovieTheater => "Movie Theater",
            Category::Museum => "Museum",
            Category::TouristAttraction => "Attraction",
            Category::Other => "Place",
        }
    }

    /// Marker color as a hex code.
    pub fn color(self) -> &'static str {
        match self {
            Category::Restaurant => "#FF6B6B",
            Category::Cafe => "#8B4513",
            Category::Store => "#9C27B0",
            Category::MovieTheater => "#D32F2F",
            Category::Museum => "#3F51B5",
            Category::TouristAttraction => "#FFC400",
            Category::Other => "#6B7380",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Restaurant => "🍽",
            Category::Cafe => "☕",
            Category::Store => "🛍",
            Category::MovieTheater => "🎬",
            Category::Museum => "🏛",
            Category::TouristAttraction => "⭐",
            Category::Other => "📍",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returned when a string is not a category key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected one of: all, {})",
            self.0,
            Category::ALL.map(Category::key).join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

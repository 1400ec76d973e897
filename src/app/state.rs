use std::fmt;
use std::str::FromStr;

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::models::filter::FilterState;
use crate::models::place::{Coordinate, Place};
use crate::models::settings::Settings;
use crate::services::countdown::CountdownBoard;
use crate::services::favorites::Favorites;
use crate::services::search::SearchQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationStatus {
    #[default]
    Locating,
    Found,
    /// Lookup failed; searches run around the fallback coordinate.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Map,
    List,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Map => write!(f, "map"),
            ViewMode::List => write!(f, "list"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "map" => Ok(ViewMode::Map),
            "list" => Ok(ViewMode::List),
            other => Err(format!("Unknown view '{other}', expected map or list")),
        }
    }
}

/// Everything the widget knows. Only `update` mutates it.
#[derive(Debug, Clone)]
pub struct AppState<Tz: TimeZone = Local> {
    pub settings: Settings,
    /// Current result set; replaced wholesale on every load.
    pub places: Vec<Place>,
    pub places_loaded: bool,
    pub using_fixtures: bool,
    pub filter: FilterState,
    /// Query the visible list is filtered by.
    pub query: SearchQuery,
    /// Latest typed query waiting for the debounce to settle.
    pub pending_query: Option<SearchQuery>,
    pub user_location: Option<Coordinate>,
    pub location_status: LocationStatus,
    pub view: ViewMode,
    pub favorites: Favorites,
    pub countdowns: CountdownBoard<Tz>,
    pub notice: Option<String>,
    /// Stop after the first frame that shows loaded places.
    pub one_shot: bool,
    pub stopped: bool,
}

impl<Tz: TimeZone> AppState<Tz> {
    pub fn new(settings: Settings, favorites: Favorites) -> Self {
        let thresholds = settings.countdown_config().thresholds;
        Self {
            settings,
            places: Vec::new(),
            places_loaded: false,
            using_fixtures: false,
            filter: FilterState::default(),
            query: SearchQuery::default(),
            pending_query: None,
            user_location: None,
            location_status: LocationStatus::default(),
            view: ViewMode::default(),
            favorites,
            countdowns: CountdownBoard::new(thresholds),
            notice: None,
            one_shot: false,
            stopped: false,
        }
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_query(mut self, query: SearchQuery) -> Self {
        self.query = query;
        self
    }

    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    pub fn one_shot(mut self, one_shot: bool) -> Self {
        self.one_shot = one_shot;
        self
    }

    pub fn place(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == id)
    }
}

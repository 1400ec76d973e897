use std::time::Duration;

use crate::error::PlacesError;
use crate::models::filter::CategoryToggle;
use crate::models::place::{Coordinate, Place, PlaceId};
use crate::services::places::NearbyRequest;

use super::state::ViewMode;
use super::view_model::RenderFrame;

/// Inputs to the state machine: user actions, timer expiries and provider
/// completions.
#[derive(Debug)]
pub enum Event {
    Started,
    LocationResolved(Result<Coordinate, PlacesError>),
    PlacesLoaded(Result<Vec<Place>, PlacesError>),
    CategoryToggled(CategoryToggle),
    SearchChanged(String),
    /// The debounce started by the last `SearchChanged` elapsed.
    SearchDebounced,
    SearchSubmitted,
    FavoriteToggled(PlaceId),
    ViewSwitched(ViewMode),
    Tick,
    Resumed,
    Shutdown,
}

/// Side effects requested by the state machine, executed in order by the
/// driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RequestLocation,
    SearchPlaces(NearbyRequest),
    /// Restart the search debounce timer.
    DebounceSearch(Duration),
    CancelCountdowns,
    ScheduleCountdowns {
        period: Duration,
        place_ids: Vec<PlaceId>,
    },
    Render(RenderFrame),
    ShowNotice(String),
    /// Write the encoded favorites back to the store.
    PersistFavorites(String),
    Stop,
}

/// Parse one interactive input line.
///
/// `c <key|all>` toggles a category, `s [text]` edits the search box,
/// `enter` submits it, `f <id>` toggles a favorite, `v map|list` switches
/// the view, `r` redraws, `q` quits.
pub fn parse_input_line(line: &str) -> Result<Event, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "c" | "category" => rest
            .parse::<CategoryToggle>()
            .map(Event::CategoryToggled)
            .map_err(|err| err.to_string()),
        "s" | "search" => Ok(Event::SearchChanged(rest.to_string())),
        "enter" => Ok(Event::SearchSubmitted),
        "f" | "fav" if !rest.is_empty() => Ok(Event::FavoriteToggled(rest.to_string())),
        "v" | "view" => rest.parse().map(Event::ViewSwitched),
        "r" | "refresh" => Ok(Event::Resumed),
        "q" | "quit" => Ok(Event::Shutdown),
        "" => Err("Empty command".to_string()),
        other => Err(format!("Unknown command '{other}'")),
    }
}

//! The state machine.
//!
//! `update` is the only place [`AppState`] changes. It never blocks and never
//! performs I/O; everything with a side effect comes back as a [`Command`]
//! for the driver. Two orderings hold for every transition:
//!
//! * a new place set fully replaces the old one before anything is filtered;
//! * countdown timers are cancelled before new ones are scheduled.

use chrono::{DateTime, TimeZone};

use crate::models::place::PlaceId;
use crate::services::countdown::{
    closed_message, escalation_message, resolve_closing_time_with_default, TickReport,
};
use crate::services::places::fixture_places;
use crate::services::search::apply_filters;

use super::events::{Command, Event};
use super::state::{AppState, LocationStatus};
use super::view_model::{PlaceViewModel, RenderFrame};

pub const DEMO_DATA_NOTICE: &str = "Using demo data - some features may be limited";

pub fn update<Tz: TimeZone>(state: &mut AppState<Tz>, event: Event, now: DateTime<Tz>) -> Vec<Command> {
    match event {
        Event::Started => {
            state.location_status = LocationStatus::Locating;
            vec![Command::RequestLocation]
        }
        Event::LocationResolved(Ok(location)) => {
            log::info!("Located user at ({:.4}, {:.4})", location.lat, location.lng);
            state.user_location = Some(location);
            state.location_status = LocationStatus::Found;
            vec![Command::SearchPlaces(state.settings.nearby_request(location))]
        }
        Event::LocationResolved(Err(err)) => {
            let fallback = state.settings.fallback_location;
            log::warn!(
                "{}; searching around fallback ({:.4}, {:.4})",
                err,
                fallback.lat,
                fallback.lng
            );
            state.user_location = None;
            state.location_status = LocationStatus::Unavailable;
            vec![Command::SearchPlaces(state.settings.nearby_request(fallback))]
        }
        Event::PlacesLoaded(Ok(places)) => {
            log::info!("Loaded {} place(s)", places.len());
            state.places = places;
            state.places_loaded = true;
            state.using_fixtures = false;
            state.notice = None;
            rerender(state, &now)
        }
        Event::PlacesLoaded(Err(err)) => {
            log::warn!("{}; falling back to demo places", err);
            state.places = fixture_places();
            state.places_loaded = true;
            state.using_fixtures = true;
            state.notice = Some(DEMO_DATA_NOTICE.to_string());

            let mut commands = vec![Command::ShowNotice(DEMO_DATA_NOTICE.to_string())];
            commands.extend(rerender(state, &now));
            commands
        }
        Event::CategoryToggled(toggle) => {
            let next = state.filter.clone().toggle(toggle);
            if next == state.filter {
                return Vec::new();
            }
            log::debug!("Category filter now {:?}", next.active_keys());
            state.filter = next;
            rerender(state, &now)
        }
        Event::SearchChanged(text) => {
            state.pending_query = Some(text.as_str().into());
            vec![Command::DebounceSearch(state.settings.search_debounce())]
        }
        Event::SearchDebounced => match state.pending_query.take() {
            Some(query) => {
                state.query = query;
                rerender(state, &now)
            }
            None => Vec::new(),
        },
        Event::SearchSubmitted => {
            if let Some(query) = state.pending_query.take() {
                state.query = query;
            }
            rerender(state, &now)
        }
        Event::FavoriteToggled(id) => {
            let now_favorite = state.favorites.toggle(&id);
            log::debug!("Favorite {} -> {}", id, now_favorite);

            let mut commands = vec![Command::PersistFavorites(state.favorites.to_stored())];
            commands.extend(rerender(state, &now));
            commands
        }
        Event::ViewSwitched(view) => {
            if view == state.view {
                return Vec::new();
            }
            state.view = view;
            rerender(state, &now)
        }
        Event::Tick => tick(state, &now),
        Event::Resumed => rerender(state, &now),
        Event::Shutdown => {
            state.stopped = true;
            state.countdowns.clear();
            vec![Command::CancelCountdowns, Command::Stop]
        }
    }
}

/// Resolve closing times for the visible set, redraw, restart the timer.
fn rerender<Tz: TimeZone>(state: &mut AppState<Tz>, now: &DateTime<Tz>) -> Vec<Command> {
    if !state.places_loaded {
        return Vec::new();
    }

    let default_hour = state.settings.default_closing_hour;
    let closings: Vec<(PlaceId, DateTime<Tz>)> = apply_filters(&state.places, &state.filter, &state.query)
        .into_iter()
        .map(|place| {
            let closes_at = resolve_closing_time_with_default(place.schedule(), now, default_hour);
            (place.id.clone(), closes_at)
        })
        .collect();
    state.countdowns.replace(closings, now);

    let mut commands = vec![Command::CancelCountdowns, Command::Render(frame(state))];
    if state.one_shot {
        state.stopped = true;
        commands.push(Command::Stop);
    } else if state.countdowns.has_active() {
        commands.push(schedule(state));
    }
    commands
}

fn tick<Tz: TimeZone>(state: &mut AppState<Tz>, now: &DateTime<Tz>) -> Vec<Command> {
    if !state.countdowns.has_active() {
        return vec![Command::CancelCountdowns];
    }

    let report = state.countdowns.refresh(now);
    for message in tick_notices(state, &report) {
        log::info!("{}", message);
    }

    let mut commands = Vec::new();
    if !report.is_empty() {
        commands.push(Command::Render(frame(state)));
    }
    if !report.newly_closed.is_empty() {
        commands.push(Command::CancelCountdowns);
        if state.countdowns.has_active() {
            commands.push(schedule(state));
        }
    }
    commands
}

/// Escalation notices, then one per place that closed on this tick. A
/// place that went straight to closed only gets the closing notice.
fn tick_notices<Tz: TimeZone>(state: &AppState<Tz>, report: &TickReport) -> Vec<String> {
    let mut notices = Vec::new();

    for escalation in &report.escalations {
        if report.newly_closed.contains(&escalation.place_id) {
            continue;
        }
        let name = state.place(&escalation.place_id).map(|place| place.name.as_str());
        let label = state
            .countdowns
            .entry(&escalation.place_id)
            .map(|entry| entry.last_label.as_str());
        if let (Some(name), Some(label)) = (name, label) {
            notices.extend(escalation_message(name, escalation.from, escalation.to, label));
        }
    }

    for place_id in &report.newly_closed {
        if let Some(place) = state.place(place_id) {
            notices.push(closed_message(&place.name));
        }
    }

    notices
}

fn schedule<Tz: TimeZone>(state: &AppState<Tz>) -> Command {
    Command::ScheduleCountdowns {
        period: state.settings.tick_interval(),
        place_ids: state.countdowns.active_ids(),
    }
}

fn frame<Tz: TimeZone>(state: &AppState<Tz>) -> RenderFrame {
    let places = apply_filters(&state.places, &state.filter, &state.query)
        .into_iter()
        .filter_map(|place| {
            let countdown = state.countdowns.entry(&place.id)?;
            Some(PlaceViewModel::build(
                place,
                countdown,
                state.user_location,
                state.favorites.contains(&place.id),
            ))
        })
        .collect();

    RenderFrame {
        view: state.view,
        location_status: state.location_status,
        using_fixtures: state.using_fixtures,
        places,
    }
}

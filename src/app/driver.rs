//! Async executor for [`Command`]s.
//!
//! The driver owns the [`AppState`] and is the only task that calls
//! [`update`]. Provider calls and timers run as spawned tasks that report
//! back through the event channel. At most one countdown ticker and one
//! search debounce exist at a time; starting either aborts the previous one.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::PlacesError;
use crate::models::place::PlaceId;
use crate::services::favorites::{KeyValueStore, FAVORITES_KEY};
use crate::services::location::LocationProvider;
use crate::services::places::{search_with_details, NearbyRequest, PlacesProvider};

use super::events::{Command, Event};
use super::render::Renderer;
use super::state::AppState;
use super::update::update;

/// Sends events into a running driver from other tasks or threads.
#[derive(Debug, Clone)]
pub struct DriverHandle {
    events: mpsc::UnboundedSender<Event>,
}

impl DriverHandle {
    /// Returns `false` once the driver has stopped.
    pub fn send(&self, event: Event) -> bool {
        self.events.send(event).is_ok()
    }
}

/// What is left once the driver stops.
pub struct Finished<R> {
    pub state: AppState,
    pub renderer: R,
    pub store: Box<dyn KeyValueStore>,
}

enum Flow {
    Continue,
    Stop,
}

pub struct Driver<R: Renderer> {
    state: AppState,
    location: Arc<dyn LocationProvider>,
    places: Arc<dyn PlacesProvider>,
    store: Box<dyn KeyValueStore>,
    renderer: R,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    countdown_task: Option<JoinHandle<()>>,
    debounce_task: Option<JoinHandle<()>>,
}

impl<R: Renderer> Driver<R> {
    /// `Started` is queued immediately, ahead of anything sent through a
    /// handle.
    pub fn new(
        state: AppState,
        location: Arc<dyn LocationProvider>,
        places: Arc<dyn PlacesProvider>,
        store: Box<dyn KeyValueStore>,
        renderer: R,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let _ = events_tx.send(Event::Started);
        Self {
            state,
            location,
            places,
            store,
            renderer,
            events_tx,
            events_rx,
            countdown_task: None,
            debounce_task: None,
        }
    }

    pub fn handle(&self) -> DriverHandle {
        DriverHandle {
            events: self.events_tx.clone(),
        }
    }

    pub async fn run(mut self) -> Finished<R> {
        log::info!("Nearby places driver started");

        while let Some(event) = self.events_rx.recv().await {
            log::trace!("Event: {:?}", event);
            let commands = update(&mut self.state, event, Local::now());
            if let Flow::Stop = self.execute(commands) {
                break;
            }
        }

        self.cancel_countdowns();
        self.cancel_debounce();
        log::info!("Nearby places driver stopped");

        Finished {
            state: self.state,
            renderer: self.renderer,
            store: self.store,
        }
    }

    fn execute(&mut self, commands: Vec<Command>) -> Flow {
        for command in commands {
            match command {
                Command::RequestLocation => self.request_location(),
                Command::SearchPlaces(request) => self.search_places(request),
                Command::DebounceSearch(delay) => self.debounce_search(delay),
                Command::CancelCountdowns => self.cancel_countdowns(),
                Command::ScheduleCountdowns { period, place_ids } => {
                    self.schedule_countdowns(period, &place_ids)
                }
                Command::Render(frame) => self.renderer.render(&frame),
                Command::ShowNotice(message) => self.renderer.notice(&message),
                Command::PersistFavorites(encoded) => self.store.set(FAVORITES_KEY, encoded),
                Command::Stop => return Flow::Stop,
            }
        }
        Flow::Continue
    }

    fn request_location(&self) {
        let provider = Arc::clone(&self.location);
        let events = self.events_tx.clone();
        let timeout = self.state.settings.location_timeout();

        tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, provider.current_location()).await {
                Ok(result) => result,
                Err(_) => Err(PlacesError::LocationUnavailable(format!(
                    "timed out after {}s",
                    timeout.as_secs()
                ))),
            };
            let _ = events.send(Event::LocationResolved(result));
        });
    }

    fn search_places(&self, request: NearbyRequest) {
        let provider = Arc::clone(&self.places);
        let events = self.events_tx.clone();

        tokio::spawn(async move {
            let result = search_with_details(provider.as_ref(), &request).await;
            let _ = events.send(Event::PlacesLoaded(result));
        });
    }

    fn debounce_search(&mut self, delay: Duration) {
        self.cancel_debounce();
        let events = self.events_tx.clone();

        self.debounce_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(Event::SearchDebounced);
        }));
    }

    fn schedule_countdowns(&mut self, period: Duration, place_ids: &[PlaceId]) {
        self.cancel_countdowns();
        log::debug!("Ticking {} countdown(s) every {:?}", place_ids.len(), period);
        let events = self.events_tx.clone();

        self.countdown_task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if events.send(Event::Tick).is_err() {
                    break;
                }
            }
        }));
    }

    fn cancel_countdowns(&mut self) {
        if let Some(task) = self.countdown_task.take() {
            task.abort();
        }
    }

    fn cancel_debounce(&mut self) {
        if let Some(task) = self.debounce_task.take() {
            task.abort();
        }
    }
}

// Nearby Places
// Main entry point

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use nearby_places::app::{parse_input_line, AppState, Driver, Event, TextRenderer};
use nearby_places::models::category::Category;
use nearby_places::models::filter::FilterState;
use nearby_places::models::place::Coordinate;
use nearby_places::services::favorites::{Favorites, MemoryStore};
use nearby_places::services::location::{FixedLocation, LocationProvider, Unavailable};
use nearby_places::services::places::{FixturePlaces, JsonFilePlaces, PlacesProvider};
use nearby_places::services::search::SearchQuery;
use nearby_places::services::settings::{default_settings_path, load_or_default, load_settings};

/// Lists nearby places with a live countdown to each one's closing time.
#[derive(Debug, Parser)]
#[command(name = "nearby-places", version, about, allow_negative_numbers = true)]
struct Cli {
    /// JSON file of place records to search instead of the built-in demo set.
    #[arg(long, value_name = "FILE")]
    places: Option<PathBuf>,

    /// Your latitude; without --lat/--lng the location is treated as unavailable.
    #[arg(long, requires = "lng")]
    lat: Option<f64>,

    #[arg(long, requires = "lat")]
    lng: Option<f64>,

    /// Only show this category (repeatable).
    #[arg(long = "category", value_name = "KEY")]
    categories: Vec<Category>,

    /// Case-insensitive text to match against name or address.
    #[arg(long)]
    query: Option<String>,

    /// Include places that are closed right now.
    #[arg(long)]
    include_closed: bool,

    /// Print frames as JSON lines.
    #[arg(long)]
    json: bool,

    /// Keep running: redraw on every countdown tick and read commands from stdin.
    #[arg(long)]
    watch: bool,

    /// Settings file (defaults to settings.toml in the user config dir).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => load_settings(path).context("could not load --config")?,
        None => load_or_default(&default_settings_path()),
    };
    if cli.include_closed {
        settings.open_now_only = false;
    }

    let location: Arc<dyn LocationProvider> = match (cli.lat, cli.lng) {
        (Some(lat), Some(lng)) => Arc::new(FixedLocation(Coordinate::new(lat, lng))),
        _ => Arc::new(Unavailable::new("no --lat/--lng given")),
    };
    let places: Arc<dyn PlacesProvider> = match &cli.places {
        Some(path) => Arc::new(JsonFilePlaces::new(path)),
        None => Arc::new(FixturePlaces),
    };

    let store = MemoryStore::new();
    let state = AppState::new(settings, Favorites::load(&store))
        .with_filter(FilterState::from_categories(cli.categories))
        .with_query(SearchQuery::new(cli.query.unwrap_or_default()))
        .one_shot(!cli.watch);

    let renderer = TextRenderer::new(io::stdout(), cli.json);
    let driver = Driver::new(state, location, places, Box::new(store), renderer);

    if cli.watch {
        let handle = driver.handle();
        // A plain thread: a blocked stdin read must not hold up runtime shutdown.
        std::thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                match parse_input_line(&line) {
                    Ok(event) => {
                        if !handle.send(event) {
                            break;
                        }
                    }
                    Err(err) => log::warn!("{}", err),
                }
            }
        });

        let handle = driver.handle();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                handle.send(Event::Shutdown);
            }
        });
    }

    let finished = driver.run().await;
    log::info!(
        "Exiting with {} place(s) loaded, {} favorite(s)",
        finished.state.places.len(),
        finished.state.favorites.len()
    );
    Ok(())
}

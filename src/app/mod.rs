//! Application layer: state, transitions and the async driver.

mod driver;
mod events;
mod render;
mod state;
mod update;
mod view_model;

pub use driver::{Driver, DriverHandle, Finished};
pub use events::{parse_input_line, Command, Event};
pub use render::{Renderer, TextRenderer};
pub use state::{AppState, LocationStatus, ViewMode};
pub use update::{update, DEMO_DATA_NOTICE};
pub use view_model::{PlaceViewModel, RenderFrame};

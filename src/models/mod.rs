// Module exports for models

pub mod category;
pub mod filter;
pub mod place;
pub mod schedule;
pub mod settings;

// Nearby Places library
// Exports all modules for testing and reuse

pub mod app;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub mod date;
pub mod geo;

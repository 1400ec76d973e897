// Service module exports

pub mod countdown;
pub mod favorites;
pub mod location;
pub mod places;
pub mod search;
pub mod settings;

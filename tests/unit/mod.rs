mod models;
mod services;

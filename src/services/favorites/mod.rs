//! Favorite places.
//!
//! The favorite set lives in a string key/value store under a single key as
//! a JSON array of place IDs. It is read once at startup; every toggle
//! produces the new encoded value for the driver to write back.

use std::collections::HashMap;

use crate::models::place::PlaceId;

pub const FAVORITES_KEY: &str = "favorites";

/// String-keyed storage that outlives a session.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Favorite place IDs in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<PlaceId>,
}

impl Favorites {
    /// Decode the stored value. Anything unreadable starts an empty set.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match serde_json::from_str::<Vec<PlaceId>>(raw) {
            Ok(ids) => {
                let mut favorites = Self::default();
                for id in ids {
                    if !favorites.contains(&id) {
                        favorites.ids.push(id);
                    }
                }
                favorites
            }
            Err(err) => {
                log::warn!("Ignoring unreadable favorites ({}), starting empty", err);
                Self::default()
            }
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::from_stored(store.get(FAVORITES_KEY).as_deref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Flip membership of `id`; returns whether it is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(index) = self.ids.iter().position(|fav| fav == id) {
            self.ids.remove(index);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn ids(&self) -> &[PlaceId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Value to write under [`FAVORITES_KEY`].
    pub fn to_stored(&self) -> String {
        serde_json::Value::from(self.ids.clone()).to_string()
    }
}

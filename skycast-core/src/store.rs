//! Best-effort local persistence for search history and favorites.
//!
//! Unlike [`crate::config::Config`], nothing here ever surfaces an error:
//! missing, unreadable or corrupt data degrades to the empty default and
//! failures to write are logged and swallowed.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// Most recent searches kept, newest first.
const HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub history: Vec<String>,

    #[serde(default)]
    pub favorites: Vec<String>,
}

impl Store {
    pub fn load() -> Self {
        let Some(path) = Self::store_file_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                debug!(path = %path.display(), error = %e, "corrupt store file, starting empty");
                Self::default()
            }),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no readable store file, starting empty");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        let Some(path) = Self::store_file_path() else {
            return;
        };

        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                debug!(path = %parent.display(), error = %e, "could not create store directory");
                return;
            }
        }

        match toml::to_string_pretty(self) {
            Ok(toml) => {
                if let Err(e) = fs::write(&path, toml) {
                    debug!(path = %path.display(), error = %e, "could not write store file");
                }
            }
            Err(e) => debug!(error = %e, "could not serialize store"),
        }
    }

    fn store_file_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")?;
        Some(dirs.data_dir().join("store.toml"))
    }

    /// Record a successful search: newest first, exact-match dedup, capped at
    /// [`HISTORY_LIMIT`] entries.
    pub fn record_search(&mut self, location: &str) {
        self.history.retain(|entry| entry != location);
        self.history.insert(0, location.to_string());
        self.history.truncate(HISTORY_LIMIT);
    }

    /// Returns false when the location is already a favorite.
    pub fn add_favorite(&mut self, location: &str) -> bool {
        if self.favorites.iter().any(|f| f == location) {
            return false;
        }
        self.favorites.push(location.to_string());
        true
    }

    /// Returns false when the location was not a favorite.
    pub fn remove_favorite(&mut self, location: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|f| f != location);
        self.favorites.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = Store::default();
        assert!(store.history.is_empty());
        assert!(store.favorites.is_empty());
    }

    #[test]
    fn record_search_is_newest_first() {
        let mut store = Store::default();
        store.record_search("London");
        store.record_search("Paris");

        assert_eq!(store.history, vec!["Paris", "London"]);
    }

    #[test]
    fn record_search_moves_duplicates_to_front() {
        let mut store = Store::default();
        store.record_search("London");
        store.record_search("Paris");
        store.record_search("London");

        assert_eq!(store.history, vec!["London", "Paris"]);
    }

    #[test]
    fn record_search_caps_history() {
        let mut store = Store::default();
        for city in ["A", "B", "C", "D", "E", "F", "G"] {
            store.record_search(city);
        }

        assert_eq!(store.history.len(), HISTORY_LIMIT);
        assert_eq!(store.history.first().map(String::as_str), Some("G"));
        assert!(!store.history.contains(&"A".to_string()));
    }

    #[test]
    fn favorites_reject_duplicates() {
        let mut store = Store::default();
        assert!(store.add_favorite("Mumbai"));
        assert!(!store.add_favorite("Mumbai"));
        assert_eq!(store.favorites, vec!["Mumbai"]);
    }

    #[test]
    fn remove_favorite_reports_whether_anything_changed() {
        let mut store = Store::default();
        store.add_favorite("Mumbai");

        assert!(store.remove_favorite("Mumbai"));
        assert!(!store.remove_favorite("Mumbai"));
        assert!(store.favorites.is_empty());
    }

    #[test]
    fn corrupt_toml_degrades_to_default() {
        let parsed: Result<Store, _> = toml::from_str("history = 42");
        assert!(parsed.is_err());
        // load() maps this failure to the default; the parse-level check is
        // what guards that path without touching the real data directory.
    }

    #[test]
    fn toml_roundtrip_preserves_lists() {
        let mut store = Store::default();
        store.record_search("Paris");
        store.add_favorite("London");

        let toml = toml::to_string_pretty(&store).unwrap();
        let parsed: Store = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, store);
    }
}

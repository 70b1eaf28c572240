//! Typed accessors over the key/value store

use crate::{FileKvStore, StoreError};
use chrono::NaiveDate;
use copydesk_domain::{FavoriteCopy, Theme};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;
use uuid::Uuid;

/// Key holding the once-per-day concept cache
pub const DAILY_CONCEPT_KEY: &str = "daily-concept";

/// Key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// Key holding the favorites list
pub const FAVORITES_KEY: &str = "favorites";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The cached daily concept with the date it was fetched on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyConcept {
    /// The concept text
    pub concept: String,

    /// Fetch date, `YYYY-MM-DD`
    pub date: String,
}

/// Client-side application state over a [`FileKvStore`].
///
/// Dates are passed in by the caller so cache invalidation can be tested
/// against a simulated clock.
#[derive(Debug)]
pub struct StateStore {
    kv: FileKvStore,
}

impl StateStore {
    /// Open the state store at the given file path
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Ok(Self {
            kv: FileKvStore::open(path)?,
        })
    }

    /// The cached concept, if it was fetched today. A date mismatch or a
    /// corrupt payload yields `None`.
    pub fn daily_concept(&self, today: NaiveDate) -> Option<String> {
        let raw = self.kv.get(DAILY_CONCEPT_KEY)?;
        let cached: DailyConcept = match serde_json::from_str(raw) {
            Ok(cached) => cached,
            Err(e) => {
                warn!(error = %e, "corrupt daily-concept payload");
                return None;
            }
        };

        if cached.date == today.format(DATE_FORMAT).to_string() {
            Some(cached.concept)
        } else {
            None
        }
    }

    /// Whether a fresh concept should be fetched for the given date
    pub fn should_fetch_concept(&self, today: NaiveDate) -> bool {
        self.daily_concept(today).is_none()
    }

    /// Cache a concept under the given date
    pub fn set_daily_concept(&mut self, concept: &str, today: NaiveDate) -> Result<(), StoreError> {
        let cached = DailyConcept {
            concept: concept.to_string(),
            date: today.format(DATE_FORMAT).to_string(),
        };
        self.kv.set(DAILY_CONCEPT_KEY, serde_json::to_string(&cached)?)
    }

    /// Drop the cached concept
    pub fn clear_daily_concept(&mut self) -> Result<(), StoreError> {
        self.kv.remove(DAILY_CONCEPT_KEY)?;
        Ok(())
    }

    /// The stored theme preference; unknown or missing values are Light
    pub fn theme(&self) -> Theme {
        self.kv.get(THEME_KEY).map(Theme::parse).unwrap_or_default()
    }

    /// Persist the theme preference
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.kv.set(THEME_KEY, theme.as_str())
    }

    /// All favorites, newest first
    pub fn favorites(&self) -> Vec<FavoriteCopy> {
        let mut favorites = self.load_favorites();
        favorites.reverse();
        favorites
    }

    /// Append a favorite
    pub fn add_favorite(&mut self, favorite: FavoriteCopy) -> Result<(), StoreError> {
        let mut favorites = self.load_favorites();
        favorites.push(favorite);
        self.kv.set(FAVORITES_KEY, serde_json::to_string(&favorites)?)
    }

    /// Remove a favorite by id. Returns whether it existed.
    pub fn remove_favorite(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let mut favorites = self.load_favorites();
        let before = favorites.len();
        favorites.retain(|f| f.id != id);

        if favorites.len() == before {
            return Ok(false);
        }

        self.kv.set(FAVORITES_KEY, serde_json::to_string(&favorites)?)?;
        Ok(true)
    }

    // Favorites in insertion order
    fn load_favorites(&self) -> Vec<FavoriteCopy> {
        let Some(raw) = self.kv.get(FAVORITES_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(raw) {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!(error = %e, "corrupt favorites payload");
                Vec::new()
            }
        }
    }
}

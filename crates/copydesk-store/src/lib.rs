//! Copydesk Store
//!
//! Client-side persistence: a flat, string-keyed store backed by one JSON
//! file, mirroring a browser's key/value storage. Three keys exist: the
//! once-per-day concept cache (invalidated by date mismatch), the theme
//! preference (read at startup), and the favorites list.
//!
//! Writes persist immediately; there are no transactions and no locks. All
//! mutation happens synchronously in the caller's thread.

#![warn(missing_docs)]

mod kv;
mod state;

use thiserror::Error;

pub use kv::FileKvStore;
pub use state::{DailyConcept, StateStore, DAILY_CONCEPT_KEY, FAVORITES_KEY, THEME_KEY};

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error reading or writing the backing file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! Match persistence: upsert by match id, list most recent.

mod csv_file;
mod memory;

pub use csv_file::CsvMatchStore;
pub use memory::InMemoryMatchStore;

use crate::models::{MatchFields, MatchRecord, MatchSummary};
use serde_json::Value;

/// Errors from a match store.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    /// The store's lock was poisoned by a panicking writer.
    Lock,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Match store I/O error: {}", e),
            StoreError::Csv(e) => write!(f, "Match store CSV error: {}", e),
            StoreError::Json(e) => write!(f, "Match store payload error: {}", e),
            StoreError::Lock => write!(f, "Match store lock error"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Csv(e) => Some(e),
            StoreError::Json(e) => Some(e),
            StoreError::Lock => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<csv::Error> for StoreError {
    fn from(e: csv::Error) -> Self {
        StoreError::Csv(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// Number of matches returned by the history listing.
pub const RECENT_LIMIT: usize = 50;

/// Persistence for ingested matches.
pub trait MatchStore: Send + Sync {
    /// Insert or replace the record with `fields.id`. `created_at` is set on
    /// first insert and kept on later updates.
    fn upsert(&self, fields: MatchFields, payload: Value) -> Result<MatchRecord, StoreError>;

    /// Up to `limit` summaries, newest `created_at` first.
    fn recent(&self, limit: usize) -> Result<Vec<MatchSummary>, StoreError>;
}

/// Newest first (ties by id), then keep `limit`.
fn newest_first(mut records: Vec<MatchSummary>, limit: usize) -> Vec<MatchSummary> {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
    records.truncate(limit);
    records
}

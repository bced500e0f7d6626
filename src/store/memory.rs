//! In-memory match store (default when no store file is configured).

use super::{newest_first, MatchStore, StoreError};
use crate::models::{MatchFields, MatchId, MatchRecord, MatchSummary};
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryMatchStore {
    records: RwLock<HashMap<MatchId, MatchRecord>>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchStore for InMemoryMatchStore {
    fn upsert(&self, fields: MatchFields, payload: Value) -> Result<MatchRecord, StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::Lock)?;
        let created_at = records
            .get(&fields.id)
            .map(|r| r.created_at)
            .unwrap_or_else(Utc::now);
        let record = MatchRecord::new(fields, payload, created_at);
        records.insert(record.fields.id.clone(), record.clone());
        Ok(record)
    }

    fn recent(&self, limit: usize) -> Result<Vec<MatchSummary>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Lock)?;
        Ok(newest_first(
            records.values().map(MatchRecord::summary).collect(),
            limit,
        ))
    }
}

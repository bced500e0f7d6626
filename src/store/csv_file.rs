//! CSV-file match store: one row per match, payload kept as a JSON string column.

use super::{newest_first, MatchStore, StoreError};
use crate::models::{MatchFields, MatchRecord, MatchSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Optional text columns are written as JSON (`null` or a quoted string) so an
/// empty string survives a reload; csv itself reads an empty cell back as None.
mod json_cell {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        let text = serde_json::to_string(value).map_err(serde::ser::Error::custom)?;
        s.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let text = String::deserialize(d)?;
        if text.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    id: String,
    created_at: DateTime<Utc>,
    #[serde(with = "json_cell")]
    finished_at: Option<String>,
    #[serde(with = "json_cell")]
    map: Option<String>,
    #[serde(with = "json_cell")]
    team1_name: Option<String>,
    #[serde(with = "json_cell")]
    team2_name: Option<String>,
    team1_score: Option<i64>,
    team2_score: Option<i64>,
    payload: String,
}

impl CsvRow {
    fn from_record(record: &MatchRecord) -> Result<Self, StoreError> {
        let f = &record.fields;
        Ok(Self {
            id: f.id.clone(),
            created_at: record.created_at,
            finished_at: f.finished_at.clone(),
            map: f.map.clone(),
            team1_name: f.team1_name.clone(),
            team2_name: f.team2_name.clone(),
            team1_score: f.team1_score,
            team2_score: f.team2_score,
            payload: serde_json::to_string(&record.payload)?,
        })
    }

    fn into_record(self) -> Result<MatchRecord, StoreError> {
        let payload = serde_json::from_str(&self.payload)?;
        let fields = MatchFields {
            id: self.id,
            finished_at: self.finished_at,
            map: self.map,
            team1_name: self.team1_name,
            team2_name: self.team2_name,
            team1_score: self.team1_score,
            team2_score: self.team2_score,
        };
        Ok(MatchRecord::new(fields, payload, self.created_at))
    }
}

/// Matches kept in a single CSV file. The whole file is rewritten on upsert
/// (through a temp file and rename); the mutex serializes writers.
pub struct CsvMatchStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvMatchStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<MatchRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in rdr.deserialize::<CsvRow>() {
            records.push(row?.into_record()?);
        }
        Ok(records)
    }

    fn save(&self, records: &[MatchRecord]) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("csv.tmp");
        {
            let mut wtr = csv::Writer::from_path(&tmp)?;
            for record in records {
                wtr.serialize(CsvRow::from_record(record)?)?;
            }
            wtr.flush()?;
        }
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl MatchStore for CsvMatchStore {
    fn upsert(&self, fields: MatchFields, payload: Value) -> Result<MatchRecord, StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Lock)?;
        let mut records = self.load()?;
        let record = match records.iter_mut().find(|r| r.fields.id == fields.id) {
            Some(existing) => {
                existing.fields = fields;
                existing.payload = payload;
                existing.clone()
            }
            None => {
                let record = MatchRecord::new(fields, payload, Utc::now());
                records.push(record.clone());
                record
            }
        };
        self.save(&records)?;
        Ok(record)
    }

    fn recent(&self, limit: usize) -> Result<Vec<MatchSummary>, StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Lock)?;
        let summaries = self.load()?.iter().map(MatchRecord::summary).collect();
        Ok(newest_first(summaries, limit))
    }
}

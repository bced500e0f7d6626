//! Finished-match records ingested from the match host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Match identifier as sent by the match host.
pub type MatchId = String;

/// Fields extracted from an ingestion payload, before storing.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchFields {
    pub id: MatchId,
    pub finished_at: Option<String>,
    pub map: Option<String>,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub team1_score: Option<i64>,
    pub team2_score: Option<i64>,
}

/// A stored match: extracted fields, creation time, and the raw payload verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(flatten)]
    pub fields: MatchFields,
    pub created_at: DateTime<Utc>,
    pub payload: Value,
}

impl MatchRecord {
    pub fn new(fields: MatchFields, payload: Value, created_at: DateTime<Utc>) -> Self {
        Self {
            fields,
            created_at,
            payload,
        }
    }

    pub fn id(&self) -> &str {
        &self.fields.id
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            id: self.fields.id.clone(),
            created_at: self.created_at,
            finished_at: self.fields.finished_at.clone(),
            map: self.fields.map.clone(),
            team1_name: self.fields.team1_name.clone(),
            team2_name: self.fields.team2_name.clone(),
            team1_score: self.fields.team1_score,
            team2_score: self.fields.team2_score,
        }
    }
}

/// Listing row for match history (no payload).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: MatchId,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<String>,
    pub map: Option<String>,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub team1_score: Option<i64>,
    pub team2_score: Option<i64>,
}

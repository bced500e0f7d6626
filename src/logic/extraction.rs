//! Field extraction from loosely structured match payloads.
//!
//! Each output field has an ordered list of JSON paths. The first path whose
//! value counts as present wins; later paths are not consulted even when the
//! winning value then fails to convert.

use crate::models::MatchFields;
use serde_json::Value;

/// When a value found at a path counts as present.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Presence {
    /// Anything but null.
    NonNull,
    /// Not null, `false`, `0` or `""`.
    Truthy,
}

/// Ordered lookup paths for one output field.
#[derive(Clone, Copy, Debug)]
pub struct ExtractionRule {
    pub field: &'static str,
    pub paths: &'static [&'static [&'static str]],
    pub presence: Presence,
}

impl ExtractionRule {
    /// The first present value along this rule's paths.
    pub fn first_value<'a>(&self, payload: &'a Value) -> Option<&'a Value> {
        self.paths
            .iter()
            .filter_map(|path| lookup(payload, path))
            .find(|v| is_present(v, self.presence))
    }
}

pub const MATCH_ID: ExtractionRule = ExtractionRule {
    field: "id",
    paths: &[&["match_id"], &["id"], &["match", "id"]],
    presence: Presence::Truthy,
};

pub const FINISHED_AT: ExtractionRule = ExtractionRule {
    field: "finished_at",
    paths: &[&["finished_at"]],
    presence: Presence::NonNull,
};

pub const MAP: ExtractionRule = ExtractionRule {
    field: "map",
    paths: &[&["settings", "map"], &["map"]],
    presence: Presence::NonNull,
};

pub const TEAM1_NAME: ExtractionRule = ExtractionRule {
    field: "team1_name",
    paths: &[&["team1", "name"]],
    presence: Presence::NonNull,
};

pub const TEAM2_NAME: ExtractionRule = ExtractionRule {
    field: "team2_name",
    paths: &[&["team2", "name"]],
    presence: Presence::NonNull,
};

pub const TEAM1_SCORE: ExtractionRule = ExtractionRule {
    field: "team1_score",
    paths: &[&["team1_stats", "score"]],
    presence: Presence::NonNull,
};

pub const TEAM2_SCORE: ExtractionRule = ExtractionRule {
    field: "team2_score",
    paths: &[&["team2_stats", "score"]],
    presence: Presence::NonNull,
};

/// Extract match fields. None if no usable match id is found.
pub fn extract_match_fields(payload: &Value) -> Option<MatchFields> {
    let id = MATCH_ID.first_value(payload).and_then(scalar_text)?;
    Some(MatchFields {
        id,
        finished_at: FINISHED_AT.first_value(payload).and_then(scalar_text),
        map: MAP.first_value(payload).and_then(string),
        team1_name: TEAM1_NAME.first_value(payload).and_then(string),
        team2_name: TEAM2_NAME.first_value(payload).and_then(string),
        team1_score: TEAM1_SCORE.first_value(payload).and_then(integer),
        team2_score: TEAM2_SCORE.first_value(payload).and_then(integer),
    })
}

fn lookup<'a>(payload: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(payload, |v, key| v.as_object()?.get(*key))
}

fn is_present(value: &Value, presence: Presence) -> bool {
    match (presence, value) {
        (_, Value::Null) => false,
        (Presence::NonNull, _) => true,
        (Presence::Truthy, Value::Bool(b)) => *b,
        (Presence::Truthy, Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        (Presence::Truthy, Value::String(s)) => !s.is_empty(),
        (Presence::Truthy, _) => true,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

//! Team count and the live team assignment.

use crate::models::roster::PlayerName;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of teams, always within [`TeamCount::MIN`, `TeamCount::MAX`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(into = "usize", from = "usize")]
pub struct TeamCount(usize);

impl TeamCount {
    pub const MIN: usize = 2;
    pub const MAX: usize = 10;

    /// Clamp any integer into [2, 10].
    pub fn clamped(requested: i64) -> Self {
        Self(requested.clamp(Self::MIN as i64, Self::MAX as i64) as usize)
    }

    /// Interpret a loosely typed request value: numbers and numeric strings are
    /// clamped (fractions truncated); zero, absent or non-numeric input means 2.
    pub fn from_request(value: Option<&Value>) -> Self {
        let requested = match value {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            Some(Value::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            }
            _ => None,
        };
        match requested {
            Some(n) if n != 0 => Self::clamped(n),
            _ => Self::default(),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for TeamCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<usize> for TeamCount {
    fn from(n: usize) -> Self {
        Self::clamped(n.min(i64::MAX as usize) as i64)
    }
}

impl From<TeamCount> for usize {
    fn from(tc: TeamCount) -> usize {
        tc.0
    }
}

/// One team: player names in their current order.
pub type Team = Vec<PlayerName>;

/// Ordered teams. Independent of the roster once created.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamAssignment {
    teams: Vec<Team>,
}

impl TeamAssignment {
    /// `count` empty teams.
    pub fn empty(count: TeamCount) -> Self {
        Self {
            teams: vec![Vec::new(); count.get()],
        }
    }

    pub fn from_teams(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn teams_mut(&mut self) -> &mut [Team] {
        &mut self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Total players across all teams.
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(Vec::len).sum()
    }

    pub fn into_teams(self) -> Vec<Team> {
        self.teams
    }
}

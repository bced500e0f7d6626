//! Session: the owned state for one team-dividing session.

use crate::models::roster::{PlayerName, Roster};
use crate::models::team::{TeamAssignment, TeamCount};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Unique identifier for a session.
pub type SessionId = Uuid;

/// Players used when no roster is configured.
pub const DEFAULT_PLAYERS: [&str; 11] = [
    "LionFr0mZion",
    "mokoloti",
    "Xeponz",
    "Vish3r",
    "captkeen",
    "dolche_karas",
    "ColdFear7",
    "BachduT",
    "alonraz9",
    "AzureBat",
    "Q-wade",
];

/// Errors surfaced by session operations at the HTTP boundary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// Dividing needs at least 2 selected players.
    NotEnoughSelected { selected: usize },
    /// No session with this id (never created, or evicted for inactivity).
    SessionNotFound(SessionId),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NotEnoughSelected { selected } => {
                write!(f, "Select at least 2 players to divide (selected {})", selected)
            }
            SessionError::SessionNotFound(_) => write!(f, "No session"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Roster, requested team count, and the current assignment.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: SessionId,
    pub roster: Roster,
    /// Team count as last requested. Clamped when teams are generated.
    pub team_count: Value,
    pub teams: TeamAssignment,
}

impl Session {
    /// New session with the built-in default roster.
    pub fn new() -> Self {
        Self::with_players(DEFAULT_PLAYERS)
    }

    /// New session with the given roster, everyone selected, and two empty teams.
    pub fn with_players<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id: Uuid::new_v4(),
            roster: Roster::with_players(names),
            team_count: Value::from(TeamCount::MIN),
            teams: TeamAssignment::empty(TeamCount::default()),
        }
    }

    /// The requested team count after clamping.
    pub fn clamped_team_count(&self) -> TeamCount {
        TeamCount::from_request(Some(&self.team_count))
    }

    /// Serializable snapshot for API responses.
    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            players: self.roster.players().to_vec(),
            selected: self.roster.selected_players(),
            selected_count: self.roster.selected_count(),
            team_count: self.team_count.clone(),
            teams: self.teams.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// API view of a session.
#[derive(Clone, Debug, Serialize)]
pub struct SessionView {
    pub id: SessionId,
    pub players: Vec<PlayerName>,
    /// Selected players in roster order.
    pub selected: Vec<PlayerName>,
    pub selected_count: usize,
    pub team_count: Value,
    pub teams: TeamAssignment,
}

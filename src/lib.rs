//! CS2 team divider: library with models, team logic, and the match store.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::Config;
pub use logic::{
    apply, extract_match_fields, format_teams, generate_teams, ingest_match, move_player,
    reset_teams, Action, IngestError, IngestRequest,
};
pub use models::{
    MatchFields, MatchId, MatchRecord, MatchSummary, PlayerName, Roster, Session, SessionError,
    SessionId, SessionView, Team, TeamAssignment, TeamCount, DEFAULT_PLAYERS,
};
pub use store::{CsvMatchStore, InMemoryMatchStore, MatchStore, StoreError, RECENT_LIMIT};

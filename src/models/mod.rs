//! Data structures for the team divider: roster, teams, sessions, match records.

mod match_record;
mod roster;
mod session;
mod team;

pub use match_record::{MatchFields, MatchId, MatchRecord, MatchSummary};
pub use roster::{PlayerName, Roster};
pub use session::{Session, SessionError, SessionId, SessionView, DEFAULT_PLAYERS};
pub use team::{Team, TeamAssignment, TeamCount};

//! Team divider logic: partitioning, manual moves, export, session actions, match ingestion.

mod actions;
mod assignment;
mod export;
pub mod extraction;
mod ingest;
mod partition;

pub use actions::{apply, Action};
pub use assignment::move_player;
pub use export::format_teams;
pub use extraction::extract_match_fields;
pub use ingest::{ingest_match, IngestError, IngestRequest};
pub use partition::{generate_teams, reset_teams};

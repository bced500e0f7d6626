//! Session transitions: each user action applied to a session, run to completion.

use crate::logic::{generate_teams, move_player, reset_teams};
use crate::models::{Session, SessionError};
use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

/// A discrete user action on a session.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    AddPlayer { name: String },
    RemovePlayer { name: String },
    ToggleSelection { name: String },
    SelectAll,
    ClearSelection,
    /// Stored as given; clamped when teams are generated.
    SetTeamCount {
        #[serde(default)]
        team_count: Value,
    },
    Divide,
    Reset,
    MovePlayer { name: String, from: usize, to: usize },
}

/// Apply `action` to `session`. Only `Divide` draws from `rng`.
///
/// Roster actions never touch an existing assignment. `Divide` with fewer than
/// 2 selected players is refused and leaves the session as it was.
pub fn apply<R>(session: &mut Session, action: Action, rng: &mut R) -> Result<(), SessionError>
where
    R: Rng + ?Sized,
{
    match action {
        Action::AddPlayer { name } => {
            session.roster.add_player(&name);
        }
        Action::RemovePlayer { name } => {
            session.roster.remove_player(&name);
        }
        Action::ToggleSelection { name } => session.roster.toggle_selection(&name),
        Action::SelectAll => session.roster.select_all(),
        Action::ClearSelection => session.roster.clear_selection(),
        Action::SetTeamCount { team_count } => session.team_count = team_count,
        Action::Divide => {
            let selected = session.roster.selected_players();
            if selected.len() < 2 {
                return Err(SessionError::NotEnoughSelected {
                    selected: selected.len(),
                });
            }
            let team_count = session.clamped_team_count();
            session.team_count = Value::from(team_count.get());
            session.teams = generate_teams(&selected, team_count, rng);
        }
        Action::Reset => {
            session.teams = reset_teams(session.clamped_team_count());
        }
        Action::MovePlayer { name, from, to } => {
            if !move_player(&mut session.teams, &name, from, to) {
                log::debug!("Ignored move of {:?} from team {} to team {}", name, from, to);
            }
        }
    }
    Ok(())
}


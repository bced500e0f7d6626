//! Plain-text export of the team assignment (for the clipboard).

use crate::models::TeamAssignment;

/// One line per team: `Team <n>: <names joined by ", ">`. No trailing newline.
pub fn format_teams(assignment: &TeamAssignment) -> String {
    assignment
        .teams()
        .iter()
        .enumerate()
        .map(|(i, team)| format!("Team {}: {}", i + 1, team.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

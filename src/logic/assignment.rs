//! Assignment editor: move one player between teams after dividing.

use crate::models::TeamAssignment;

/// Move `name` from team `from` to the end of team `to`.
///
/// Every occurrence of `name` is removed from `from`; the order of the
/// remaining players is kept. `from == to` moves the player to the end of
/// their own team. Returns false and changes nothing when either index is out
/// of range or `name` is not in team `from`, so a player is never duplicated.
pub fn move_player(assignment: &mut TeamAssignment, name: &str, from: usize, to: usize) -> bool {
    let teams = assignment.teams_mut();
    if from >= teams.len() || to >= teams.len() {
        return false;
    }
    if !teams[from].iter().any(|p| p == name) {
        return false;
    }
    teams[from].retain(|p| p != name);
    teams[to].push(name.to_string());
    true
}

//! Partitioner: random shuffle plus round-robin distribution into teams.

use crate::models::{PlayerName, Team, TeamAssignment, TeamCount};
use rand::seq::SliceRandom;
use rand::Rng;

/// Divide `names` into `team_count` teams of near-equal size.
///
/// 1. Uniformly shuffle a copy of `names` (Fisher-Yates, driven by `rng`).
/// 2. Deal round-robin: shuffled position `i` goes to team `i % team_count`.
///
/// Team sizes differ by at most one. Fewer than 2 names still yields
/// `team_count` teams, most of them empty.
pub fn generate_teams<R>(names: &[PlayerName], team_count: TeamCount, rng: &mut R) -> TeamAssignment
where
    R: Rng + ?Sized,
{
    let mut shuffled = names.to_vec();
    shuffled.shuffle(rng);
    TeamAssignment::from_teams(deal_round_robin(shuffled, team_count.get()))
}

/// `team_count` empty teams, for placing players by hand.
pub fn reset_teams(team_count: TeamCount) -> TeamAssignment {
    TeamAssignment::empty(team_count)
}

fn deal_round_robin(items: Vec<PlayerName>, team_count: usize) -> Vec<Team> {
    let mut teams: Vec<Team> = vec![Vec::new(); team_count];
    for (idx, name) in items.into_iter().enumerate() {
        teams[idx % team_count].push(name);
    }
    teams
}

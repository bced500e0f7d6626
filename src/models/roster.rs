//! Roster of known player names plus the selection used for the next division.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A player is identified by name only (case-sensitive).
pub type PlayerName = String;

/// Ordered player names and the subset currently selected.
///
/// Invariants: names are unique, and `selected` is always a subset of `players`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<PlayerName>,
    selected: HashSet<PlayerName>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from names, all selected. Blank and duplicate names are dropped.
    pub fn with_players<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.add_player(name.as_ref());
        }
        roster
    }

    /// All players in insertion order.
    pub fn players(&self) -> &[PlayerName] {
        &self.players
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    /// Selected players in roster order.
    pub fn selected_players(&self) -> Vec<PlayerName> {
        self.players
            .iter()
            .filter(|p| self.selected.contains(p.as_str()))
            .cloned()
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Add a player (trimmed). Newly added players start selected.
    /// Returns false and leaves the roster unchanged for a blank or duplicate name.
    pub fn add_player(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.players.push(name.to_string());
        self.selected.insert(name.to_string());
        true
    }

    /// Remove a player from the roster and the selection. Returns whether it was present.
    pub fn remove_player(&mut self, name: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p != name);
        self.selected.remove(name);
        self.players.len() != before
    }

    /// Flip selection for `name`. Names not in the roster are ignored so the
    /// selection never escapes the roster.
    pub fn toggle_selection(&mut self, name: &str) {
        if self.selected.remove(name) {
            return;
        }
        if self.contains(name) {
            self.selected.insert(name.to_string());
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.players.iter().cloned().collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

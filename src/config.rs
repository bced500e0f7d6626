//! Server configuration from environment variables.
//!
//! HOST (default 0.0.0.0), PORT (default 8080), DATHOST_WEBHOOK_SECRET (default
//! empty, which rejects every webhook), MATCH_STORE_PATH (CSV file; unset keeps
//! matches in memory), DEFAULT_PLAYERS (comma-separated starting roster).

use crate::models::DEFAULT_PLAYERS;
use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub webhook_secret: String,
    pub match_store_path: Option<PathBuf>,
    pub default_players: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_players() -> Vec<String> {
    DEFAULT_PLAYERS.iter().map(|p| p.to_string()).collect()
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(default_host);
        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or_else(default_port);
        let webhook_secret = lookup("DATHOST_WEBHOOK_SECRET").unwrap_or_default();
        let match_store_path = lookup("MATCH_STORE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let default_players = lookup("DEFAULT_PLAYERS")
            .map(|list| parse_player_list(&list))
            .filter(|players| !players.is_empty())
            .unwrap_or_else(default_players);
        Self {
            host,
            port,
            webhook_secret,
            match_store_path,
            default_players,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Split a comma-separated list: trimmed, blanks and repeats dropped, order kept.
fn parse_player_list(list: &str) -> Vec<String> {
    let mut players: Vec<String> = Vec::new();
    for name in list.split(',').map(str::trim) {
        if !name.is_empty() && !players.iter().any(|p| p == name) {
            players.push(name.to_string());
        }
    }
    players
}

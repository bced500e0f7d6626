//! Integration tests for session actions: the full add / divide / move flow.

use cs2_team_divider::{apply, Action, Session, SessionError, DEFAULT_PLAYERS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

fn session_with(names: &[&str]) -> Session {
    Session::with_players(names.iter().copied())
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

#[test]
fn new_session_uses_default_roster() {
    let s = Session::new();
    assert_eq!(s.roster.players().len(), DEFAULT_PLAYERS.len());
    assert_eq!(s.roster.selected_count(), DEFAULT_PLAYERS.len());
    assert_eq!(s.teams.len(), 2);
    assert_eq!(s.teams.player_count(), 0);
}

#[test]
fn divide_uses_selected_players_only() {
    let mut s = session_with(&["A", "B", "C", "D", "E"]);
    let mut rng = rng();
    apply(&mut s, Action::ToggleSelection { name: "E".into() }, &mut rng).unwrap();
    apply(&mut s, Action::Divide, &mut rng).unwrap();

    assert_eq!(s.teams.player_count(), 4);
    assert!(s.teams.teams().iter().all(|t| t.len() == 2));
    assert!(!s.teams.teams().iter().flatten().any(|p| p == "E"));
}

#[test]
fn divide_refused_with_fewer_than_two_selected() {
    let mut s = session_with(&["A", "B"]);
    let mut rng = rng();
    apply(&mut s, Action::ClearSelection, &mut rng).unwrap();
    apply(&mut s, Action::ToggleSelection { name: "A".into() }, &mut rng).unwrap();
    let before = s.teams.clone();

    let err = apply(&mut s, Action::Divide, &mut rng).unwrap_err();
    assert_eq!(err, SessionError::NotEnoughSelected { selected: 1 });
    assert_eq!(s.teams, before);
}

#[test]
fn divide_clamps_and_stores_team_count() {
    let mut s = session_with(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"]);
    let mut rng = rng();
    apply(&mut s, Action::SetTeamCount { team_count: json!(15) }, &mut rng).unwrap();
    assert_eq!(s.team_count, json!(15));

    apply(&mut s, Action::Divide, &mut rng).unwrap();
    assert_eq!(s.teams.len(), 10);
    assert_eq!(s.team_count, json!(10));
    assert_eq!(s.teams.player_count(), 12);
}

#[test]
fn non_numeric_team_count_divides_into_two() {
    let mut s = session_with(&["A", "B", "C"]);
    let mut rng = rng();
    apply(&mut s, Action::SetTeamCount { team_count: json!("lots") }, &mut rng).unwrap();
    apply(&mut s, Action::Divide, &mut rng).unwrap();
    assert_eq!(s.teams.len(), 2);
}

#[test]
fn removing_player_keeps_existing_teams() {
    let mut s = session_with(&["A", "B", "C", "D"]);
    let mut rng = rng();
    apply(&mut s, Action::Divide, &mut rng).unwrap();
    apply(&mut s, Action::RemovePlayer { name: "A".into() }, &mut rng).unwrap();

    assert!(!s.roster.contains("A"));
    assert!(s.teams.teams().iter().flatten().any(|p| p == "A"));
    assert_eq!(s.teams.player_count(), 4);
}

#[test]
fn divide_discards_manual_moves() {
    let mut s = session_with(&["A", "B", "C", "D"]);
    let mut rng = rng();
    apply(&mut s, Action::Divide, &mut rng).unwrap();
    let name = s.teams.teams()[0][0].clone();
    apply(&mut s, Action::MovePlayer { name, from: 0, to: 1 }, &mut rng).unwrap();
    assert_eq!(s.teams.teams()[1].len(), 3);

    apply(&mut s, Action::Divide, &mut rng).unwrap();
    assert_eq!(s.teams.teams()[0].len(), 2);
    assert_eq!(s.teams.teams()[1].len(), 2);
}

#[test]
fn invalid_move_is_ignored() {
    let mut s = session_with(&["A", "B", "C", "D"]);
    let mut rng = rng();
    apply(&mut s, Action::Divide, &mut rng).unwrap();
    let before = s.teams.clone();
    apply(&mut s, Action::MovePlayer { name: "nobody".into(), from: 0, to: 1 }, &mut rng).unwrap();
    apply(&mut s, Action::MovePlayer { name: "A".into(), from: 0, to: 7 }, &mut rng).unwrap();
    assert_eq!(s.teams, before);
}

#[test]
fn reset_uses_clamped_team_count() {
    let mut s = session_with(&["A", "B"]);
    let mut rng = rng();
    apply(&mut s, Action::SetTeamCount { team_count: json!(4) }, &mut rng).unwrap();
    apply(&mut s, Action::Reset, &mut rng).unwrap();
    assert_eq!(s.teams.len(), 4);
    assert_eq!(s.teams.player_count(), 0);

    apply(&mut s, Action::SetTeamCount { team_count: json!(40) }, &mut rng).unwrap();
    apply(&mut s, Action::Reset, &mut rng).unwrap();
    assert_eq!(s.teams.len(), 10);
}

#[test]
fn actions_deserialize_from_tagged_json() {
    let action: Action = serde_json::from_value(json!({ "type": "move_player", "name": "X", "from": 0, "to": 1 })).unwrap();
    assert_eq!(action, Action::MovePlayer { name: "X".into(), from: 0, to: 1 });
    let action: Action = serde_json::from_value(json!({ "type": "set_team_count" })).unwrap();
    assert_eq!(action, Action::SetTeamCount { team_count: json!(null) });
}

#[test]
fn view_lists_selected_in_roster_order() {
    let mut s = session_with(&["A", "B", "C"]);
    apply(&mut s, Action::ToggleSelection { name: "B".into() }, &mut rng()).unwrap();
    let view = s.view();
    assert_eq!(view.players, ["A", "B", "C"]);
    assert_eq!(view.selected, ["A", "C"]);
    assert_eq!(view.selected_count, 2);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["teams"], json!([[], []]));
}

#[test]
fn view_reports_session_team_count() {
    let mut s = session_with(&["A", "B", "C"]);
    apply(&mut s, Action::SetTeamCount { team_count: json!("7") }, &mut rng()).unwrap();
    assert_eq!(s.clamped_team_count().get(), 7);
    let json = serde_json::to_value(s.view()).unwrap();
    assert_eq!(json["team_count"], s.team_count);
}

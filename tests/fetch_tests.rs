use chrono::{TimeZone, Utc};
use serde_json::json;

use matchday::fetch::{self, FetchError};
use matchday::model::matches::Match;
use matchday::model::standing::GroupStanding;
use matchday::present;

fn load_sample() -> String {
    std::fs::read_to_string("tests/sample_matches.json")
        .expect("failed to read sample_matches.json")
}

#[test]
fn validator_keeps_match_shaped_records() {
    assert!(fetch::is_valid(&json!({
        "home_team": {"country": "Brazil"},
        "away_team": {"country": "Croatia"}
    })));
    // Mixed-precedence quirk: an away_team object alone is enough.
    assert!(fetch::is_valid(&json!({
        "away_team": {"country": "Ghostland"}
    })));
    assert!(fetch::is_valid(&json!({"group_id": 3, "country": "Brazil"})));
}

#[test]
fn validator_drops_everything_else() {
    assert!(!fetch::is_valid(&json!({"detail": "scheduled maintenance"})));
    assert!(!fetch::is_valid(&json!(42)));
    assert!(!fetch::is_valid(&json!("home_team")));
    assert!(!fetch::is_valid(&json!({"home_team": "Brazil"})));
    assert!(!fetch::is_valid(&json!({"group_id": "A"})));
}

#[test]
fn decode_keeps_only_typed_matches() {
    // Arrange: fixture holds three real matches, two junk entries, and one
    // away-team-only record that passes validation but not the typed shape.
    let body = load_sample();

    // Act
    let matches: Vec<Match> = fetch::decode(&body).expect("decode failed");

    // Assert: order preserved, junk and the away-only record dropped
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].home_team.country, "Nigeria");
    assert_eq!(matches[1].home_team.country, "Italy");
    assert_eq!(matches[2].home_team.country, "Netherlands");
}

#[test]
fn decode_rejects_non_json_body() {
    let err = fetch::decode::<Match>("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got: {err}");
}

#[test]
fn decode_rejects_non_array_body() {
    let err = fetch::decode::<Match>("{\"matches\": []}").unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got: {err}");
}

#[test]
fn decode_group_standings_and_filter_by_group() {
    let body = json!([
        {"country": "Netherlands", "group_id": 2, "wins": 3, "losses": 0,
         "goals_for": 10, "goals_against": 3, "knocked_out": false},
        {"country": "Australia", "group_id": 2, "wins": 0, "losses": 3,
         "goals_for": 3, "goals_against": 9, "knocked_out": true},
        {"country": "Colombia", "group_id": 3, "wins": 3, "losses": 0,
         "goals_for": 9, "goals_against": 2, "knocked_out": false}
    ])
    .to_string();

    let standings: Vec<GroupStanding> = fetch::decode(&body).expect("decode failed");
    assert_eq!(standings.len(), 3);

    let group_b: Vec<_> = standings
        .iter()
        .filter(|s| s.group_id == Some(2))
        .collect();
    assert_eq!(group_b.len(), 2);
    assert_eq!(group_b[0].country, "Netherlands");
    assert!(group_b[1].knocked_out);
}

#[test]
fn fixture_renders_in_order_with_expected_statuses() {
    colored::control::set_override(false);

    // Arrange: fixed clock so the fixture's three matches land two days in
    // the past, at the 45-minute mark, and three days out.
    let now = Utc.with_ymd_and_hms(2014, 6, 20, 12, 0, 0).unwrap();
    let matches: Vec<Match> = fetch::decode(&load_sample()).expect("decode failed");

    // Act
    let output: String = matches
        .iter()
        .filter_map(|m| present::prettify(m, now))
        .collect();

    // Assert: one past draw, one in-progress line, one future line, in order
    let draw_at = output.find("Draw").expect("missing past draw line");
    let now_at = output
        .find("Being played now: 45 minutes gone")
        .expect("missing in-progress line");
    let future_at = output
        .find("Will be played in 3 days")
        .expect("missing future line");
    assert!(draw_at < now_at && now_at < future_at, "output was: {output}");

    // The in-progress bar sits at the halfway separator.
    let half_bar = format!("{}o{}", "-".repeat(33), "-".repeat(34));
    assert!(output.contains(&half_bar), "output was: {output}");
}

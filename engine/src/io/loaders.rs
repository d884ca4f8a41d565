//! League snapshot loading.
//!
//! A snapshot is a JSON document holding one customer's jobs, games, teams,
//! clubs, fields and field assignments. Snapshots seed the in-memory
//! repository for tests and the CLI runner.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(feature = "local-repo")]
use crate::db::repositories::LocalRepository;
use crate::models::{Club, Field, FieldAssignment, Game, Job, Team};

/// Deserialized league snapshot. Every section is optional in the file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub clubs: Vec<Club>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub field_assignments: Vec<FieldAssignment>,
}

/// Parse a snapshot from a JSON string.
///
/// Uses a path-tracking deserializer so a malformed document reports the
/// exact JSON location that failed, not just "invalid type".
pub fn parse_snapshot_str(json: &str) -> Result<LeagueSnapshot> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let snapshot: LeagueSnapshot = serde_path_to_error::deserialize(&mut deserializer)
        .context("Failed to deserialize league snapshot JSON")?;
    Ok(snapshot)
}

/// Load a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<LeagueSnapshot> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file {}", path.display()))?;
    parse_snapshot_str(&contents)
        .with_context(|| format!("Failed to parse snapshot file {}", path.display()))
}

/// Populate an in-memory repository from a snapshot.
#[cfg(feature = "local-repo")]
pub fn populate_repository(repo: &LocalRepository, snapshot: LeagueSnapshot) {
    for job in snapshot.jobs {
        repo.insert_job(job);
    }
    for team in snapshot.teams {
        repo.insert_team(team);
    }
    for club in snapshot.clubs {
        repo.insert_club(club);
    }
    for field in snapshot.fields {
        repo.insert_field(field);
    }
    for assignment in snapshot.field_assignments {
        repo.assign_field(assignment.league_id, assignment.season, assignment.field_id);
    }
    for game in snapshot.games {
        repo.insert_game_impl(game);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_snapshot() {
        let json = r#"{
            "jobs": [{
                "id": 1, "customer_id": 10, "name": "Spring 2026",
                "path": "spring-2026", "year": 2026, "season": "Spring"
            }],
            "games": [{
                "id": 100, "job_id": 1,
                "agegroup_id": null, "agegroup_name": "U10",
                "division_id": null, "division_name": "Red",
                "round": 1, "game_number": 1,
                "field_id": null, "field_name": null,
                "starts_at": "2026-04-04T09:00:00",
                "team1": {"team_id": 1, "team_name": "Ravens", "team_type": "T", "rank": 1},
                "team2": {"team_id": 2, "team_name": "Owls", "team_type": "T", "rank": 2}
            }]
        }"#;

        let snapshot = parse_snapshot_str(json).unwrap();
        assert_eq!(snapshot.jobs.len(), 1);
        assert_eq!(snapshot.games.len(), 1);
        assert!(snapshot.teams.is_empty());

        let repo = LocalRepository::new();
        populate_repository(&repo, snapshot);
        assert_eq!(repo.game_count(), 1);
    }

    #[test]
    fn parse_error_names_the_failing_path() {
        let json = r#"{"games": [{"id": "not-a-number"}]}"#;
        let err = parse_snapshot_str(json).unwrap_err();
        assert!(format!("{err:#}").contains("games"));
    }
}

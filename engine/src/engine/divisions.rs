//! Per-division summaries for source and target jobs.
//!
//! Both summaries share one shape (agegroup, division, team count, game
//! count); they differ in how the team count is obtained. The source job's
//! pool sizes are *derived* from the schedule itself: round-robin rank
//! numbers are dense 1..N, so the maximum rank observed across a division's
//! real-team games is a reliable proxy for pool size without a roster join.
//! The target job has a live roster, so its count is a direct count of
//! active, division-assigned teams.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::db::repository::{RepositoryResult, ScheduleRepository, TeamRepository};
use crate::models::{AgegroupId, DivisionId, JobId};

/// Division summary of a pattern-source job, derived from its games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDivisionSummary {
    pub agegroup_name: String,
    pub division_name: String,
    /// Maximum rank number observed across the division's real-team games.
    pub team_count: i32,
    pub game_count: usize,
}

/// Division summary of the current (target) job, from its roster and games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentDivisionSummary {
    pub agegroup_id: AgegroupId,
    pub agegroup_name: String,
    pub division_id: DivisionId,
    pub division_name: String,
    /// Count of active, division-assigned teams.
    pub team_count: usize,
    /// Existing games in the division; a non-zero count marks the division
    /// as already populated for replay purposes.
    pub game_count: usize,
}

/// Summarize a source job's divisions from its real-team games.
pub async fn summarize_source_divisions<R: ScheduleRepository>(
    repo: &R,
    source_job_id: JobId,
) -> RepositoryResult<Vec<SourceDivisionSummary>> {
    let games = repo.fetch_games(source_job_id).await?;

    let mut groups: BTreeMap<(String, String), (i32, usize)> = BTreeMap::new();
    for game in games.iter().filter(|g| g.is_real_matchup()) {
        let key = (game.agegroup().to_string(), game.division().to_string());
        let entry = groups.entry(key).or_insert((0, 0));
        let rank = game
            .team1
            .rank
            .unwrap_or(0)
            .max(game.team2.rank.unwrap_or(0));
        entry.0 = entry.0.max(rank);
        entry.1 += 1;
    }

    Ok(groups
        .into_iter()
        .map(
            |((agegroup_name, division_name), (team_count, game_count))| SourceDivisionSummary {
                agegroup_name,
                division_name,
                team_count,
                game_count,
            },
        )
        .collect())
}

/// Summarize the current job's divisions from its active roster, ordered by
/// agegroup name then division name.
pub async fn summarize_current_divisions<R>(
    repo: &R,
    job_id: JobId,
) -> RepositoryResult<Vec<CurrentDivisionSummary>>
where
    R: TeamRepository + ScheduleRepository,
{
    let teams = repo.fetch_teams(job_id).await?;
    let games = repo.fetch_games(job_id).await?;

    let mut games_per_division: HashMap<DivisionId, usize> = HashMap::new();
    for game in &games {
        if let Some(division_id) = game.division_id {
            *games_per_division.entry(division_id).or_insert(0) += 1;
        }
    }

    let mut groups: BTreeMap<(String, String, AgegroupId, DivisionId), usize> = BTreeMap::new();
    for team in teams.iter().filter(|t| t.active && t.has_division_assignment()) {
        // has_division_assignment guarantees both ids are present.
        let (Some(agegroup_id), Some(division_id)) = (team.agegroup_id, team.division_id) else {
            continue;
        };
        let key = (
            team.agegroup().to_string(),
            team.division().to_string(),
            agegroup_id,
            division_id,
        );
        *groups.entry(key).or_insert(0) += 1;
    }

    Ok(groups
        .into_iter()
        .map(|((agegroup_name, division_name, agegroup_id, division_id), team_count)| {
            CurrentDivisionSummary {
                agegroup_id,
                agegroup_name,
                division_id,
                division_name,
                team_count,
                game_count: games_per_division.get(&division_id).copied().unwrap_or(0),
            }
        })
        .collect())
}

//! Schedule replay: delete-then-rebuild a target job from a source pattern.
//!
//! The engine never decides which source division feeds which target
//! division: that mapping (and the new calendar dates) arrives in a
//! [`ReplayPlan`] from the caller. What the engine owns is gathering the
//! inputs the caller needs to build that plan, the strict-order cascade
//! delete, and the mechanical materialization of pattern rows into dated
//! games bound to the target roster.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::divisions::{
    summarize_current_divisions, summarize_source_divisions, CurrentDivisionSummary,
    SourceDivisionSummary,
};
use super::fields::{resolve_field_names, FieldNameMapping};
use super::pattern::{distinct_field_names, extract_pattern, GamePlacementPattern};
use crate::db::repository::{FullRepository, RepositoryResult, ScheduleRepository};
use crate::models::{AgegroupId, DivisionId, Game, GameSlot, JobId, LeagueId, TeamId, REAL_TEAM_TYPE};

/// Everything a caller needs to decide a replay mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayInputs {
    pub pattern: Vec<GamePlacementPattern>,
    pub source_divisions: Vec<SourceDivisionSummary>,
    /// Target divisions; a non-zero `game_count` marks a division that is
    /// already populated and should not be double-built.
    pub target_divisions: Vec<CurrentDivisionSummary>,
    pub source_field_names: Vec<String>,
    pub target_fields: Vec<FieldNameMapping>,
}

/// Gather replay inputs for a source/target job pair.
pub async fn gather_replay_inputs<R: FullRepository>(
    repo: &R,
    source_job_id: JobId,
    target_job_id: JobId,
    league_id: LeagueId,
    season: &str,
) -> RepositoryResult<ReplayInputs> {
    let pattern = extract_pattern(repo, source_job_id).await?;
    let source_field_names = distinct_field_names(&pattern);
    Ok(ReplayInputs {
        pattern,
        source_divisions: summarize_source_divisions(repo, source_job_id).await?,
        target_divisions: summarize_current_divisions(repo, target_job_id).await?,
        source_field_names,
        target_fields: resolve_field_names(repo, league_id, season).await?,
    })
}

/// Caller-decided mapping of one source division onto a target division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionMapping {
    pub source_agegroup: String,
    pub source_division: String,
    pub target_agegroup_id: AgegroupId,
    pub target_agegroup_name: String,
    pub target_division_id: DivisionId,
    pub target_division_name: String,
}

/// Caller-decided replay plan: where the pattern lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayPlan {
    pub target_job_id: JobId,
    /// New calendar date for each source day ordinal; index = ordinal.
    pub dates_by_ordinal: Vec<NaiveDate>,
    pub division_mappings: Vec<DivisionMapping>,
    pub field_mappings: Vec<FieldNameMapping>,
}

/// Outcome of a replay run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayOutcome {
    /// Schedule rows removed by the pre-rebuild cascade.
    pub deleted_games: usize,
    pub inserted_games: usize,
    /// Pattern rows skipped (unmapped division or out-of-range ordinal).
    pub skipped_rows: usize,
}

/// Delete a job's schedule ahead of a rebuild.
///
/// Runs the job-scoped cascade in [`crate::db::SCHEDULE_DELETE_ORDER`] as one
/// transactional unit and returns the number of schedule rows removed; a job
/// with no games is a no-op returning 0.
pub async fn clear_job_schedule<R: ScheduleRepository>(
    repo: &R,
    job_id: JobId,
) -> RepositoryResult<usize> {
    let removed = repo.delete_job_schedule(job_id).await?;
    info!("Cleared {} schedule rows for job {}", removed, job_id);
    Ok(removed)
}

/// Replay a pattern onto the target job described by `plan`.
///
/// Deletes the target's prior schedule, then emits one dated game per
/// pattern row whose division is mapped and whose day ordinal has a date in
/// the plan. Real-team slots are re-bound through the target roster's
/// (division, rank) index; placeholder slots carry their tags through
/// unbound. A `"T"` slot whose rank has no target team is emitted without a
/// team id so the QA battery can surface the gap.
pub async fn replay_schedule<R: FullRepository>(
    repo: &R,
    pattern: &[GamePlacementPattern],
    plan: &ReplayPlan,
) -> RepositoryResult<ReplayOutcome> {
    let teams = repo.fetch_teams(plan.target_job_id).await?;
    let mut rank_index: HashMap<(DivisionId, i32), (TeamId, String)> = HashMap::new();
    for team in teams.iter().filter(|t| t.active && t.has_division_assignment()) {
        if let (Some(division_id), Some(rank)) = (team.division_id, team.div_rank) {
            rank_index
                .entry((division_id, rank))
                .or_insert((team.id, team.name.clone()));
        }
    }

    let division_index: HashMap<(&str, &str), &DivisionMapping> = plan
        .division_mappings
        .iter()
        .map(|m| ((m.source_agegroup.as_str(), m.source_division.as_str()), m))
        .collect();
    let field_index: HashMap<&str, crate::models::FieldId> = plan
        .field_mappings
        .iter()
        .map(|f| (f.field_name.as_str(), f.field_id))
        .collect();

    let deleted_games = clear_job_schedule(repo, plan.target_job_id).await?;

    let mut games = Vec::with_capacity(pattern.len());
    let mut skipped_rows = 0;
    for row in pattern {
        let Some(mapping) =
            division_index.get(&(row.agegroup_name.as_str(), row.division_name.as_str()))
        else {
            skipped_rows += 1;
            continue;
        };
        let Some(date) = plan.dates_by_ordinal.get(row.day_ordinal) else {
            warn!(
                "No replay date for day ordinal {} ({} {})",
                row.day_ordinal, row.agegroup_name, row.division_name
            );
            skipped_rows += 1;
            continue;
        };

        let field_id = field_index.get(row.field_name.as_str()).copied();
        games.push(Game {
            id: None,
            job_id: plan.target_job_id,
            agegroup_id: Some(mapping.target_agegroup_id),
            agegroup_name: Some(mapping.target_agegroup_name.clone()),
            division_id: Some(mapping.target_division_id),
            division_name: Some(mapping.target_division_name.clone()),
            round: Some(row.round),
            game_number: Some(row.game_number),
            field_id,
            field_name: (!row.field_name.is_empty()).then(|| row.field_name.clone()),
            starts_at: Some(date.and_time(row.time_of_day)),
            team1: bind_slot(
                &row.team1_type,
                row.team1_rank,
                mapping.target_division_id,
                &rank_index,
            ),
            team2: bind_slot(
                &row.team2_type,
                row.team2_rank,
                mapping.target_division_id,
                &rank_index,
            ),
        });
    }

    let inserted_games = repo.insert_games(&games).await?;
    info!(
        "Replayed job {}: {} deleted, {} inserted, {} skipped",
        plan.target_job_id, deleted_games, inserted_games, skipped_rows
    );
    Ok(ReplayOutcome {
        deleted_games,
        inserted_games,
        skipped_rows,
    })
}

fn bind_slot(
    slot_type: &str,
    rank: i32,
    division_id: DivisionId,
    rank_index: &HashMap<(DivisionId, i32), (TeamId, String)>,
) -> GameSlot {
    if slot_type != REAL_TEAM_TYPE {
        return GameSlot::placeholder(slot_type);
    }
    match rank_index.get(&(division_id, rank)) {
        Some((team_id, name)) => GameSlot::team(*team_id, name.clone(), rank),
        None => GameSlot {
            team_id: None,
            team_name: None,
            team_type: Some(REAL_TEAM_TYPE.to_string()),
            rank: Some(rank),
        },
    }
}

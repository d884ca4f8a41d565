//! Post-build QA validation.
//!
//! [`run_qa`] fetches one read-only snapshot of the target job (games,
//! roster, clubs, fetched concurrently since the reads are independent) and
//! runs
//! 14 independent checks over it. Every check is a pure function with no
//! ordering dependency on any other; the aggregate simply assembles all of
//! them. Missing optional fields are substituted with safe defaults inside
//! the checks, so the battery always completes and the result is fully
//! populated even for a job with zero games.

pub mod conflicts;
pub mod coverage;
pub mod distribution;
pub mod occurrences;
pub mod report;

pub use conflicts::BACK_TO_BACK_GAP_MINUTES;
pub use occurrences::{fan_out, TeamOccurrence};
pub use report::AutoBuildQaResult;

use log::info;

use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::JobId;

/// Run the 14-check QA battery against a job's final schedule.
pub async fn run_qa<R: FullRepository>(
    repo: &R,
    job_id: JobId,
) -> RepositoryResult<AutoBuildQaResult> {
    let (games, teams, clubs) = tokio::try_join!(
        repo.fetch_games(job_id),
        repo.fetch_teams(job_id),
        repo.fetch_clubs(),
    )?;

    let occurrences = occurrences::fan_out(&games);

    let result = AutoBuildQaResult {
        unscheduled_teams: coverage::unscheduled_teams(&games, &teams),
        field_double_bookings: conflicts::field_double_bookings(&games),
        team_double_bookings: conflicts::team_double_bookings(&occurrences),
        rank_mismatches: coverage::rank_mismatches(&games, &teams),
        back_to_back_games: conflicts::back_to_back_games(&occurrences),
        repeated_matchups: conflicts::repeated_matchups(&games),
        inactive_team_games: coverage::inactive_team_games(&games, &teams),
        games_per_date: distribution::games_per_date(&games),
        games_per_team: distribution::games_per_team(&occurrences),
        games_per_team_per_day: distribution::games_per_team_per_day(
            &occurrences,
            &teams,
            &clubs,
        ),
        games_per_field_per_day: distribution::games_per_field_per_day(&games),
        game_spreads: distribution::game_spreads(&occurrences),
        round_robin_totals: coverage::round_robin_totals(&games, &teams),
        bracket_games: coverage::bracket_games(&games),
        total_games: games.len(),
    };

    info!(
        "QA for job {}: {} games, {} field conflicts, {} team conflicts, {} rank mismatches",
        job_id,
        result.total_games,
        result.field_double_bookings.len(),
        result.team_double_bookings.len(),
        result.rank_mismatches.len()
    );
    Ok(result)
}

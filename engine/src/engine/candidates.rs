//! Pattern-source candidate discovery.
//!
//! A target job borrows its placement pattern from a sibling job of the same
//! customer. The best donor is the most recent season with the richest
//! schedule, so candidates are ordered year descending, then scheduled-game
//! count descending.

use serde::{Deserialize, Serialize};

use crate::db::repository::{JobRepository, RepositoryResult, ScheduleRepository};
use crate::models::JobId;

/// A sibling job usable as a pattern source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceJobCandidate {
    pub job_id: JobId,
    pub name: String,
    pub path: String,
    pub year: i32,
    pub season: String,
    pub scheduled_game_count: usize,
}

/// List pattern-source candidates for a target job.
///
/// An unresolvable target job yields an empty list (not an error). The
/// target itself and sibling jobs without any scheduled game are excluded.
pub async fn find_source_candidates<R>(
    repo: &R,
    target_job_id: JobId,
) -> RepositoryResult<Vec<SourceJobCandidate>>
where
    R: JobRepository + ScheduleRepository,
{
    let Some(target) = repo.get_job(target_job_id).await? else {
        return Ok(Vec::new());
    };

    let mut candidates = Vec::new();
    for job in repo.jobs_for_customer(target.customer_id).await? {
        if job.id == target_job_id {
            continue;
        }
        let scheduled_game_count = repo.scheduled_game_count(job.id).await?;
        if scheduled_game_count == 0 {
            continue;
        }
        candidates.push(SourceJobCandidate {
            job_id: job.id,
            name: job.name,
            path: job.path,
            year: job.year,
            season: job.season,
            scheduled_game_count,
        });
    }

    candidates.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then_with(|| b.scheduled_game_count.cmp(&a.scheduled_game_count))
    });
    Ok(candidates)
}

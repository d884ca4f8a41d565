//! Team and club repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Club, JobId, Team};

/// Repository trait for team roster reads.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Fetch every team registered under a job, active or not.
    ///
    /// Callers filter on the active flag and division assignment; the QA
    /// inactive-team check is the reason inactive rows are included here.
    ///
    /// # Returns
    /// * `Ok(Vec<Team>)` - All teams, possibly empty
    /// * `Err(RepositoryError)` - If the operation fails
    async fn fetch_teams(&self, job_id: JobId) -> RepositoryResult<Vec<Team>>;

    /// Fetch all clubs (one bulk read; team→club resolution happens in
    /// memory).
    async fn fetch_clubs(&self) -> RepositoryResult<Vec<Club>>;
}

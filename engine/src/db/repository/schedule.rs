//! Core schedule repository trait: game reads, the bulk-write boundary, and
//! the ordered cascade delete.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Game, JobId};

/// One step of the job-scoped schedule cascade delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStep {
    GameNotificationLinks,
    BracketSeedLinks,
    RefereeAssignments,
    ScheduleRows,
}

impl CascadeStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CascadeStep::GameNotificationLinks => "game_notification_links",
            CascadeStep::BracketSeedLinks => "bracket_seed_links",
            CascadeStep::RefereeAssignments => "referee_assignments",
            CascadeStep::ScheduleRows => "schedule_rows",
        }
    }
}

/// Deletion order for [`ScheduleRepository::delete_job_schedule`].
///
/// Dependent link rows reference schedule rows, so the schedule rows must go
/// last. Implementations iterate this list inside one transactional unit; a
/// partial cascade must roll back entirely.
pub const SCHEDULE_DELETE_ORDER: [CascadeStep; 4] = [
    CascadeStep::GameNotificationLinks,
    CascadeStep::BracketSeedLinks,
    CascadeStep::RefereeAssignments,
    CascadeStep::ScheduleRows,
];

/// Repository trait for schedule rows.
///
/// Reads are job-scoped bulk fetches; the engine flattens and groups in
/// memory rather than issuing per-row queries. Writes are limited to the
/// bulk insert used by replay and the pre-rebuild cascade delete.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Check if the backing store is reachable and healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Fetch every schedule row of a job, dated or not.
    ///
    /// # Returns
    /// * `Ok(Vec<Game>)` - All rows, possibly empty
    /// * `Err(RepositoryError)` - If the operation fails
    async fn fetch_games(&self, job_id: JobId) -> RepositoryResult<Vec<Game>>;

    /// Fetch a job's scheduled games (rows with a date), ordered by date.
    ///
    /// # Returns
    /// * `Ok(Vec<Game>)` - Dated rows in chronological order, possibly empty
    /// * `Err(RepositoryError)` - If the operation fails
    async fn fetch_scheduled_games(&self, job_id: JobId) -> RepositoryResult<Vec<Game>>;

    /// Count a job's scheduled games without materializing them.
    async fn scheduled_game_count(&self, job_id: JobId) -> RepositoryResult<usize>;

    /// Bulk-insert games (the replay output boundary).
    ///
    /// Rows carrying an id replace any existing row with that id; rows
    /// without one are assigned a fresh id by the store.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of rows written
    /// * `Err(RepositoryError)` - If the operation fails
    async fn insert_games(&self, games: &[Game]) -> RepositoryResult<usize>;

    /// Delete a job's schedule and its dependent rows, in
    /// [`SCHEDULE_DELETE_ORDER`], as one transactional unit.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of schedule rows removed (0 for an empty job)
    /// * `Err(RepositoryError)` - If the operation fails; nothing is deleted
    async fn delete_job_schedule(&self, job_id: JobId) -> RepositoryResult<usize>;
}

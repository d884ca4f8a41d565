//! Job repository trait.
//!
//! Jobs are read-only from the engine's perspective: the auto-build needs to
//! resolve a target job's owning customer and enumerate that customer's
//! sibling jobs as pattern-source candidates.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{CustomerId, Job, JobId};

/// Repository trait for job lookups.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Look up a job by id.
    ///
    /// # Returns
    /// * `Ok(Some(Job))` - The job
    /// * `Ok(None)` - If no such job exists (not an error)
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_job(&self, job_id: JobId) -> RepositoryResult<Option<Job>>;

    /// List every job owned by a customer.
    ///
    /// # Returns
    /// * `Ok(Vec<Job>)` - All of the customer's jobs, possibly empty
    /// * `Err(RepositoryError)` - If the operation fails
    async fn jobs_for_customer(&self, customer_id: CustomerId) -> RepositoryResult<Vec<Job>>;
}

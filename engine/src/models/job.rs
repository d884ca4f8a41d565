//! Scheduling jobs.
//!
//! A job is one customer's scheduling run for a season: the unit a schedule
//! is built under, deleted under, and QA'd under. Sibling jobs of the same
//! customer are the candidate pattern donors for an auto-build.

use serde::{Deserialize, Serialize};

use super::ids::{CustomerId, JobId};

/// One scheduling job (a customer's season build).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub customer_id: CustomerId,
    pub name: String,
    /// Customer-facing path segment, e.g. `"fall-2025/boys"`.
    pub path: String,
    pub year: i32,
    pub season: String,
}

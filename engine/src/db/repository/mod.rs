//! Repository trait definitions for database operations.
//!
//! This module provides a collection of focused repository traits that
//! abstract the relational store. By splitting responsibilities across
//! multiple traits, implementations can be more focused and testable.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`jobs`]: Job lookups (target resolution, sibling enumeration)
//! - [`schedule`]: Game reads, bulk insert, ordered cascade delete
//! - [`teams`]: Team roster and club reads
//! - [`fields`]: League-season field assignment reads
//!
//! # Trait Composition
//!
//! A complete repository implementation typically implements all traits:
//!
//! ```ignore
//! impl JobRepository for MyRepo { ... }
//! impl ScheduleRepository for MyRepo { ... }
//! impl TeamRepository for MyRepo { ... }
//! impl FieldRepository for MyRepo { ... }
//! ```
//!
//! For functions that need all repository capabilities, use the
//! [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository>(repo: &R) -> RepositoryResult<()> {
//!     let games = repo.fetch_games(job_id).await?;
//!     let teams = repo.fetch_teams(job_id).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fields;
pub mod jobs;
pub mod schedule;
pub mod teams;

// Re-export error types
pub use error::{RepositoryError, RepositoryResult};

// Re-export all traits
pub use fields::FieldRepository;
pub use jobs::JobRepository;
pub use schedule::{CascadeStep, ScheduleRepository, SCHEDULE_DELETE_ORDER};
pub use teams::TeamRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements all four
/// repository traits.
pub trait FullRepository:
    JobRepository + ScheduleRepository + TeamRepository + FieldRepository
{
}

// Blanket implementation: any type implementing all four traits automatically implements FullRepository
impl<T> FullRepository for T where
    T: JobRepository + ScheduleRepository + TeamRepository + FieldRepository
{
}

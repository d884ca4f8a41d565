//! Database module for league schedule data access.
//!
//! This module provides abstractions for database operations via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Engine / QA layer (repository-generic services)        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! │  - JobRepository        (jobs, customers)               │
//! │  - ScheduleRepository   (games, bulk write, cascade)    │
//! │  - TeamRepository       (rosters, clubs)                │
//! │  - FieldRepository      (league-season assignments)     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!         ┌───────────▼────────────┐
//!         │  Local Repository      │
//!         │  (in-memory)           │
//!         └────────────────────────┘
//! ```
//!
//! The module includes:
//! - `repository`: trait definitions for database operations
//! - `repositories::local`: in-memory implementation for unit testing,
//!   local development and the CLI runner
//! - `config`: TOML/env repository configuration
//! - `factory`: factory for creating repository instances

pub mod config;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use config::{RepositoryConfig, RepositoryType};
pub use factory::RepositoryFactory;
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
pub use repository::{
    CascadeStep, FieldRepository, FullRepository, JobRepository, RepositoryError,
    RepositoryResult, ScheduleRepository, TeamRepository, SCHEDULE_DELETE_ORDER,
};

//! Domain models for the auto-build schedule engine.
//!
//! This module is organized into several submodules:
//!
//! - [`ids`]: strongly-typed `i64` identifiers (generated by `define_id_type!`)
//! - [`job`]: scheduling jobs (the per-season build unit)
//! - [`game`]: schedule rows, game sides, and cascade-dependent link rows
//! - [`team`]: teams and clubs
//! - [`field`]: fields and league-season field assignments

pub mod field;
pub mod game;
pub mod ids;
pub mod job;
pub mod macros;
pub mod team;

pub use field::{Field, FieldAssignment, SYSTEM_FIELD_PREFIX};
pub use game::{
    BracketSeedLink, Game, GameNotificationLink, GameSlot, RefereeAssignment, REAL_TEAM_TYPE,
};
pub use ids::{
    AgegroupId, ClubId, CustomerId, DivisionId, FieldId, GameId, JobId, LeagueId, TeamId,
};
pub use job::Job;
pub use team::{Club, Team};

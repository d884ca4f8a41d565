//! # Auto-Build Schedule Engine
//!
//! Core engine of a youth-sports league scheduling platform: extracts the
//! abstract game-placement *pattern* from a prior season's schedule, re-maps
//! it onto a new season's divisions, teams and fields, and runs a 14-check
//! post-build QA validator over the resulting schedule.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: domain records (jobs, games, teams, fields) and
//!   strongly-typed ids
//! - [`db`]: repository traits over the relational store, the in-memory
//!   backend, configuration and the factory
//! - [`engine`]: pattern extraction, source-candidate discovery, division
//!   summaries, field resolution, and the delete-then-rebuild replay
//! - [`qa`]: the post-build QA battery and its report types
//! - [`io`]: JSON league-snapshot loading
//!
//! All engine and QA entry points are repository-generic: they take any
//! implementation of the [`db::FullRepository`] traits, so the same code
//! serves tests (in-memory) and production backends.
//!
//! ## Error philosophy
//!
//! Absence of data is a valid, silent outcome: every lookup that can
//! legitimately return nothing yields an empty result rather than failing.
//! Only infrastructure-level failures surface as [`db::RepositoryError`].

pub mod db;
pub mod engine;
pub mod io;
pub mod models;
pub mod qa;

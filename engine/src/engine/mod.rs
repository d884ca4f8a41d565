//! Auto-build schedule engine services.
//!
//! Repository-generic service functions in dependency order:
//!
//! - [`pattern`]: extract a source job's abstract placement pattern
//! - [`candidates`]: rank sibling jobs as pattern donors
//! - [`divisions`]: source/current per-division summaries
//! - [`fields`]: league-season field-name resolution
//! - [`replay`]: input gathering, cascade delete, plan-driven rebuild

pub mod candidates;
pub mod divisions;
pub mod fields;
pub mod pattern;
pub mod replay;

pub use candidates::{find_source_candidates, SourceJobCandidate};
pub use divisions::{
    summarize_current_divisions, summarize_source_divisions, CurrentDivisionSummary,
    SourceDivisionSummary,
};
pub use fields::{resolve_field_names, FieldNameMapping};
pub use pattern::{distinct_field_names, extract_pattern, GamePlacementPattern};
pub use replay::{
    clear_job_schedule, gather_replay_inputs, replay_schedule, DivisionMapping, ReplayInputs,
    ReplayOutcome, ReplayPlan,
};

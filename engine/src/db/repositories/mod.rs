//! Repository implementations.
//!
//! - [`local`]: in-memory backend for tests, local development and the CLI
//!   runner (feature `local-repo`, on by default)
//!
//! SQL backends plug in behind the same traits; none ship today.

#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;

//! IO utilities: league snapshot loading.

pub mod loaders;

pub use loaders::{load_snapshot, parse_snapshot_str, LeagueSnapshot};
#[cfg(feature = "local-repo")]
pub use loaders::populate_repository;

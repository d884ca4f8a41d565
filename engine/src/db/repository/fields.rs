//! Field repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Field, LeagueId};

/// Repository trait for league-season field lookups.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait FieldRepository: Send + Sync {
    /// Fetch the fields assigned to a league-season (joined through the
    /// field-assignment table). May contain system fields and duplicate
    /// assignments; filtering and deduplication happen in the resolver.
    ///
    /// # Returns
    /// * `Ok(Vec<Field>)` - Assigned fields, possibly empty
    /// * `Err(RepositoryError)` - If the operation fails
    async fn fetch_league_season_fields(
        &self,
        league_id: LeagueId,
        season: &str,
    ) -> RepositoryResult<Vec<Field>>;
}

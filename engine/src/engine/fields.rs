//! Field-name resolution for a league-season.
//!
//! The pattern references fields by name; replay matches those names against
//! the fields actually assigned to the target league-season. System fields
//! (names with the `*` prefix) never participate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::db::repository::{FieldRepository, RepositoryResult};
use crate::models::{FieldId, LeagueId};

/// One resolvable field of the target league-season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNameMapping {
    pub field_id: FieldId,
    pub field_name: String,
}

/// Resolve the id→name pairs of the fields assigned to a league-season,
/// excluding system fields, deduplicated by id, sorted by name.
pub async fn resolve_field_names<R: FieldRepository>(
    repo: &R,
    league_id: LeagueId,
    season: &str,
) -> RepositoryResult<Vec<FieldNameMapping>> {
    let fields = repo.fetch_league_season_fields(league_id, season).await?;

    let mut by_id: BTreeMap<FieldId, String> = BTreeMap::new();
    for field in fields.into_iter().filter(|f| !f.is_system()) {
        by_id.entry(field.id).or_insert(field.name);
    }

    let mut mappings: Vec<FieldNameMapping> = by_id
        .into_iter()
        .map(|(field_id, field_name)| FieldNameMapping { field_id, field_name })
        .collect();
    mappings.sort_by(|a, b| {
        a.field_name
            .cmp(&b.field_name)
            .then_with(|| a.field_id.cmp(&b.field_id))
    });
    Ok(mappings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::models::Field;

    #[tokio::test]
    async fn excludes_system_fields_and_dedups() {
        let repo = LocalRepository::new();
        for (id, name) in [(1, "South Park"), (2, "*TBD"), (3, "North Park 1")] {
            repo.insert_field(Field {
                id: FieldId(id),
                name: name.to_string(),
            });
        }
        let league = LeagueId(7);
        repo.assign_field(league, "Spring 2026", FieldId(1));
        repo.assign_field(league, "Spring 2026", FieldId(1));
        repo.assign_field(league, "Spring 2026", FieldId(2));
        repo.assign_field(league, "Spring 2026", FieldId(3));

        let mappings = resolve_field_names(&repo, league, "Spring 2026").await.unwrap();
        let names: Vec<&str> = mappings.iter().map(|m| m.field_name.as_str()).collect();
        assert_eq!(names, vec!["North Park 1", "South Park"]);
    }

    #[tokio::test]
    async fn unknown_league_season_is_empty() {
        let repo = LocalRepository::new();
        let mappings = resolve_field_names(&repo, LeagueId(1), "Fall 2099").await.unwrap();
        assert!(mappings.is_empty());
    }
}

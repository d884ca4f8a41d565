//! Playing fields and league-season field assignments.

use serde::{Deserialize, Serialize};

use super::ids::{FieldId, LeagueId};

/// Names starting with this prefix denote system/placeholder fields
/// ("*TBD", "*BYE", ...). They are excluded everywhere fields are resolved.
pub const SYSTEM_FIELD_PREFIX: char = '*';

/// A playing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
}

impl Field {
    pub fn is_system(&self) -> bool {
        self.name.starts_with(SYSTEM_FIELD_PREFIX)
    }
}

/// Assignment of a field to a league-season, the scoping unit under which
/// fields are made available to a schedule build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAssignment {
    pub league_id: LeagueId,
    pub season: String,
    pub field_id: FieldId,
}

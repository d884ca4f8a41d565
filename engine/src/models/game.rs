//! Schedule rows (games) and their cascade-dependent link rows.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::{AgegroupId, DivisionId, FieldId, GameId, JobId, TeamId};

/// Slot type tag for a side backed by a real team. Sides with any other tag
/// are bracket placeholders (seed or winner-of-game references).
pub const REAL_TEAM_TYPE: &str = "T";

/// One side of a game: either a real team or a bracket placeholder.
///
/// Every field is optional on the wire; legacy rows without a type tag are
/// treated as real-team sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSlot {
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
    pub team_type: Option<String>,
    /// Pool position (1..N) recorded when the schedule was built.
    pub rank: Option<i32>,
}

impl GameSlot {
    pub fn team(id: TeamId, name: impl Into<String>, rank: i32) -> Self {
        Self {
            team_id: Some(id),
            team_name: Some(name.into()),
            team_type: Some(REAL_TEAM_TYPE.to_string()),
            rank: Some(rank),
        }
    }

    pub fn placeholder(tag: impl Into<String>) -> Self {
        Self {
            team_id: None,
            team_name: None,
            team_type: Some(tag.into()),
            rank: None,
        }
    }

    /// Slot type with the legacy default applied.
    pub fn slot_type(&self) -> &str {
        self.team_type.as_deref().unwrap_or(REAL_TEAM_TYPE)
    }

    pub fn is_real_team(&self) -> bool {
        self.slot_type() == REAL_TEAM_TYPE
    }

    /// Team name when present, otherwise the slot type tag.
    pub fn display_label(&self) -> String {
        match self.team_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.slot_type().to_string(),
        }
    }
}

/// A schedule row.
///
/// `id` is assigned by the store on insert. A game is *scheduled* iff
/// `starts_at` is present; rows without a date exist (unplaced pairings) and
/// are ignored by the date-driven QA checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: Option<GameId>,
    pub job_id: JobId,
    pub agegroup_id: Option<AgegroupId>,
    pub agegroup_name: Option<String>,
    pub division_id: Option<DivisionId>,
    pub division_name: Option<String>,
    pub round: Option<i32>,
    pub game_number: Option<i32>,
    pub field_id: Option<FieldId>,
    pub field_name: Option<String>,
    pub starts_at: Option<NaiveDateTime>,
    pub team1: GameSlot,
    pub team2: GameSlot,
}

impl Game {
    pub fn is_scheduled(&self) -> bool {
        self.starts_at.is_some()
    }

    /// Both sides are real teams (round-robin pool play).
    pub fn is_real_matchup(&self) -> bool {
        self.team1.is_real_team() && self.team2.is_real_team()
    }

    pub fn slots(&self) -> [&GameSlot; 2] {
        [&self.team1, &self.team2]
    }

    pub fn agegroup(&self) -> &str {
        self.agegroup_name.as_deref().unwrap_or("")
    }

    pub fn division(&self) -> &str {
        self.division_name.as_deref().unwrap_or("")
    }

    /// Field name when present, otherwise the field id rendered as a string.
    pub fn field_label(&self) -> String {
        match self.field_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.field_id.map(|f| f.to_string()).unwrap_or_default(),
        }
    }
}

/// Device/game notification link row. Deleted first in the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameNotificationLink {
    pub id: i64,
    pub job_id: JobId,
    pub game_id: Option<GameId>,
}

/// Bracket seed link row. Deleted second in the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSeedLink {
    pub id: i64,
    pub job_id: JobId,
    pub game_id: Option<GameId>,
}

/// Referee assignment row. Deleted third in the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefereeAssignment {
    pub id: i64,
    pub job_id: JobId,
    pub game_id: Option<GameId>,
}

//! Pattern extraction: reduce a source job's dated games to abstract,
//! date-agnostic placement descriptors.
//!
//! A pattern row records *where in the season's shape* a game sat (day
//! ordinal, weekday, time of day), *who played* in rank terms (pool
//! positions, not team ids), and *on what* (field name). Replaying the
//! pattern onto a new season re-binds ranks to the target roster and day
//! ordinals to new calendar dates.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::db::repository::{RepositoryResult, ScheduleRepository};
use crate::models::{FieldId, Game, JobId};

/// Abstract placement descriptor for one source game.
///
/// Always fully populated: nullable source fields fall back to `0` / `""` /
/// the real-team type tag, so consumers never see a partial pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlacementPattern {
    pub agegroup_name: String,
    pub division_name: String,
    pub round: i32,
    pub game_number: i32,
    pub field_id: FieldId,
    pub field_name: String,
    /// Weekday name ("Saturday"), derived from the source date.
    pub day_of_week: String,
    pub time_of_day: NaiveTime,
    /// 0-based index of the game's calendar date among the source schedule's
    /// distinct dates, ascending. Unique per distinct date and monotonic
    /// with chronology, which is what decouples the pattern from absolute
    /// dates.
    pub day_ordinal: usize,
    pub team1_type: String,
    pub team1_rank: i32,
    pub team2_type: String,
    pub team2_rank: i32,
}

/// Extract the placement pattern of a source job.
///
/// Selects all games carrying a date, in date order. A job with no
/// scheduled games yields an empty pattern (not an error).
pub async fn extract_pattern<R: ScheduleRepository>(
    repo: &R,
    source_job_id: JobId,
) -> RepositoryResult<Vec<GamePlacementPattern>> {
    let games = repo.fetch_scheduled_games(source_job_id).await?;
    Ok(pattern_from_games(&games))
}

/// Pure core of [`extract_pattern`], over an already-fetched date-ordered
/// snapshot.
pub fn pattern_from_games(games: &[Game]) -> Vec<GamePlacementPattern> {
    let ordinals = day_ordinals(games);

    games
        .iter()
        .filter_map(|game| {
            let starts_at = game.starts_at?;
            let day_ordinal = *ordinals.get(&starts_at.date())?;
            Some(GamePlacementPattern {
                agegroup_name: game.agegroup().to_string(),
                division_name: game.division().to_string(),
                round: game.round.unwrap_or(0),
                game_number: game.game_number.unwrap_or(0),
                field_id: game.field_id.unwrap_or(FieldId(0)),
                field_name: game.field_name.clone().unwrap_or_default(),
                day_of_week: starts_at.date().format("%A").to_string(),
                time_of_day: starts_at.time(),
                day_ordinal,
                team1_type: game.team1.slot_type().to_string(),
                team1_rank: game.team1.rank.unwrap_or(0),
                team2_type: game.team2.slot_type().to_string(),
                team2_rank: game.team2.rank.unwrap_or(0),
            })
        })
        .collect()
}

/// Distinct non-empty field names referenced by a pattern, sorted.
pub fn distinct_field_names(pattern: &[GamePlacementPattern]) -> Vec<String> {
    let mut names: Vec<String> = pattern
        .iter()
        .filter(|p| !p.field_name.is_empty())
        .map(|p| p.field_name.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Distinct calendar dates of the dated games, ascending, indexed from 0.
fn day_ordinals(games: &[Game]) -> BTreeMap<NaiveDate, usize> {
    let mut ordinals = BTreeMap::new();
    for game in games {
        if let Some(starts_at) = game.starts_at {
            ordinals.entry(starts_at.date()).or_insert(0);
        }
    }
    // BTreeMap iterates dates ascending; index in that order.
    for (ordinal, (_, slot)) in ordinals.iter_mut().enumerate() {
        *slot = ordinal;
    }
    ordinals
}

//! Record types for the post-build QA report.
//!
//! One record type per check list, plus the flat [`AutoBuildQaResult`]
//! aggregate. Every list is independently computed and always present; an
//! empty list means the check found nothing, never that it did not run.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{GameId, TeamId};

/// Check 1: an active, division-assigned team with no dated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnscheduledTeam {
    pub team_id: TeamId,
    pub team_name: String,
    pub agegroup_name: String,
    pub division_name: String,
}

/// Check 2: more than one game on a field at the same date-time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDoubleBooking {
    pub starts_at: NaiveDateTime,
    /// Field name of the group's first row; field id string when unnamed.
    pub field_label: String,
    pub game_count: usize,
}

/// Check 3: one team in more than one game at the same date-time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDoubleBooking {
    pub team_id: TeamId,
    pub team_name: String,
    pub starts_at: NaiveDateTime,
    pub game_count: usize,
}

/// Check 4: a side whose schedule-recorded rank disagrees with the team's
/// current division rank. One record per mismatching side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankMismatch {
    pub team_id: TeamId,
    pub team_name: String,
    pub agegroup_name: String,
    pub division_name: String,
    pub starts_at: NaiveDateTime,
    pub scheduled_rank: i32,
    pub actual_rank: i32,
}

/// Check 5: two games of one team on the same day, 90 minutes or less apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackToBackGame {
    pub team_id: TeamId,
    pub team_name: String,
    pub first_start: NaiveDateTime,
    pub second_start: NaiveDateTime,
    pub gap_minutes: i64,
}

/// Check 6: the same two teams matched up more than once. `team1` is the
/// numerically smaller id, a display convention rather than a home/away
/// claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatedMatchup {
    pub team1_id: TeamId,
    pub team1_name: String,
    pub team2_id: TeamId,
    pub team2_name: String,
    pub game_count: usize,
}

/// Check 7: an inactive team still appearing in real-team games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InactiveTeamGame {
    pub team_id: TeamId,
    pub team_name: String,
    pub agegroup_name: String,
    pub division_name: String,
    pub game_count: usize,
}

/// Check 8: dated-game count per calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesOnDate {
    pub date: NaiveDate,
    pub game_count: usize,
}

/// Check 9: per-team appearance count among real-team games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGameCount {
    pub team_id: TeamId,
    pub team_name: String,
    pub agegroup_name: String,
    pub division_name: String,
    pub game_count: usize,
}

/// Check 10: per-team, per-day count with club context for club-facing
/// reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGamesOnDay {
    pub team_id: TeamId,
    pub team_name: String,
    /// Empty string when the team has no resolvable club.
    pub club_name: String,
    pub date: NaiveDate,
    pub game_count: usize,
}

/// Check 11: per-field, per-day utilization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGamesOnDay {
    pub field_label: String,
    pub date: NaiveDate,
    pub game_count: usize,
}

/// Check 12: minutes between a team's earliest and latest start on a
/// multi-game day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSpread {
    pub team_id: TeamId,
    pub team_name: String,
    pub date: NaiveDate,
    pub game_count: usize,
    pub spread_minutes: i64,
}

/// Check 13: distinct-game count vs. active pool size per division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionRoundRobin {
    pub agegroup_name: String,
    pub division_name: String,
    pub distinct_game_count: usize,
    pub team_count: usize,
}

/// Check 14: a game with at least one non-real-team side, listed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketGame {
    pub game_id: Option<GameId>,
    pub agegroup_name: String,
    pub division_name: String,
    pub round: i32,
    pub game_number: i32,
    pub starts_at: Option<NaiveDateTime>,
    pub team1_label: String,
    pub team2_label: String,
}

/// Aggregate result of the 14-check post-build QA battery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoBuildQaResult {
    pub unscheduled_teams: Vec<UnscheduledTeam>,
    pub field_double_bookings: Vec<FieldDoubleBooking>,
    pub team_double_bookings: Vec<TeamDoubleBooking>,
    pub rank_mismatches: Vec<RankMismatch>,
    pub back_to_back_games: Vec<BackToBackGame>,
    pub repeated_matchups: Vec<RepeatedMatchup>,
    pub inactive_team_games: Vec<InactiveTeamGame>,
    pub games_per_date: Vec<GamesOnDate>,
    pub games_per_team: Vec<TeamGameCount>,
    pub games_per_team_per_day: Vec<TeamGamesOnDay>,
    pub games_per_field_per_day: Vec<FieldGamesOnDay>,
    pub game_spreads: Vec<GameSpread>,
    pub round_robin_totals: Vec<DivisionRoundRobin>,
    pub bracket_games: Vec<BracketGame>,
    pub total_games: usize,
}

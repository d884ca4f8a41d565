//! Team-occurrence fan-out.
//!
//! Several checks reason about "one team in one game" rather than about
//! games: a two-sided game is flattened into up to two occurrence rows, one
//! per side that carries a team id. The fan-out happens once per QA run and
//! the resulting rows are shared by the team double-booking, back-to-back,
//! games-per-team, games-per-team-per-day and spread checks.

use chrono::NaiveDateTime;

use crate::models::{Game, GameId, TeamId};

/// One team's appearance in one dated game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamOccurrence {
    pub team_id: TeamId,
    pub team_name: String,
    pub slot_type: String,
    /// Rank recorded on the schedule row for this side (0 when absent).
    pub scheduled_rank: i32,
    pub starts_at: NaiveDateTime,
    pub agegroup_name: String,
    pub division_name: String,
    /// Back-reference to the source game.
    pub game_id: Option<GameId>,
    /// Whether the source game was real-team on both sides.
    pub real_matchup: bool,
}

/// Flatten dated games into per-team occurrence rows.
///
/// Sides without a team id (bracket placeholders, unbound slots) produce no
/// row; undated games produce none either.
pub fn fan_out(games: &[Game]) -> Vec<TeamOccurrence> {
    let mut occurrences = Vec::with_capacity(games.len() * 2);
    for game in games {
        let Some(starts_at) = game.starts_at else {
            continue;
        };
        let real_matchup = game.is_real_matchup();
        for slot in game.slots() {
            let Some(team_id) = slot.team_id else {
                continue;
            };
            occurrences.push(TeamOccurrence {
                team_id,
                team_name: slot.team_name.clone().unwrap_or_default(),
                slot_type: slot.slot_type().to_string(),
                scheduled_rank: slot.rank.unwrap_or(0),
                starts_at,
                agegroup_name: game.agegroup().to_string(),
                division_name: game.division().to_string(),
                game_id: game.id,
                real_matchup,
            });
        }
    }
    occurrences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameSlot, JobId};
    use chrono::NaiveDate;

    #[test]
    fn skips_undated_games_and_placeholder_sides() {
        let dated = Game {
            id: Some(GameId(5)),
            job_id: JobId(1),
            agegroup_id: None,
            agegroup_name: Some("U10".to_string()),
            division_id: None,
            division_name: Some("Red".to_string()),
            round: None,
            game_number: None,
            field_id: None,
            field_name: None,
            starts_at: NaiveDate::from_ymd_opt(2026, 4, 4)
                .unwrap()
                .and_hms_opt(9, 0, 0),
            team1: GameSlot::team(TeamId(1), "Ravens", 1),
            team2: GameSlot::placeholder("W12"),
        };
        let mut undated = dated.clone();
        undated.starts_at = None;

        let occurrences = fan_out(&[dated, undated]);
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].team_id, TeamId(1));
        assert_eq!(occurrences[0].game_id, Some(GameId(5)));
        assert!(!occurrences[0].real_matchup);
    }
}

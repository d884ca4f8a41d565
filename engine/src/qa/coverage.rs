//! Coverage and roster-consistency checks: unscheduled teams, rank
//! mismatches, inactive teams, round-robin totals, bracket listing
//! (checks 1, 4, 7, 13 and 14 of the battery).

use std::collections::{BTreeMap, HashMap, HashSet};

use super::report::{
    BracketGame, DivisionRoundRobin, InactiveTeamGame, RankMismatch, UnscheduledTeam,
};
use crate::models::{Game, GameId, Team, TeamId};

/// Check 1: active, division-assigned teams never appearing in a dated game.
pub fn unscheduled_teams(games: &[Game], teams: &[Team]) -> Vec<UnscheduledTeam> {
    let mut appearing: HashSet<TeamId> = HashSet::new();
    for game in games.iter().filter(|g| g.is_scheduled()) {
        for slot in game.slots() {
            if let Some(team_id) = slot.team_id {
                appearing.insert(team_id);
            }
        }
    }

    let mut unscheduled: Vec<UnscheduledTeam> = teams
        .iter()
        .filter(|t| t.active && t.has_division_assignment() && !appearing.contains(&t.id))
        .map(|t| UnscheduledTeam {
            team_id: t.id,
            team_name: t.name.clone(),
            agegroup_name: t.agegroup().to_string(),
            division_name: t.division().to_string(),
        })
        .collect();
    unscheduled.sort_by(|a, b| {
        a.agegroup_name
            .cmp(&b.agegroup_name)
            .then_with(|| a.division_name.cmp(&b.division_name))
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
    unscheduled
}

/// Check 4: sides of dated real-team games whose recorded rank disagrees
/// with the team's current division rank. One record per mismatching side.
pub fn rank_mismatches(games: &[Game], teams: &[Team]) -> Vec<RankMismatch> {
    let current_rank: HashMap<TeamId, i32> = teams
        .iter()
        .map(|t| (t.id, t.div_rank.unwrap_or(0)))
        .collect();

    let mut mismatches = Vec::new();
    for game in games.iter().filter(|g| g.is_real_matchup()) {
        let Some(starts_at) = game.starts_at else {
            continue;
        };
        for slot in game.slots() {
            let Some(team_id) = slot.team_id else {
                continue;
            };
            // An unknown team id is a roster question, not a rank question.
            let Some(&actual_rank) = current_rank.get(&team_id) else {
                continue;
            };
            let scheduled_rank = slot.rank.unwrap_or(0);
            if scheduled_rank != actual_rank {
                mismatches.push(RankMismatch {
                    team_id,
                    team_name: slot.team_name.clone().unwrap_or_default(),
                    agegroup_name: game.agegroup().to_string(),
                    division_name: game.division().to_string(),
                    starts_at,
                    scheduled_rank,
                    actual_rank,
                });
            }
        }
    }

    mismatches.sort_by(|a, b| {
        a.agegroup_name
            .cmp(&b.agegroup_name)
            .then_with(|| a.division_name.cmp(&b.division_name))
            .then_with(|| a.starts_at.cmp(&b.starts_at))
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
    mismatches
}

/// Check 7: inactive teams whose id appears in any real-team game.
pub fn inactive_team_games(games: &[Game], teams: &[Team]) -> Vec<InactiveTeamGame> {
    let inactive: HashMap<TeamId, &Team> = teams
        .iter()
        .filter(|t| !t.active)
        .map(|t| (t.id, t))
        .collect();

    let mut counts: BTreeMap<TeamId, usize> = BTreeMap::new();
    for game in games.iter().filter(|g| g.is_real_matchup()) {
        for slot in game.slots() {
            if let Some(team_id) = slot.team_id {
                if inactive.contains_key(&team_id) {
                    *counts.entry(team_id).or_insert(0) += 1;
                }
            }
        }
    }

    let mut flagged: Vec<InactiveTeamGame> = counts
        .into_iter()
        .filter_map(|(team_id, game_count)| {
            let team = inactive.get(&team_id)?;
            Some(InactiveTeamGame {
                team_id,
                team_name: team.name.clone(),
                agegroup_name: team.agegroup().to_string(),
                division_name: team.division().to_string(),
                game_count,
            })
        })
        .collect();
    flagged.sort_by(|a, b| {
        a.agegroup_name
            .cmp(&b.agegroup_name)
            .then_with(|| a.division_name.cmp(&b.division_name))
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
    flagged
}

/// Check 13: distinct-game count per division against the division's active
/// pool size. Counting goes by game id, not row count, so duplicated rows
/// cannot inflate a division's total.
pub fn round_robin_totals(games: &[Game], teams: &[Team]) -> Vec<DivisionRoundRobin> {
    let mut ids_per_division: BTreeMap<(String, String), HashSet<GameId>> = BTreeMap::new();
    for game in games {
        let key = (game.agegroup().to_string(), game.division().to_string());
        let ids = ids_per_division.entry(key).or_default();
        if let Some(game_id) = game.id {
            ids.insert(game_id);
        }
    }

    let mut pool_sizes: HashMap<(String, String), usize> = HashMap::new();
    for team in teams.iter().filter(|t| t.active && t.has_division_assignment()) {
        *pool_sizes
            .entry((team.agegroup().to_string(), team.division().to_string()))
            .or_insert(0) += 1;
    }

    ids_per_division
        .into_iter()
        .map(|((agegroup_name, division_name), ids)| {
            let team_count = pool_sizes
                .get(&(agegroup_name.clone(), division_name.clone()))
                .copied()
                .unwrap_or(0);
            DivisionRoundRobin {
                agegroup_name,
                division_name,
                distinct_game_count: ids.len(),
                team_count,
            }
        })
        .collect()
}

/// Check 14: games with a non-real-team side, listed without validation.
/// Bracket structure is generated and owned elsewhere.
pub fn bracket_games(games: &[Game]) -> Vec<BracketGame> {
    let mut listed: Vec<BracketGame> = games
        .iter()
        .filter(|g| !g.is_real_matchup())
        .map(|g| BracketGame {
            game_id: g.id,
            agegroup_name: g.agegroup().to_string(),
            division_name: g.division().to_string(),
            round: g.round.unwrap_or(0),
            game_number: g.game_number.unwrap_or(0),
            starts_at: g.starts_at,
            team1_label: g.team1.display_label(),
            team2_label: g.team2.display_label(),
        })
        .collect();
    listed.sort_by(|a, b| {
        a.starts_at
            .cmp(&b.starts_at)
            .then_with(|| a.game_number.cmp(&b.game_number))
    });
    listed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameSlot, JobId};
    use chrono::NaiveDate;

    fn team(id: i64, name: &str, rank: i32, active: bool) -> Team {
        Team {
            id: TeamId(id),
            job_id: JobId(1),
            name: name.to_string(),
            active,
            agegroup_id: Some(crate::models::AgegroupId(1)),
            agegroup_name: Some("U10".to_string()),
            division_id: Some(crate::models::DivisionId(1)),
            division_name: Some("Red".to_string()),
            div_rank: Some(rank),
            club_id: None,
        }
    }

    fn game(id: i64, team1: GameSlot, team2: GameSlot) -> Game {
        Game {
            id: Some(GameId(id)),
            job_id: JobId(1),
            agegroup_id: Some(crate::models::AgegroupId(1)),
            agegroup_name: Some("U10".to_string()),
            division_id: Some(crate::models::DivisionId(1)),
            division_name: Some("Red".to_string()),
            round: Some(1),
            game_number: Some(id as i32),
            field_id: None,
            field_name: None,
            starts_at: NaiveDate::from_ymd_opt(2026, 4, 4)
                .unwrap()
                .and_hms_opt(9, 0, 0),
            team1,
            team2,
        }
    }

    #[test]
    fn mismatching_side_is_reported_alone() {
        let teams = vec![team(1, "Ravens", 2, true), team(2, "Owls", 3, true)];
        // Ravens correctly at rank 2; Owls scheduled as rank 2 but currently 3.
        let games = vec![game(
            1,
            GameSlot::team(TeamId(1), "Ravens", 2),
            GameSlot::team(TeamId(2), "Owls", 2),
        )];

        let mismatches = rank_mismatches(&games, &teams);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].team_id, TeamId(2));
        assert_eq!(mismatches[0].scheduled_rank, 2);
        assert_eq!(mismatches[0].actual_rank, 3);
    }

    #[test]
    fn unscheduled_team_detection() {
        let teams = vec![
            team(1, "Ravens", 1, true),
            team(2, "Owls", 2, true),
            team(3, "Hawks", 3, false), // inactive: never reported here
        ];
        let games = vec![game(
            1,
            GameSlot::team(TeamId(1), "Ravens", 1),
            GameSlot::team(TeamId(4), "Visitors", 2),
        )];

        let unscheduled = unscheduled_teams(&games, &teams);
        assert_eq!(unscheduled.len(), 1);
        assert_eq!(unscheduled[0].team_id, TeamId(2));
    }

    #[test]
    fn inactive_team_appearances_are_counted() {
        let teams = vec![team(1, "Ravens", 1, true), team(2, "Owls", 2, false)];
        let games = vec![
            game(
                1,
                GameSlot::team(TeamId(1), "Ravens", 1),
                GameSlot::team(TeamId(2), "Owls", 2),
            ),
            game(
                2,
                GameSlot::team(TeamId(2), "Owls", 2),
                GameSlot::team(TeamId(1), "Ravens", 1),
            ),
        ];

        let flagged = inactive_team_games(&games, &teams);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].team_id, TeamId(2));
        assert_eq!(flagged[0].game_count, 2);
    }

    #[test]
    fn duplicate_rows_do_not_inflate_round_robin_totals() {
        let teams = vec![team(1, "Ravens", 1, true), team(2, "Owls", 2, true)];
        let g = game(
            7,
            GameSlot::team(TeamId(1), "Ravens", 1),
            GameSlot::team(TeamId(2), "Owls", 2),
        );
        let totals = round_robin_totals(&[g.clone(), g], &teams);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].distinct_game_count, 1);
        assert_eq!(totals[0].team_count, 2);
    }

    #[test]
    fn bracket_games_are_listed_not_validated() {
        let games = vec![
            game(
                1,
                GameSlot::team(TeamId(1), "Ravens", 1),
                GameSlot::placeholder("W3"),
            ),
            game(
                2,
                GameSlot::team(TeamId(1), "Ravens", 1),
                GameSlot::team(TeamId(2), "Owls", 2),
            ),
        ];

        let listed = bracket_games(&games);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].team2_label, "W3");
    }
}

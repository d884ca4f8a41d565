//! Distribution checks: per-date, per-team, per-field counts and single-day
//! spreads (checks 8, 9, 10, 11 and 12 of the battery).

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime};

use super::occurrences::TeamOccurrence;
use super::report::{FieldGamesOnDay, GameSpread, GamesOnDate, TeamGameCount, TeamGamesOnDay};
use crate::models::{Club, ClubId, FieldId, Game, Team, TeamId};

/// Check 8: dated-game count per calendar date.
pub fn games_per_date(games: &[Game]) -> Vec<GamesOnDate> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for game in games {
        if let Some(starts_at) = game.starts_at {
            *counts.entry(starts_at.date()).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(date, game_count)| GamesOnDate { date, game_count })
        .collect()
}

/// Check 9: per-team appearance count among real-team games, with division
/// context.
pub fn games_per_team(occurrences: &[TeamOccurrence]) -> Vec<TeamGameCount> {
    let mut counts: BTreeMap<TeamId, (String, String, String, usize)> = BTreeMap::new();
    for occ in occurrences.iter().filter(|o| o.real_matchup) {
        let entry = counts.entry(occ.team_id).or_insert_with(|| {
            (
                occ.team_name.clone(),
                occ.agegroup_name.clone(),
                occ.division_name.clone(),
                0,
            )
        });
        entry.3 += 1;
    }

    let mut rows: Vec<TeamGameCount> = counts
        .into_iter()
        .map(
            |(team_id, (team_name, agegroup_name, division_name, game_count))| TeamGameCount {
                team_id,
                team_name,
                agegroup_name,
                division_name,
                game_count,
            },
        )
        .collect();
    rows.sort_by(|a, b| {
        a.agegroup_name
            .cmp(&b.agegroup_name)
            .then_with(|| a.division_name.cmp(&b.division_name))
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
    rows
}

/// Check 10: per-team, per-day count enriched with the team's club name
/// (empty string when unresolved) for club-facing grouping.
pub fn games_per_team_per_day(
    occurrences: &[TeamOccurrence],
    teams: &[Team],
    clubs: &[Club],
) -> Vec<TeamGamesOnDay> {
    let club_names: HashMap<ClubId, &str> =
        clubs.iter().map(|c| (c.id, c.name.as_str())).collect();
    let club_by_team: HashMap<TeamId, String> = teams
        .iter()
        .map(|t| {
            let club = t
                .club_id
                .and_then(|id| club_names.get(&id).copied())
                .unwrap_or("");
            (t.id, club.to_string())
        })
        .collect();

    let mut counts: BTreeMap<(NaiveDate, TeamId), (String, usize)> = BTreeMap::new();
    for occ in occurrences {
        let entry = counts
            .entry((occ.starts_at.date(), occ.team_id))
            .or_insert_with(|| (occ.team_name.clone(), 0));
        entry.1 += 1;
    }

    counts
        .into_iter()
        .map(|((date, team_id), (team_name, game_count))| TeamGamesOnDay {
            team_id,
            team_name,
            club_name: club_by_team.get(&team_id).cloned().unwrap_or_default(),
            date,
            game_count,
        })
        .collect()
}

/// Check 11: dated-game count per (field, day).
pub fn games_per_field_per_day(games: &[Game]) -> Vec<FieldGamesOnDay> {
    let mut counts: BTreeMap<(NaiveDate, FieldId), (String, usize)> = BTreeMap::new();
    for game in games {
        let (Some(starts_at), Some(field_id)) = (game.starts_at, game.field_id) else {
            continue;
        };
        let entry = counts
            .entry((starts_at.date(), field_id))
            .or_insert_with(|| (game.field_label(), 0));
        entry.1 += 1;
    }

    counts
        .into_iter()
        .map(|((date, _), (field_label, game_count))| FieldGamesOnDay {
            field_label,
            date,
            game_count,
        })
        .collect()
}

/// Check 12: for teams with more than one game on a day, minutes between the
/// day's earliest and latest start.
pub fn game_spreads(occurrences: &[TeamOccurrence]) -> Vec<GameSpread> {
    let mut days: BTreeMap<(NaiveDate, TeamId), (String, Vec<NaiveDateTime>)> = BTreeMap::new();
    for occ in occurrences {
        let entry = days
            .entry((occ.starts_at.date(), occ.team_id))
            .or_insert_with(|| (occ.team_name.clone(), Vec::new()));
        entry.1.push(occ.starts_at);
    }

    let mut spreads: Vec<GameSpread> = days
        .into_iter()
        .filter(|(_, (_, starts))| starts.len() > 1)
        .filter_map(|((date, team_id), (team_name, starts))| {
            let earliest = starts.iter().min()?;
            let latest = starts.iter().max()?;
            Some(GameSpread {
                team_id,
                team_name,
                date,
                game_count: starts.len(),
                spread_minutes: (*latest - *earliest).num_minutes(),
            })
        })
        .collect();
    spreads.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.team_name.cmp(&b.team_name)));
    spreads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qa::occurrences::fan_out;
    use crate::models::{GameSlot, JobId};

    fn game_at(day: u32, hour: u32, team1: i64, team2: i64) -> Game {
        Game {
            id: None,
            job_id: JobId(1),
            agegroup_id: None,
            agegroup_name: Some("U10".to_string()),
            division_id: None,
            division_name: Some("Red".to_string()),
            round: None,
            game_number: None,
            field_id: Some(FieldId(1)),
            field_name: Some("North Park 1".to_string()),
            starts_at: NaiveDate::from_ymd_opt(2026, 4, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0),
            team1: GameSlot::team(TeamId(team1), format!("Team {team1}"), 1),
            team2: GameSlot::team(TeamId(team2), format!("Team {team2}"), 2),
        }
    }

    #[test]
    fn spread_is_earliest_to_latest() {
        let games = vec![game_at(4, 9, 1, 2), game_at(4, 15, 1, 3), game_at(4, 12, 1, 4)];
        let spreads = game_spreads(&fan_out(&games));

        let team1 = spreads.iter().find(|s| s.team_id == TeamId(1)).unwrap();
        assert_eq!(team1.game_count, 3);
        assert_eq!(team1.spread_minutes, 360);

        // Single-game days are not listed.
        assert!(spreads.iter().all(|s| s.game_count > 1));
    }

    #[test]
    fn per_date_and_per_field_counts() {
        let games = vec![game_at(4, 9, 1, 2), game_at(4, 11, 3, 4), game_at(11, 9, 1, 3)];

        let per_date = games_per_date(&games);
        assert_eq!(per_date.len(), 2);
        assert_eq!(per_date[0].game_count, 2);

        let per_field = games_per_field_per_day(&games);
        assert_eq!(per_field.len(), 2);
        assert_eq!(per_field[0].field_label, "North Park 1");
        assert_eq!(per_field[0].game_count, 2);
    }

    #[test]
    fn club_name_defaults_to_empty() {
        let games = vec![game_at(4, 9, 1, 2)];
        let teams = vec![Team {
            id: TeamId(1),
            job_id: JobId(1),
            name: "Team 1".to_string(),
            active: true,
            agegroup_id: None,
            agegroup_name: None,
            division_id: None,
            division_name: None,
            div_rank: None,
            club_id: Some(ClubId(9)),
        }];
        let clubs = vec![Club {
            id: ClubId(9),
            name: "Harbor FC".to_string(),
        }];

        let rows = games_per_team_per_day(&fan_out(&games), &teams, &clubs);
        assert_eq!(rows.len(), 2);
        let team1 = rows.iter().find(|r| r.team_id == TeamId(1)).unwrap();
        assert_eq!(team1.club_name, "Harbor FC");
        let team2 = rows.iter().find(|r| r.team_id == TeamId(2)).unwrap();
        assert_eq!(team2.club_name, "");
    }
}

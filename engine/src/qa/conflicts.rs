//! Conflict checks: double-bookings, back-to-backs, repeated matchups
//! (checks 2, 3, 5 and 6 of the battery).

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use super::occurrences::TeamOccurrence;
use super::report::{BackToBackGame, FieldDoubleBooking, RepeatedMatchup, TeamDoubleBooking};
use crate::models::{FieldId, Game, TeamId};

/// Largest same-day gap, in minutes, still treated as back-to-back. A gap of
/// exactly 0 is a duplicate timestamp (a double-booking), not a back-to-back.
pub const BACK_TO_BACK_GAP_MINUTES: i64 = 90;

/// Check 2: dated games sharing a (date-time, field) slot.
pub fn field_double_bookings(games: &[Game]) -> Vec<FieldDoubleBooking> {
    let mut groups: BTreeMap<(NaiveDateTime, FieldId), (String, usize)> = BTreeMap::new();
    for game in games {
        let (Some(starts_at), Some(field_id)) = (game.starts_at, game.field_id) else {
            continue;
        };
        let entry = groups
            .entry((starts_at, field_id))
            .or_insert_with(|| (game.field_label(), 0));
        entry.1 += 1;
    }

    groups
        .into_iter()
        .filter(|(_, (_, count))| *count > 1)
        .map(|((starts_at, _), (field_label, game_count))| FieldDoubleBooking {
            starts_at,
            field_label,
            game_count,
        })
        .collect()
}

/// Check 3: one team with more than one game at the same date-time.
pub fn team_double_bookings(occurrences: &[TeamOccurrence]) -> Vec<TeamDoubleBooking> {
    let mut groups: BTreeMap<(NaiveDateTime, TeamId), (String, usize)> = BTreeMap::new();
    for occ in occurrences {
        let entry = groups
            .entry((occ.starts_at, occ.team_id))
            .or_insert_with(|| (occ.team_name.clone(), 0));
        entry.1 += 1;
    }

    groups
        .into_iter()
        .filter(|(_, (_, count))| *count > 1)
        .map(|((starts_at, team_id), (team_name, game_count))| TeamDoubleBooking {
            team_id,
            team_name,
            starts_at,
            game_count,
        })
        .collect()
}

/// Check 5: consecutive same-day games of one team with a start gap in
/// `(0, BACK_TO_BACK_GAP_MINUTES]`.
pub fn back_to_back_games(occurrences: &[TeamOccurrence]) -> Vec<BackToBackGame> {
    let mut ordered: Vec<&TeamOccurrence> = occurrences.iter().collect();
    ordered.sort_by(|a, b| {
        a.team_id
            .cmp(&b.team_id)
            .then_with(|| a.starts_at.cmp(&b.starts_at))
    });

    let mut flagged = Vec::new();
    for pair in ordered.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        if first.team_id != second.team_id {
            continue;
        }
        if first.starts_at.date() != second.starts_at.date() {
            continue;
        }
        let gap_minutes = (second.starts_at - first.starts_at).num_minutes();
        if gap_minutes > 0 && gap_minutes <= BACK_TO_BACK_GAP_MINUTES {
            flagged.push(BackToBackGame {
                team_id: first.team_id,
                team_name: first.team_name.clone(),
                first_start: first.starts_at,
                second_start: second.starts_at,
                gap_minutes,
            });
        }
    }

    flagged.sort_by(|a, b| {
        a.second_start
            .cmp(&b.second_start)
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
    flagged
}

/// Check 6: the same two teams meeting more than once.
///
/// The grouping key is order-independent, (min id, max id), so `A v B`
/// and `B v A` collapse into one group. The smaller id is reported as
/// `team1`.
pub fn repeated_matchups(games: &[Game]) -> Vec<RepeatedMatchup> {
    let mut groups: BTreeMap<(TeamId, TeamId), (String, String, usize)> = BTreeMap::new();
    for game in games.iter().filter(|g| g.is_real_matchup()) {
        let (Some(id1), Some(id2)) = (game.team1.team_id, game.team2.team_id) else {
            continue;
        };
        let (low, high) = if id1 <= id2 {
            (&game.team1, &game.team2)
        } else {
            (&game.team2, &game.team1)
        };
        let key = (id1.min(id2), id1.max(id2));
        let entry = groups.entry(key).or_insert_with(|| {
            (
                low.team_name.clone().unwrap_or_default(),
                high.team_name.clone().unwrap_or_default(),
                0,
            )
        });
        entry.2 += 1;
    }

    groups
        .into_iter()
        .filter(|(_, (_, _, count))| *count > 1)
        .map(
            |((team1_id, team2_id), (team1_name, team2_name, game_count))| RepeatedMatchup {
                team1_id,
                team1_name,
                team2_id,
                team2_name,
                game_count,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameSlot, JobId};
    use chrono::NaiveDate;

    fn occurrence(team: i64, name: &str, day: u32, hour: u32, min: u32) -> TeamOccurrence {
        TeamOccurrence {
            team_id: TeamId(team),
            team_name: name.to_string(),
            slot_type: "T".to_string(),
            scheduled_rank: 0,
            starts_at: NaiveDate::from_ymd_opt(2026, 4, day)
                .unwrap()
                .and_hms_opt(hour, min, 0)
                .unwrap(),
            agegroup_name: String::new(),
            division_name: String::new(),
            game_id: None,
            real_matchup: true,
        }
    }

    #[test]
    fn ninety_minutes_flags_ninety_one_does_not() {
        let cases: [(i64, bool); 4] = [
            (90, true),
            (91, false),
            (1, true),
            (0, false), // duplicate timestamp is a double-booking instead
        ];
        for (gap, expected) in cases {
            let occs = vec![
                occurrence(1, "Ravens", 4, 9, 0),
                occurrence(1, "Ravens", 4, 9 + (gap / 60) as u32, (gap % 60) as u32),
            ];
            let flagged = back_to_back_games(&occs);
            assert_eq!(flagged.len(), usize::from(expected), "gap {gap}");
            if expected {
                assert_eq!(flagged[0].gap_minutes, gap);
            }
        }
    }

    #[test]
    fn different_days_never_flag() {
        let occs = vec![
            occurrence(1, "Ravens", 4, 23, 30),
            occurrence(1, "Ravens", 5, 0, 15),
        ];
        assert!(back_to_back_games(&occs).is_empty());
    }

    #[test]
    fn other_teams_do_not_pair() {
        let occs = vec![
            occurrence(1, "Ravens", 4, 9, 0),
            occurrence(2, "Owls", 4, 9, 30),
        ];
        assert!(back_to_back_games(&occs).is_empty());
    }

    #[test]
    fn duplicate_timestamp_is_team_double_booking() {
        let occs = vec![
            occurrence(1, "Ravens", 4, 9, 0),
            occurrence(1, "Ravens", 4, 9, 0),
            occurrence(2, "Owls", 4, 9, 0),
        ];
        let flagged = team_double_bookings(&occs);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].team_id, TeamId(1));
        assert_eq!(flagged[0].game_count, 2);
    }

    #[test]
    fn matchup_key_is_order_independent() {
        let game = |home: i64, away: i64, day: u32| Game {
            id: None,
            job_id: JobId(1),
            agegroup_id: None,
            agegroup_name: None,
            division_id: None,
            division_name: None,
            round: None,
            game_number: None,
            field_id: None,
            field_name: None,
            starts_at: NaiveDate::from_ymd_opt(2026, 4, day)
                .unwrap()
                .and_hms_opt(9, 0, 0),
            team1: GameSlot::team(TeamId(home), format!("Team {home}"), 1),
            team2: GameSlot::team(TeamId(away), format!("Team {away}"), 2),
        };

        let repeated = repeated_matchups(&[game(1, 2, 4), game(2, 1, 11), game(1, 3, 18)]);
        assert_eq!(repeated.len(), 1);
        assert_eq!(repeated[0].team1_id, TeamId(1));
        assert_eq!(repeated[0].team2_id, TeamId(2));
        assert_eq!(repeated[0].team1_name, "Team 1");
        assert_eq!(repeated[0].game_count, 2);
    }
}

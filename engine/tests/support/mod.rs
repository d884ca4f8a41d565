//! Shared fixtures for the integration suites: a deterministic two-division
//! round-robin season seeded into the in-memory repository.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};

use autobuild_engine::db::repositories::LocalRepository;
use autobuild_engine::models::*;

/// Five-team round-robin pairing table by rank, one row per round.
/// Every pair of ranks meets exactly once across the five rounds.
pub const RR_ROUNDS: [[(i32, i32); 2]; 5] = [
    [(2, 5), (3, 4)],
    [(1, 5), (2, 3)],
    [(1, 4), (5, 3)],
    [(1, 3), (4, 2)],
    [(1, 2), (4, 5)],
];

pub fn job(id: i64, customer: i64, year: i32, season: &str) -> Job {
    Job {
        id: JobId(id),
        customer_id: CustomerId(customer),
        name: format!("{season} {year}"),
        path: format!("{}-{year}", season.to_lowercase()),
        year,
        season: season.to_string(),
    }
}

pub struct DivisionSpec {
    pub agegroup_id: AgegroupId,
    pub agegroup_name: &'static str,
    pub division_id: DivisionId,
    pub division_name: &'static str,
    /// First team id; ranks 1..=5 get ids base+1..=base+5.
    pub team_id_base: i64,
    /// Time of the round slot and of the extra final-day slot.
    pub round_time: NaiveTime,
    pub final_time: NaiveTime,
}

pub fn team_id_for_rank(spec: &DivisionSpec, rank: i32) -> TeamId {
    TeamId(spec.team_id_base + rank as i64)
}

pub fn team_name_for_rank(spec: &DivisionSpec, rank: i32) -> String {
    format!("{} {} #{rank}", spec.agegroup_name, spec.division_name)
}

/// Register the division's five teams, ranked 1..=5.
pub fn seed_division_teams(repo: &LocalRepository, job_id: JobId, spec: &DivisionSpec) {
    for rank in 1..=5 {
        repo.insert_team(Team {
            id: team_id_for_rank(spec, rank),
            job_id,
            name: team_name_for_rank(spec, rank),
            active: true,
            agegroup_id: Some(spec.agegroup_id),
            agegroup_name: Some(spec.agegroup_name.to_string()),
            division_id: Some(spec.division_id),
            division_name: Some(spec.division_name.to_string()),
            div_rank: Some(rank),
            club_id: None,
        });
    }
}

/// Seed the division's ten round-robin games over four dates.
///
/// Rounds 1-4 land on one date each at `round_time`; round 5 shares the
/// last date at `final_time`. The two games of a round run in parallel on
/// the two fields.
pub fn seed_division_games(
    repo: &LocalRepository,
    job_id: JobId,
    spec: &DivisionSpec,
    dates: &[NaiveDate; 4],
    fields: &[(FieldId, &str); 2],
) {
    let mut game_number = 1;
    for (round, pairings) in RR_ROUNDS.iter().enumerate() {
        let (date, time) = if round < 4 {
            (dates[round], spec.round_time)
        } else {
            (dates[3], spec.final_time)
        };
        for (slot, &(rank1, rank2)) in pairings.iter().enumerate() {
            let (field_id, field_name) = fields[slot];
            repo.insert_game_impl(Game {
                id: None,
                job_id,
                agegroup_id: Some(spec.agegroup_id),
                agegroup_name: Some(spec.agegroup_name.to_string()),
                division_id: Some(spec.division_id),
                division_name: Some(spec.division_name.to_string()),
                round: Some(round as i32 + 1),
                game_number: Some(game_number),
                field_id: Some(field_id),
                field_name: Some(field_name.to_string()),
                starts_at: Some(date.and_time(time)),
                team1: GameSlot::team(
                    team_id_for_rank(spec, rank1),
                    team_name_for_rank(spec, rank1),
                    rank1,
                ),
                team2: GameSlot::team(
                    team_id_for_rank(spec, rank2),
                    team_name_for_rank(spec, rank2),
                    rank2,
                ),
            });
            game_number += 1;
        }
    }
}

pub fn spring_dates() -> [NaiveDate; 4] {
    [
        NaiveDate::from_ymd_opt(2026, 4, 4).unwrap(),
        NaiveDate::from_ymd_opt(2026, 4, 11).unwrap(),
        NaiveDate::from_ymd_opt(2026, 4, 18).unwrap(),
        NaiveDate::from_ymd_opt(2026, 4, 25).unwrap(),
    ]
}

pub fn red_division() -> DivisionSpec {
    DivisionSpec {
        agegroup_id: AgegroupId(1),
        agegroup_name: "U10",
        division_id: DivisionId(1),
        division_name: "Red",
        team_id_base: 0,
        round_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        final_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
    }
}

pub fn blue_division() -> DivisionSpec {
    DivisionSpec {
        agegroup_id: AgegroupId(1),
        agegroup_name: "U10",
        division_id: DivisionId(2),
        division_name: "Blue",
        team_id_base: 10,
        round_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        final_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
    }
}

pub const SOURCE_FIELDS: [(FieldId, &str); 2] =
    [(FieldId(1), "North Field"), (FieldId(2), "South Field")];

/// Full source season: job 1 of customer 10, two 5-team divisions, 20 games
/// over 4 dates on 2 fields.
pub fn seed_source_season(repo: &LocalRepository) -> JobId {
    let source_job = job(1, 10, 2026, "Spring");
    let job_id = source_job.id;
    repo.insert_job(source_job);

    let dates = spring_dates();
    for spec in [red_division(), blue_division()] {
        seed_division_teams(repo, job_id, &spec);
        seed_division_games(repo, job_id, &spec, &dates, &SOURCE_FIELDS);
    }
    job_id
}

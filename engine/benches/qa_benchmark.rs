use chrono::{NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use autobuild_engine::models::{
    AgegroupId, DivisionId, FieldId, Game, GameId, GameSlot, JobId, TeamId,
};
use autobuild_engine::qa::{conflicts, distribution, fan_out};

/// Synthetic season: `divisions` divisions of 8 teams, every team pair once,
/// spread over Saturdays and two fields per division.
fn synthetic_games(divisions: i64) -> Vec<Game> {
    let mut games = Vec::new();
    let mut game_id = 1;
    for div in 0..divisions {
        let base = div * 100;
        for i in 1..=8i64 {
            for j in (i + 1)..=8i64 {
                let week = ((game_id as i64) % 10) as u32;
                let starts_at: NaiveDateTime = NaiveDate::from_ymd_opt(2026, 4, 4)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(u64::from(week) * 7))
                    .unwrap()
                    .and_hms_opt(9 + ((i + j) % 4) as u32, 0, 0)
                    .unwrap();
                games.push(Game {
                    id: Some(GameId(game_id)),
                    job_id: JobId(1),
                    agegroup_id: Some(AgegroupId(1)),
                    agegroup_name: Some("U12".to_string()),
                    division_id: Some(DivisionId(div + 1)),
                    division_name: Some(format!("Division {}", div + 1)),
                    round: Some(((i + j) % 7) as i32 + 1),
                    game_number: Some(game_id as i32),
                    field_id: Some(FieldId(div * 2 + (j % 2))),
                    field_name: Some(format!("Field {}", div * 2 + (j % 2))),
                    starts_at: Some(starts_at),
                    team1: GameSlot::team(TeamId(base + i), format!("Team {}", base + i), i as i32),
                    team2: GameSlot::team(TeamId(base + j), format!("Team {}", base + j), j as i32),
                });
                game_id += 1;
            }
        }
    }
    games
}

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("qa_fan_out");
    for divisions in [4, 16, 64] {
        let games = synthetic_games(divisions);
        group.bench_with_input(
            BenchmarkId::from_parameter(divisions),
            &games,
            |b, games| {
                b.iter(|| fan_out(black_box(games)));
            },
        );
    }
    group.finish();
}

fn bench_conflict_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("qa_conflict_checks");
    let games = synthetic_games(16);
    let occurrences = fan_out(&games);

    group.bench_function("field_double_bookings", |b| {
        b.iter(|| conflicts::field_double_bookings(black_box(&games)));
    });
    group.bench_function("team_double_bookings", |b| {
        b.iter(|| conflicts::team_double_bookings(black_box(&occurrences)));
    });
    group.bench_function("back_to_back_games", |b| {
        b.iter(|| conflicts::back_to_back_games(black_box(&occurrences)));
    });
    group.bench_function("repeated_matchups", |b| {
        b.iter(|| conflicts::repeated_matchups(black_box(&games)));
    });
    group.finish();
}

fn bench_distribution_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("qa_distribution_checks");
    let games = synthetic_games(16);
    let occurrences = fan_out(&games);

    group.bench_function("games_per_date", |b| {
        b.iter(|| distribution::games_per_date(black_box(&games)));
    });
    group.bench_function("games_per_team", |b| {
        b.iter(|| distribution::games_per_team(black_box(&occurrences)));
    });
    group.bench_function("game_spreads", |b| {
        b.iter(|| distribution::game_spreads(black_box(&occurrences)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_fan_out,
    bench_conflict_checks,
    bench_distribution_checks
);
criterion_main!(benches);

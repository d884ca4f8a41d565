//! CLI runner for the post-build QA battery.
//!
//! Loads a league snapshot into the in-memory repository and prints the QA
//! report for one job, as a per-check summary or as the full JSON aggregate.
//!
//! Usage:
//!   autobuild-qa <snapshot.json> <job-id> [--json]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use autobuild_engine::db::repositories::LocalRepository;
use autobuild_engine::io::{load_snapshot, populate_repository};
use autobuild_engine::models::JobId;
use autobuild_engine::qa;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json_output = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let [snapshot_path, job_id] = positional.as_slice() else {
        bail!("Usage: autobuild-qa <snapshot.json> <job-id> [--json]");
    };
    let snapshot_path = PathBuf::from(snapshot_path.as_str());
    let job_id = JobId(
        job_id
            .parse::<i64>()
            .with_context(|| format!("Invalid job id: {job_id}"))?,
    );

    let snapshot = load_snapshot(&snapshot_path)?;
    let repo = LocalRepository::new();
    populate_repository(&repo, snapshot);

    let report = qa::run_qa(&repo, job_id)
        .await
        .context("QA battery failed")?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("QA report for job {} ({} games)", job_id, report.total_games);
    println!("  Unscheduled teams:        {}", report.unscheduled_teams.len());
    println!("  Field double-bookings:    {}", report.field_double_bookings.len());
    println!("  Team double-bookings:     {}", report.team_double_bookings.len());
    println!("  Rank mismatches:          {}", report.rank_mismatches.len());
    println!("  Back-to-back games:       {}", report.back_to_back_games.len());
    println!("  Repeated matchups:        {}", report.repeated_matchups.len());
    println!("  Inactive teams in games:  {}", report.inactive_team_games.len());
    println!("  Dates with games:         {}", report.games_per_date.len());
    println!("  Teams with games:         {}", report.games_per_team.len());
    println!("  Team-day rows:            {}", report.games_per_team_per_day.len());
    println!("  Field-day rows:           {}", report.games_per_field_per_day.len());
    println!("  Long single-day spreads:  {}", report.game_spreads.len());
    println!("  Divisions (round robin):  {}", report.round_robin_totals.len());
    println!("  Bracket/playoff games:    {}", report.bracket_games.len());
    Ok(())
}

//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing, local development, and the CLI runner. All
//! data is stored in memory using HashMap and Vec structures, providing
//! fast, deterministic, and isolated execution.
//!
//! The single `RwLock` write-lock hold in [`LocalRepository::delete_job_schedule`]
//! is this backend's transactional scope: the whole cascade happens under
//! one guard, so readers never observe a partially deleted job.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::db::repository::*;
use crate::models::{
    BracketSeedLink, Club, ClubId, CustomerId, Field, FieldAssignment, FieldId, Game,
    GameId, GameNotificationLink, Job, JobId, LeagueId, RefereeAssignment, Team,
};

/// In-memory local repository.
///
/// # Example
/// ```
/// use autobuild_engine::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// assert_eq!(repo.game_count(), 0);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    jobs: HashMap<JobId, Job>,
    games: Vec<Game>,
    teams: Vec<Team>,
    clubs: HashMap<ClubId, Club>,
    fields: HashMap<FieldId, Field>,
    field_assignments: Vec<FieldAssignment>,

    // Cascade-dependent rows
    game_notification_links: Vec<GameNotificationLink>,
    bracket_seed_links: Vec<BracketSeedLink>,
    referee_assignments: Vec<RefereeAssignment>,

    // ID counter for inserted games
    next_game_id: i64,

    // Connection health
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                next_game_id: 1,
                is_healthy: true,
                ..Default::default()
            })),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().unwrap().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            next_game_id: 1,
            ..Default::default()
        };
    }

    // ==================== Seed helpers ====================

    pub fn insert_job(&self, job: Job) {
        self.data.write().unwrap().jobs.insert(job.id, job);
    }

    pub fn insert_team(&self, team: Team) {
        self.data.write().unwrap().teams.push(team);
    }

    pub fn insert_club(&self, club: Club) {
        self.data.write().unwrap().clubs.insert(club.id, club);
    }

    pub fn insert_field(&self, field: Field) {
        self.data.write().unwrap().fields.insert(field.id, field);
    }

    pub fn assign_field(&self, league_id: LeagueId, season: impl Into<String>, field_id: FieldId) {
        self.data.write().unwrap().field_assignments.push(FieldAssignment {
            league_id,
            season: season.into(),
            field_id,
        });
    }

    /// Add a game, assigning an id when the row does not carry one.
    ///
    /// # Returns
    /// The id of the stored row
    pub fn insert_game_impl(&self, game: Game) -> GameId {
        let mut data = self.data.write().unwrap();
        Self::store_game(&mut data, game)
    }

    pub fn link_notification(&self, link: GameNotificationLink) {
        self.data.write().unwrap().game_notification_links.push(link);
    }

    pub fn link_bracket_seed(&self, link: BracketSeedLink) {
        self.data.write().unwrap().bracket_seed_links.push(link);
    }

    pub fn link_referee(&self, assignment: RefereeAssignment) {
        self.data.write().unwrap().referee_assignments.push(assignment);
    }

    // ==================== Counters for assertions ====================

    pub fn game_count(&self) -> usize {
        self.data.read().unwrap().games.len()
    }

    pub fn notification_link_count(&self) -> usize {
        self.data.read().unwrap().game_notification_links.len()
    }

    pub fn bracket_seed_count(&self) -> usize {
        self.data.read().unwrap().bracket_seed_links.len()
    }

    pub fn referee_assignment_count(&self) -> usize {
        self.data.read().unwrap().referee_assignments.len()
    }

    // ==================== Internal helpers ====================

    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().unwrap().is_healthy {
            return Err(RepositoryError::ConnectionError(
                "Database is not healthy".to_string(),
            ));
        }
        Ok(())
    }

    fn store_game(data: &mut LocalData, mut game: Game) -> GameId {
        let id = match game.id {
            Some(id) => id,
            None => {
                let id = GameId(data.next_game_id);
                data.next_game_id += 1;
                game.id = Some(id);
                id
            }
        };
        // Upsert semantics: a row carrying a known id replaces the stored row.
        if let Some(existing) = data.games.iter_mut().find(|g| g.id == Some(id)) {
            *existing = game;
        } else {
            data.games.push(game);
        }
        id
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobRepository for LocalRepository {
    async fn get_job(&self, job_id: JobId) -> RepositoryResult<Option<Job>> {
        self.check_health()?;
        Ok(self.data.read().unwrap().jobs.get(&job_id).cloned())
    }

    async fn jobs_for_customer(&self, customer_id: CustomerId) -> RepositoryResult<Vec<Job>> {
        let data = self.data.read().unwrap();
        let mut jobs: Vec<Job> = data
            .jobs
            .values()
            .filter(|j| j.customer_id == customer_id)
            .cloned()
            .collect();
        jobs.sort_by_key(|j| j.id);
        Ok(jobs)
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().unwrap().is_healthy)
    }

    async fn fetch_games(&self, job_id: JobId) -> RepositoryResult<Vec<Game>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .games
            .iter()
            .filter(|g| g.job_id == job_id)
            .cloned()
            .collect())
    }

    async fn fetch_scheduled_games(&self, job_id: JobId) -> RepositoryResult<Vec<Game>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        let mut games: Vec<Game> = data
            .games
            .iter()
            .filter(|g| g.job_id == job_id && g.is_scheduled())
            .cloned()
            .collect();
        games.sort_by_key(|g| (g.starts_at, g.id));
        Ok(games)
    }

    async fn scheduled_game_count(&self, job_id: JobId) -> RepositoryResult<usize> {
        let data = self.data.read().unwrap();
        Ok(data
            .games
            .iter()
            .filter(|g| g.job_id == job_id && g.is_scheduled())
            .count())
    }

    async fn insert_games(&self, games: &[Game]) -> RepositoryResult<usize> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        for game in games {
            Self::store_game(&mut data, game.clone());
        }
        Ok(games.len())
    }

    async fn delete_job_schedule(&self, job_id: JobId) -> RepositoryResult<usize> {
        self.check_health()?;
        // One write-lock hold across the whole cascade: the transactional scope.
        let mut data = self.data.write().unwrap();
        let mut removed_games = 0;
        for step in SCHEDULE_DELETE_ORDER {
            match step {
                CascadeStep::GameNotificationLinks => {
                    data.game_notification_links.retain(|l| l.job_id != job_id);
                }
                CascadeStep::BracketSeedLinks => {
                    data.bracket_seed_links.retain(|l| l.job_id != job_id);
                }
                CascadeStep::RefereeAssignments => {
                    data.referee_assignments.retain(|a| a.job_id != job_id);
                }
                CascadeStep::ScheduleRows => {
                    let before = data.games.len();
                    data.games.retain(|g| g.job_id != job_id);
                    removed_games = before - data.games.len();
                }
            }
        }
        Ok(removed_games)
    }
}

#[async_trait]
impl TeamRepository for LocalRepository {
    async fn fetch_teams(&self, job_id: JobId) -> RepositoryResult<Vec<Team>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .teams
            .iter()
            .filter(|t| t.job_id == job_id)
            .cloned()
            .collect())
    }

    async fn fetch_clubs(&self) -> RepositoryResult<Vec<Club>> {
        let data = self.data.read().unwrap();
        let mut clubs: Vec<Club> = data.clubs.values().cloned().collect();
        clubs.sort_by_key(|c| c.id);
        Ok(clubs)
    }
}

#[async_trait]
impl FieldRepository for LocalRepository {
    async fn fetch_league_season_fields(
        &self,
        league_id: LeagueId,
        season: &str,
    ) -> RepositoryResult<Vec<Field>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .field_assignments
            .iter()
            .filter(|a| a.league_id == league_id && a.season == season)
            .filter_map(|a| data.fields.get(&a.field_id).cloned())
            .collect())
    }
}

//! Stat factory for creating test per-season stat entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stat rows with customizable counters.
///
/// Defaults to an all-zero row for the given season and member.
pub struct StatFactory<'a> {
    db: &'a DatabaseConnection,
    season_id: i32,
    member_id: String,
    tries: [i32; 6],
    played: i32,
    won: i32,
    current_streak: i32,
    max_streak: i32,
    points: i32,
}

impl<'a> StatFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, season_id: i32, member_id: impl Into<String>) -> Self {
        Self {
            db,
            season_id,
            member_id: member_id.into(),
            tries: [0; 6],
            played: 0,
            won: 0,
            current_streak: 0,
            max_streak: 0,
            points: 0,
        }
    }

    /// Sets the per-try win counters, index 0 for a first-try win.
    pub fn tries(mut self, tries: [i32; 6]) -> Self {
        self.tries = tries;
        self
    }

    /// Sets the played counter.
    pub fn played(mut self, played: i32) -> Self {
        self.played = played;
        self
    }

    /// Sets the won counter.
    pub fn won(mut self, won: i32) -> Self {
        self.won = won;
        self
    }

    /// Sets the current streak.
    pub fn current_streak(mut self, current_streak: i32) -> Self {
        self.current_streak = current_streak;
        self
    }

    /// Sets the best streak.
    pub fn max_streak(mut self, max_streak: i32) -> Self {
        self.max_streak = max_streak;
        self
    }

    /// Sets the season point total.
    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    /// Builds and inserts the stat entity into the database.
    pub async fn build(self) -> Result<entity::rankedle_stat::Model, DbErr> {
        entity::rankedle_stat::ActiveModel {
            id: ActiveValue::NotSet,
            season_id: ActiveValue::Set(self.season_id),
            member_id: ActiveValue::Set(self.member_id),
            try1: ActiveValue::Set(self.tries[0]),
            try2: ActiveValue::Set(self.tries[1]),
            try3: ActiveValue::Set(self.tries[2]),
            try4: ActiveValue::Set(self.tries[3]),
            try5: ActiveValue::Set(self.tries[4]),
            try6: ActiveValue::Set(self.tries[5]),
            played: ActiveValue::Set(self.played),
            won: ActiveValue::Set(self.won),
            current_streak: ActiveValue::Set(self.current_streak),
            max_streak: ActiveValue::Set(self.max_streak),
            points: ActiveValue::Set(self.points),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a zeroed stat row for the given season and member.
///
/// Shorthand for `StatFactory::new(db, season_id, member_id).build().await`.
pub async fn create_stat(
    db: &DatabaseConnection,
    season_id: i32,
    member_id: impl Into<String>,
) -> Result<entity::rankedle_stat::Model, DbErr> {
    StatFactory::new(db, season_id, member_id).build().await
}

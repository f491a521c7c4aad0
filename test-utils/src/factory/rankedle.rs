//! Rankedle factory for creating test daily puzzle entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test puzzles with customizable fields.
///
/// Defaults to a puzzle dated today so it is the current puzzle for the test
/// run. Use `.date(None)` for a generated-but-unpublished puzzle.
pub struct RankedleFactory<'a> {
    db: &'a DatabaseConnection,
    season_id: i32,
    map_id: i32,
    date: Option<chrono::NaiveDate>,
}

impl<'a> RankedleFactory<'a> {
    /// Creates a new RankedleFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `season_id` - Season this puzzle belongs to
    /// - `map_id` - Map this puzzle asks the player to guess
    pub fn new(db: &'a DatabaseConnection, season_id: i32, map_id: i32) -> Self {
        Self {
            db,
            season_id,
            map_id,
            date: Some(Utc::now().date_naive()),
        }
    }

    /// Sets the assigned date. `None` leaves the puzzle unpublished.
    pub fn date(mut self, date: Option<chrono::NaiveDate>) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the puzzle entity into the database.
    pub async fn build(self) -> Result<entity::rankedle::Model, DbErr> {
        entity::rankedle::ActiveModel {
            id: ActiveValue::NotSet,
            season_id: ActiveValue::Set(self.season_id),
            map_id: ActiveValue::Set(self.map_id),
            date: ActiveValue::Set(self.date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a puzzle dated today for the given season and map.
///
/// Shorthand for `RankedleFactory::new(db, season_id, map_id).build().await`.
pub async fn create_rankedle(
    db: &DatabaseConnection,
    season_id: i32,
    map_id: i32,
) -> Result<entity::rankedle::Model, DbErr> {
    RankedleFactory::new(db, season_id, map_id).build().await
}

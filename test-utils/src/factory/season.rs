//! Season factory for creating test season entities.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seasons with customizable fields.
///
/// Defaults to a season spanning 30 days either side of today, so it is
/// always "current" for the test run.
pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    date_start: chrono::NaiveDate,
    date_end: chrono::NaiveDate,
}

impl<'a> SeasonFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            date_start: today - Duration::days(30),
            date_end: today + Duration::days(30),
        }
    }

    /// Sets the season start date.
    pub fn date_start(mut self, date_start: chrono::NaiveDate) -> Self {
        self.date_start = date_start;
        self
    }

    /// Sets the season end date.
    pub fn date_end(mut self, date_end: chrono::NaiveDate) -> Self {
        self.date_end = date_end;
        self
    }

    /// Builds and inserts the season entity into the database.
    pub async fn build(self) -> Result<entity::rankedle_season::Model, DbErr> {
        entity::rankedle_season::ActiveModel {
            id: ActiveValue::NotSet,
            date_start: ActiveValue::Set(self.date_start),
            date_end: ActiveValue::Set(self.date_end),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a season with default values.
///
/// Shorthand for `SeasonFactory::new(db).build().await`.
pub async fn create_season(
    db: &DatabaseConnection,
) -> Result<entity::rankedle_season::Model, DbErr> {
    SeasonFactory::new(db).build().await
}

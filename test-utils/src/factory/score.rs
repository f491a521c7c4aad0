//! Score factory for creating test attempt entities.
//!
//! This module provides factory methods for creating attempt entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test attempts with customizable fields.
///
/// Defaults to a fresh in-progress attempt: zero skips, no details, no
/// outcome, hint unredeemed.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::score::ScoreFactory;
///
/// let score = ScoreFactory::new(&db, rankedle.id, "member_1")
///     .skips(5)
///     .details(serde_json::json!([
///         { "status": "skip", "text": "SKIP (6)", "date": 0 }
///     ]))
///     .build()
///     .await?;
/// ```
pub struct ScoreFactory<'a> {
    db: &'a DatabaseConnection,
    rankedle_id: i32,
    member_id: String,
    date_start: chrono::DateTime<Utc>,
    date_end: Option<chrono::DateTime<Utc>>,
    skips: i32,
    details: Option<serde_json::Value>,
    hint: bool,
    success: Option<bool>,
    message_id: Option<i32>,
}

impl<'a> ScoreFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        rankedle_id: i32,
        member_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            rankedle_id,
            member_id: member_id.into(),
            date_start: Utc::now(),
            date_end: None,
            skips: 0,
            details: None,
            hint: false,
            success: None,
            message_id: None,
        }
    }

    /// Sets the consumed skip count.
    pub fn skips(mut self, skips: i32) -> Self {
        self.skips = skips;
        self
    }

    /// Sets the recorded detail JSON.
    pub fn details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Sets the hint redemption flag.
    pub fn hint(mut self, hint: bool) -> Self {
        self.hint = hint;
        self
    }

    /// Sets the outcome.
    pub fn success(mut self, success: Option<bool>) -> Self {
        self.success = success;
        self
    }

    /// Sets the end timestamp.
    pub fn date_end(mut self, date_end: Option<chrono::DateTime<Utc>>) -> Self {
        self.date_end = date_end;
        self
    }

    /// Sets the flavor message id.
    pub fn message_id(mut self, message_id: Option<i32>) -> Self {
        self.message_id = message_id;
        self
    }

    /// Builds and inserts the attempt entity into the database.
    pub async fn build(self) -> Result<entity::rankedle_score::Model, DbErr> {
        entity::rankedle_score::ActiveModel {
            id: ActiveValue::NotSet,
            rankedle_id: ActiveValue::Set(self.rankedle_id),
            member_id: ActiveValue::Set(self.member_id),
            date_start: ActiveValue::Set(self.date_start),
            date_end: ActiveValue::Set(self.date_end),
            skips: ActiveValue::Set(self.skips),
            details: ActiveValue::Set(self.details),
            hint: ActiveValue::Set(self.hint),
            success: ActiveValue::Set(self.success),
            message_id: ActiveValue::Set(self.message_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a fresh in-progress attempt for the given puzzle and member.
///
/// Shorthand for `ScoreFactory::new(db, rankedle_id, member_id).build().await`.
pub async fn create_score(
    db: &DatabaseConnection,
    rankedle_id: i32,
    member_id: impl Into<String>,
) -> Result<entity::rankedle_score::Model, DbErr> {
    ScoreFactory::new(db, rankedle_id, member_id).build().await
}

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::rankedle::GuessDetail;

/// Parameters for creating an attempt row on a player's first action.
pub struct CreateScoreParams {
    pub rankedle_id: i32,
    pub member_id: String,
    pub skips: i32,
    pub details: Vec<GuessDetail>,
    pub success: Option<bool>,
    pub message_id: Option<i32>,
}

pub struct ScoreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        rankedle_id: i32,
        member_id: &str,
    ) -> Result<Option<entity::rankedle_score::Model>, DbErr> {
        entity::prelude::RankedleScore::find()
            .filter(entity::rankedle_score::Column::RankedleId.eq(rankedle_id))
            .filter(entity::rankedle_score::Column::MemberId.eq(member_id))
            .one(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::rankedle_score::Model>, DbErr> {
        entity::prelude::RankedleScore::find_by_id(id).one(self.db).await
    }

    pub async fn all_for_rankedle(
        &self,
        rankedle_id: i32,
    ) -> Result<Vec<entity::rankedle_score::Model>, DbErr> {
        entity::prelude::RankedleScore::find()
            .filter(entity::rankedle_score::Column::RankedleId.eq(rankedle_id))
            .all(self.db)
            .await
    }

    /// Attempts with no outcome yet, used to force-finalize the previous
    /// day's puzzle.
    pub async fn unfinished_for_rankedle(
        &self,
        rankedle_id: i32,
    ) -> Result<Vec<entity::rankedle_score::Model>, DbErr> {
        entity::prelude::RankedleScore::find()
            .filter(entity::rankedle_score::Column::RankedleId.eq(rankedle_id))
            .filter(entity::rankedle_score::Column::Success.is_null())
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: CreateScoreParams,
    ) -> Result<entity::rankedle_score::Model, DbErr> {
        let details = if params.details.is_empty() {
            None
        } else {
            Some(serde_json::to_value(&params.details).map_err(|e| DbErr::Custom(e.to_string()))?)
        };

        entity::prelude::RankedleScore::insert(entity::rankedle_score::ActiveModel {
            rankedle_id: ActiveValue::Set(params.rankedle_id),
            member_id: ActiveValue::Set(params.member_id),
            date_start: ActiveValue::Set(Utc::now()),
            date_end: ActiveValue::Set(None),
            skips: ActiveValue::Set(params.skips),
            details: ActiveValue::Set(details),
            hint: ActiveValue::Set(false),
            success: ActiveValue::Set(params.success),
            message_id: ActiveValue::Set(params.message_id),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Records one more reveal step on an in-progress attempt.
    ///
    /// The update is conditional on the outcome still being unset, so two
    /// racing requests cannot both advance the same attempt. Returns whether
    /// the row was actually updated.
    pub async fn advance_step(
        &self,
        id: i32,
        skips: i32,
        details: &[GuessDetail],
    ) -> Result<bool, DbErr> {
        let details =
            serde_json::to_value(details).map_err(|e| DbErr::Custom(e.to_string()))?;

        let result = entity::prelude::RankedleScore::update_many()
            .col_expr(entity::rankedle_score::Column::Skips, Expr::value(skips))
            .col_expr(
                entity::rankedle_score::Column::Details,
                Expr::value(Some(details)),
            )
            .filter(entity::rankedle_score::Column::Id.eq(id))
            .filter(entity::rankedle_score::Column::Success.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Terminal transition: sets the outcome and flavor message.
    ///
    /// Compare-and-swap on the null outcome; exactly one of any number of
    /// racing calls observes `true` and may fire the terminal side effects.
    pub async fn close(
        &self,
        id: i32,
        success: bool,
        message_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::RankedleScore::update_many()
            .col_expr(
                entity::rankedle_score::Column::Success,
                Expr::value(Some(success)),
            )
            .col_expr(
                entity::rankedle_score::Column::MessageId,
                Expr::value(message_id),
            )
            .filter(entity::rankedle_score::Column::Id.eq(id))
            .filter(entity::rankedle_score::Column::Success.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Sets the end timestamp if it is still unset.
    ///
    /// This is the stat-aggregation idempotency gate: only the caller that
    /// observes `true` folds the attempt into season stats.
    pub async fn mark_ended(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RankedleScore::update_many()
            .col_expr(
                entity::rankedle_score::Column::DateEnd,
                Expr::value(Some(Utc::now())),
            )
            .filter(entity::rankedle_score::Column::Id.eq(id))
            .filter(entity::rankedle_score::Column::DateEnd.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Sets the hint flag. Idempotent; repeated redemptions are no-ops.
    pub async fn redeem_hint(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::RankedleScore::update_many()
            .col_expr(entity::rankedle_score::Column::Hint, Expr::value(true))
            .filter(entity::rankedle_score::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

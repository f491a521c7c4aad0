use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct RankedleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankedleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::rankedle::Model>, DbErr> {
        entity::prelude::Rankedle::find_by_id(id).one(self.db).await
    }

    /// The puzzle assigned to the given calendar date, if any.
    pub async fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<entity::rankedle::Model>, DbErr> {
        entity::prelude::Rankedle::find()
            .filter(entity::rankedle::Column::Date.eq(date))
            .order_by_desc(entity::rankedle::Column::Id)
            .one(self.db)
            .await
    }

    /// Today's puzzle; `None` when no puzzle has been assigned yet, which
    /// every caller must treat as a valid state.
    pub async fn current(&self) -> Result<Option<entity::rankedle::Model>, DbErr> {
        self.find_by_date(Utc::now().date_naive()).await
    }

    /// The most recently created puzzle regardless of date assignment.
    pub async fn last(&self) -> Result<Option<entity::rankedle::Model>, DbErr> {
        entity::prelude::Rankedle::find()
            .order_by_desc(entity::rankedle::Column::Id)
            .one(self.db)
            .await
    }

    /// All puzzles, newest first.
    pub async fn list(&self) -> Result<Vec<entity::rankedle::Model>, DbErr> {
        entity::prelude::Rankedle::find()
            .order_by_desc(entity::rankedle::Column::Id)
            .all(self.db)
            .await
    }

    /// Creates a new, undated puzzle row. This is the final write of the
    /// asset pipeline.
    pub async fn create(
        &self,
        map_id: i32,
        season_id: i32,
    ) -> Result<entity::rankedle::Model, DbErr> {
        entity::prelude::Rankedle::insert(entity::rankedle::ActiveModel {
            map_id: ActiveValue::Set(map_id),
            season_id: ActiveValue::Set(season_id),
            date: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Assigns `date` to the oldest undated puzzle, making it the live
    /// puzzle for that day. Returns `None` when no undated puzzle exists.
    pub async fn assign_date_to_oldest_undated(
        &self,
        date: NaiveDate,
    ) -> Result<Option<entity::rankedle::Model>, DbErr> {
        let Some(rankedle) = entity::prelude::Rankedle::find()
            .filter(entity::rankedle::Column::Date.is_null())
            .order_by_asc(entity::rankedle::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::rankedle::ActiveModel = rankedle.into();
        active.date = ActiveValue::Set(Some(date));
        Ok(Some(active.update(self.db).await?))
    }

    /// Reverse-chronological page of dated puzzles up to and including
    /// `max_date`, joined with their map metadata.
    ///
    /// Callers control whether today's puzzle may appear by choosing
    /// `max_date` (today once the player's attempt is terminal, yesterday
    /// otherwise).
    #[allow(clippy::type_complexity)]
    pub async fn history_page(
        &self,
        max_date: NaiveDate,
        offset: u64,
        limit: u64,
    ) -> Result<
        (
            Vec<(entity::rankedle::Model, Option<entity::rankedle_map::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let filter = Condition::all()
            .add(entity::rankedle::Column::Date.is_not_null())
            .add(entity::rankedle::Column::Date.lte(max_date));

        let total = entity::prelude::Rankedle::find()
            .filter(filter.clone())
            .count(self.db)
            .await?;

        let rows = entity::prelude::Rankedle::find()
            .find_also_related(entity::prelude::RankedleMap)
            .filter(filter)
            .order_by_desc(entity::rankedle::Column::Date)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok((rows, total))
    }
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct StatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        season_id: i32,
        member_id: &str,
    ) -> Result<Option<entity::rankedle_stat::Model>, DbErr> {
        entity::prelude::RankedleStat::find()
            .filter(entity::rankedle_stat::Column::SeasonId.eq(season_id))
            .filter(entity::rankedle_stat::Column::MemberId.eq(member_id))
            .one(self.db)
            .await
    }

    /// Loads the (season, player) row, creating a zeroed one on first use.
    pub async fn get_or_create(
        &self,
        season_id: i32,
        member_id: &str,
    ) -> Result<entity::rankedle_stat::Model, DbErr> {
        if let Some(stat) = self.find(season_id, member_id).await? {
            return Ok(stat);
        }

        entity::prelude::RankedleStat::insert(entity::rankedle_stat::ActiveModel {
            season_id: ActiveValue::Set(season_id),
            member_id: ActiveValue::Set(member_id.to_string()),
            try1: ActiveValue::Set(0),
            try2: ActiveValue::Set(0),
            try3: ActiveValue::Set(0),
            try4: ActiveValue::Set(0),
            try5: ActiveValue::Set(0),
            try6: ActiveValue::Set(0),
            played: ActiveValue::Set(0),
            won: ActiveValue::Set(0),
            current_streak: ActiveValue::Set(0),
            max_streak: ActiveValue::Set(0),
            points: ActiveValue::Set(0),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Writes back every counter of a stat row.
    pub async fn apply(
        &self,
        stat: entity::rankedle_stat::Model,
    ) -> Result<entity::rankedle_stat::Model, DbErr> {
        entity::rankedle_stat::ActiveModel {
            id: ActiveValue::Unchanged(stat.id),
            season_id: ActiveValue::Unchanged(stat.season_id),
            member_id: ActiveValue::Unchanged(stat.member_id.clone()),
            try1: ActiveValue::Set(stat.try1),
            try2: ActiveValue::Set(stat.try2),
            try3: ActiveValue::Set(stat.try3),
            try4: ActiveValue::Set(stat.try4),
            try5: ActiveValue::Set(stat.try5),
            try6: ActiveValue::Set(stat.try6),
            played: ActiveValue::Set(stat.played),
            won: ActiveValue::Set(stat.won),
            current_streak: ActiveValue::Set(stat.current_streak),
            max_streak: ActiveValue::Set(stat.max_streak),
            points: ActiveValue::Set(stat.points),
        }
        .update(self.db)
        .await
    }

    /// All stat rows for a season, highest points first.
    pub async fn all_for_season_by_points(
        &self,
        season_id: i32,
    ) -> Result<Vec<entity::rankedle_stat::Model>, DbErr> {
        entity::prelude::RankedleStat::find()
            .filter(entity::rankedle_stat::Column::SeasonId.eq(season_id))
            .order_by_desc(entity::rankedle_stat::Column::Points)
            .all(self.db)
            .await
    }
}

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct SeasonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The latest season. Season creation is managed externally; the game
    /// only ever attaches puzzles and stats to the most recent row.
    pub async fn current(&self) -> Result<Option<entity::rankedle_season::Model>, DbErr> {
        entity::prelude::RankedleSeason::find()
            .order_by_desc(entity::rankedle_season::Column::Id)
            .one(self.db)
            .await
    }
}

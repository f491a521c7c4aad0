use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::rankedle_message::Model>, DbErr> {
        entity::prelude::RankedleMessage::find_by_id(id).one(self.db).await
    }

    /// A random flavor message of the given kind (`first_try`, `won`,
    /// `lose`), or `None` when the pool is empty.
    pub async fn random_by_kind(
        &self,
        kind: &str,
    ) -> Result<Option<entity::rankedle_message::Model>, DbErr> {
        entity::prelude::RankedleMessage::find()
            .filter(entity::rankedle_message::Column::Kind.eq(kind))
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .one(self.db)
            .await
    }
}

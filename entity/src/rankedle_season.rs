//! Scoring season. Creation policy is external; the application only ever
//! resolves the latest row.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rankedle_season")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_start: Date,
    pub date_end: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

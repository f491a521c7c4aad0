//! Cumulative per (season, player) performance counters.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rankedle_stat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub season_id: i32,
    pub member_id: String,
    pub try1: i32,
    pub try2: i32,
    pub try3: i32,
    pub try4: i32,
    pub try5: i32,
    pub try6: i32,
    pub played: i32,
    pub won: i32,
    pub current_streak: i32,
    pub max_streak: i32,
    pub points: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rankedle_season::Entity",
        from = "Column::SeasonId",
        to = "super::rankedle_season::Column::Id"
    )]
    Season,
}

impl ActiveModelBehavior for ActiveModel {}

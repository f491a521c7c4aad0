//! One day's puzzle, bound to a single map and season.
//!
//! The `date` column is assigned lazily: a row is created by the asset
//! pipeline without a date, then receives one when the puzzle goes live.
//! A unique index on `date` guarantees at most one puzzle per day.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rankedle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub season_id: i32,
    pub map_id: i32,
    #[sea_orm(unique)]
    pub date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rankedle_map::Entity",
        from = "Column::MapId",
        to = "super::rankedle_map::Column::Id"
    )]
    Map,
    #[sea_orm(
        belongs_to = "super::rankedle_season::Entity",
        from = "Column::SeasonId",
        to = "super::rankedle_season::Column::Id"
    )]
    Season,
    #[sea_orm(has_many = "super::rankedle_score::Entity")]
    Scores,
}

impl Related<super::rankedle_map::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Map.def()
    }
}

impl Related<super::rankedle_score::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Per (puzzle, player) attempt state.
//!
//! `success` is the attempt outcome: `None` while in progress, `Some(true)`
//! won, `Some(false)` lost. `date_end` doubles as the stat-aggregation
//! marker and is only ever set through a conditional update. `details` holds
//! the ordered JSON list of reveal-step records.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rankedle_score")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rankedle_id: i32,
    pub member_id: String,
    pub date_start: DateTimeUtc,
    pub date_end: Option<DateTimeUtc>,
    pub skips: i32,
    pub details: Option<Json>,
    pub hint: bool,
    pub success: Option<bool>,
    pub message_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rankedle::Entity",
        from = "Column::RankedleId",
        to = "super::rankedle::Column::Id"
    )]
    Rankedle,
    #[sea_orm(
        belongs_to = "super::rankedle_message::Entity",
        from = "Column::MessageId",
        to = "super::rankedle_message::Column::Id"
    )]
    Message,
}

impl Related<super::rankedle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rankedle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Candidate song record mirrored from the external map catalog.
//!
//! Rows are immutable once imported. The catalog's versioned payload is
//! flattened at the import boundary: `cover_url` and `download_url` always
//! come from the last (authoritative) version.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rankedle_map")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// External catalog identifier.
    #[sea_orm(unique)]
    pub map_key: String,
    pub song_name: String,
    pub song_sub_name: String,
    pub song_author_name: String,
    pub level_author_name: String,
    /// Song duration in seconds, as reported by the catalog.
    pub duration: i32,
    pub cover_url: String,
    pub download_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rankedle::Entity")]
    Rankedles,
}

impl Related<super::rankedle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rankedles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

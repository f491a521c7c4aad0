use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Order,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::catalog::CatalogMap;

/// Maximum number of autocomplete suggestions returned by a search.
pub const SEARCH_LIMIT: u64 = 5;

pub struct MapRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MapRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::rankedle_map::Model>, DbErr> {
        entity::prelude::RankedleMap::find_by_id(id).one(self.db).await
    }

    /// Picks one map uniformly at random among maps never used by any
    /// puzzle, optionally restricted to a single id for manual generation.
    ///
    /// Exclusion is a left-join-is-null check: used maps stay in the table
    /// but are permanently out of the candidate pool.
    pub async fn random_unplayed(
        &self,
        map_id: Option<i32>,
    ) -> Result<Option<entity::rankedle_map::Model>, DbErr> {
        let mut query = entity::prelude::RankedleMap::find()
            .left_join(entity::prelude::Rankedle)
            .filter(entity::rankedle::Column::Id.is_null());

        if let Some(id) = map_id {
            query = query.filter(entity::rankedle_map::Column::Id.eq(id));
        }

        query
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .one(self.db)
            .await
    }

    /// Token-wise search across author, song and subtitle fields.
    ///
    /// Each whitespace-separated term must match at least one of the three
    /// fields (AND of ORs). Maps in `excluded_ids` are filtered out so a
    /// player is never offered a map they already guessed wrong today.
    pub async fn search(
        &self,
        query: &str,
        excluded_ids: &[i32],
    ) -> Result<Vec<entity::rankedle_map::Model>, DbErr> {
        let mut condition = Condition::all();
        for term in query.split_whitespace() {
            let pattern = format!("%{term}%");
            condition = condition.add(
                Condition::any()
                    .add(entity::rankedle_map::Column::SongAuthorName.like(&pattern))
                    .add(entity::rankedle_map::Column::SongName.like(&pattern))
                    .add(entity::rankedle_map::Column::SongSubName.like(&pattern)),
            );
        }

        let mut find = entity::prelude::RankedleMap::find().filter(condition);
        if !excluded_ids.is_empty() {
            find = find.filter(
                entity::rankedle_map::Column::Id.is_not_in(excluded_ids.iter().copied()),
            );
        }

        find.limit(SEARCH_LIMIT).all(self.db).await
    }

    /// Imports a catalog payload, flattening the last (authoritative)
    /// version's URLs into the row. Re-importing the same catalog id
    /// refreshes the metadata instead of duplicating the map.
    pub async fn upsert_from_catalog(
        &self,
        map: &CatalogMap,
    ) -> Result<entity::rankedle_map::Model, DbErr> {
        let version = map.current_version().ok_or_else(|| {
            DbErr::Custom(format!("catalog map {} has no versions", map.id))
        })?;

        entity::prelude::RankedleMap::insert(entity::rankedle_map::ActiveModel {
            map_key: ActiveValue::Set(map.id.clone()),
            song_name: ActiveValue::Set(map.metadata.song_name.clone()),
            song_sub_name: ActiveValue::Set(map.metadata.song_sub_name.clone()),
            song_author_name: ActiveValue::Set(map.metadata.song_author_name.clone()),
            level_author_name: ActiveValue::Set(map.metadata.level_author_name.clone()),
            duration: ActiveValue::Set(map.metadata.duration),
            cover_url: ActiveValue::Set(version.cover_url.clone()),
            download_url: ActiveValue::Set(version.download_url.clone()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::rankedle_map::Column::MapKey)
                .update_columns([
                    entity::rankedle_map::Column::SongName,
                    entity::rankedle_map::Column::SongSubName,
                    entity::rankedle_map::Column::SongAuthorName,
                    entity::rankedle_map::Column::LevelAuthorName,
                    entity::rankedle_map::Column::Duration,
                    entity::rankedle_map::Column::CoverUrl,
                    entity::rankedle_map::Column::DownloadUrl,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}

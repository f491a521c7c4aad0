//! Map factory for creating test map entities.
//!
//! This module provides factory methods for creating map entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test maps with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::map::MapFactory;
///
/// let map = MapFactory::new(&db)
///     .song_name("Custom Song")
///     .song_author_name("Custom Artist")
///     .build()
///     .await?;
/// ```
pub struct MapFactory<'a> {
    db: &'a DatabaseConnection,
    map_key: String,
    song_name: String,
    song_sub_name: String,
    song_author_name: String,
    level_author_name: String,
    duration: i32,
    cover_url: String,
    download_url: String,
}

impl<'a> MapFactory<'a> {
    /// Creates a new MapFactory with default values.
    ///
    /// Defaults:
    /// - map_key: `"key{id}"` where id is auto-incremented
    /// - song_name: `"Song {id}"`
    /// - song_sub_name: empty
    /// - song_author_name: `"Artist {id}"`
    /// - level_author_name: `"Mapper {id}"`
    /// - duration: 180 seconds
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            map_key: format!("key{id}"),
            song_name: format!("Song {id}"),
            song_sub_name: String::new(),
            song_author_name: format!("Artist {id}"),
            level_author_name: format!("Mapper {id}"),
            duration: 180,
            cover_url: format!("https://cdn.example.test/{id}/cover.jpg"),
            download_url: format!("https://cdn.example.test/{id}/archive.zip"),
        }
    }

    /// Sets the song title.
    pub fn song_name(mut self, song_name: impl Into<String>) -> Self {
        self.song_name = song_name.into();
        self
    }

    /// Sets the song subtitle.
    pub fn song_sub_name(mut self, song_sub_name: impl Into<String>) -> Self {
        self.song_sub_name = song_sub_name.into();
        self
    }

    /// Sets the song artist.
    pub fn song_author_name(mut self, song_author_name: impl Into<String>) -> Self {
        self.song_author_name = song_author_name.into();
        self
    }

    /// Sets the mapper name.
    pub fn level_author_name(mut self, level_author_name: impl Into<String>) -> Self {
        self.level_author_name = level_author_name.into();
        self
    }

    /// Sets the cover URL.
    pub fn cover_url(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = cover_url.into();
        self
    }

    /// Sets the download URL.
    pub fn download_url(mut self, download_url: impl Into<String>) -> Self {
        self.download_url = download_url.into();
        self
    }

    /// Builds and inserts the map entity into the database.
    pub async fn build(self) -> Result<entity::rankedle_map::Model, DbErr> {
        entity::rankedle_map::ActiveModel {
            id: ActiveValue::NotSet,
            map_key: ActiveValue::Set(self.map_key),
            song_name: ActiveValue::Set(self.song_name),
            song_sub_name: ActiveValue::Set(self.song_sub_name),
            song_author_name: ActiveValue::Set(self.song_author_name),
            level_author_name: ActiveValue::Set(self.level_author_name),
            duration: ActiveValue::Set(self.duration),
            cover_url: ActiveValue::Set(self.cover_url),
            download_url: ActiveValue::Set(self.download_url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a map with default values.
///
/// Shorthand for `MapFactory::new(db).build().await`.
pub async fn create_map(db: &DatabaseConnection) -> Result<entity::rankedle_map::Model, DbErr> {
    MapFactory::new(db).build().await
}

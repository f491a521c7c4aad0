//! Payload types for the external map catalog.
//!
//! The catalog ships a versioned JSON document per map; only the last
//! version's URLs are authoritative. These types exist at the import
//! boundary: the database stores a flattened row (see
//! `entity::rankedle_map`), never the raw payload.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogMap {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub qualified: bool,
    #[serde(default)]
    pub ranked: bool,
    pub versions: Vec<CatalogMapVersion>,
    pub metadata: CatalogMapMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogMapVersion {
    #[serde(rename = "coverURL")]
    pub cover_url: String,
    #[serde(rename = "downloadURL")]
    pub download_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMapMetadata {
    pub duration: i32,
    pub level_author_name: String,
    pub song_author_name: String,
    pub song_name: String,
    #[serde(default)]
    pub song_sub_name: String,
}

impl CatalogMap {
    /// The authoritative version: the last entry of the versions list.
    pub fn current_version(&self) -> Option<&CatalogMapVersion> {
        self.versions.last()
    }
}

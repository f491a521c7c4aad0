use super::*;

fn catalog_map(key: &str, song_name: &str) -> CatalogMap {
    CatalogMap {
        id: key.to_string(),
        name: song_name.to_string(),
        qualified: false,
        ranked: true,
        versions: vec![
            CatalogMapVersion {
                cover_url: "https://cdn.example/old.jpg".to_string(),
                download_url: "https://cdn.example/old.zip".to_string(),
            },
            CatalogMapVersion {
                cover_url: "https://cdn.example/cover.jpg".to_string(),
                download_url: "https://cdn.example/map.zip".to_string(),
            },
        ],
        metadata: CatalogMapMetadata {
            duration: 184,
            level_author_name: "Mapper".to_string(),
            song_author_name: "Artist".to_string(),
            song_name: song_name.to_string(),
            song_sub_name: String::new(),
        },
    }
}

/// Tests importing a new catalog map.
///
/// Expected: a row flattened from the last catalog version
#[tokio::test]
async fn inserts_new_map_from_last_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MapRepository::new(db);
    let map = repo.upsert_from_catalog(&catalog_map("2a1f3", "Song")).await?;

    assert_eq!(map.map_key, "2a1f3");
    assert_eq!(map.song_name, "Song");
    assert_eq!(map.download_url, "https://cdn.example/map.zip");
    assert_eq!(map.cover_url, "https://cdn.example/cover.jpg");

    Ok(())
}

/// Tests re-importing the same catalog id.
///
/// Expected: metadata refreshed in place, no duplicate row
#[tokio::test]
async fn reimport_refreshes_without_duplicating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MapRepository::new(db);
    let first = repo.upsert_from_catalog(&catalog_map("2a1f3", "Song")).await?;
    let second = repo
        .upsert_from_catalog(&catalog_map("2a1f3", "Song (Remaster)"))
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.song_name, "Song (Remaster)");

    let count = entity::prelude::RankedleMap::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests a catalog payload with no versions.
///
/// Expected: Err, nothing inserted
#[tokio::test]
async fn rejects_map_without_versions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut payload = catalog_map("abc", "Song");
    payload.versions.clear();

    let repo = MapRepository::new(db);
    assert!(repo.upsert_from_catalog(&payload).await.is_err());

    let count = entity::prelude::RankedleMap::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

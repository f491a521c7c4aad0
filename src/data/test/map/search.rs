use super::*;
use test_utils::factory::map::MapFactory;

/// Tests that a single term can match any of artist, title or subtitle.
///
/// Expected: Ok with the matching map regardless of which field matched
#[tokio::test]
async fn matches_any_searchable_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_artist = MapFactory::new(db).song_author_name("Camellia").build().await?;
    let by_title = MapFactory::new(db).song_name("Camellia Remix").build().await?;
    let _unrelated = MapFactory::new(db)
        .song_name("Other")
        .song_author_name("Other")
        .build()
        .await?;

    let repo = MapRepository::new(db);
    let results = repo.search("camel", &[]).await?;

    let ids: Vec<i32> = results.iter().map(|m| m.id).collect();
    assert!(ids.contains(&by_artist.id));
    assert!(ids.contains(&by_title.id));
    assert_eq!(ids.len(), 2);

    Ok(())
}

/// Tests that every whitespace-separated term must match somewhere.
///
/// Expected: only the map matching both terms is returned
#[tokio::test]
async fn requires_all_terms_to_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let both = MapFactory::new(db)
        .song_author_name("Camellia")
        .song_name("Ghost")
        .build()
        .await?;
    let _only_artist = MapFactory::new(db)
        .song_author_name("Camellia")
        .song_name("Light")
        .build()
        .await?;

    let repo = MapRepository::new(db);
    let results = repo.search("camellia ghost", &[]).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, both.id);

    Ok(())
}

/// Tests that excluded ids are filtered from the suggestions.
///
/// Expected: the excluded map never appears in results
#[tokio::test]
async fn filters_excluded_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let excluded = MapFactory::new(db).song_name("Shared Title").build().await?;
    let kept = MapFactory::new(db).song_name("Shared Title Two").build().await?;

    let repo = MapRepository::new(db);
    let results = repo.search("shared", &[excluded.id]).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, kept.id);

    Ok(())
}

/// Tests that results are capped at the suggestion limit.
///
/// Expected: exactly SEARCH_LIMIT rows for a broader match set
#[tokio::test]
async fn caps_results_at_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..(SEARCH_LIMIT + 2) {
        MapFactory::new(db)
            .song_name(format!("Popular Tune {i}"))
            .build()
            .await?;
    }

    let repo = MapRepository::new(db);
    let results = repo.search("popular", &[]).await?;

    assert_eq!(results.len() as u64, SEARCH_LIMIT);

    Ok(())
}

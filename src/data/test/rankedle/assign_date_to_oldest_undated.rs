use super::*;

/// Tests that the oldest undated puzzle receives the date.
///
/// Expected: Ok(Some(oldest)) with the date applied
#[tokio::test]
async fn dates_the_oldest_undated_puzzle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let map1 = factory::create_map(db).await?;
    let map2 = factory::create_map(db).await?;

    let oldest = RankedleFactory::new(db, season.id, map1.id)
        .date(None)
        .build()
        .await?;
    let newer = RankedleFactory::new(db, season.id, map2.id)
        .date(None)
        .build()
        .await?;

    let today = Utc::now().date_naive();
    let repo = RankedleRepository::new(db);
    let published = repo.assign_date_to_oldest_undated(today).await?;

    let published = published.unwrap();
    assert_eq!(published.id, oldest.id);
    assert_eq!(published.date, Some(today));

    let untouched = repo.find_by_id(newer.id).await?.unwrap();
    assert!(untouched.date.is_none());

    Ok(())
}

/// Tests the empty backlog case.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_undated_puzzles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_season, _map, _dated) = factory::helpers::create_rankedle_with_dependencies(db).await?;

    let repo = RankedleRepository::new(db);
    let published = repo
        .assign_date_to_oldest_undated(Utc::now().date_naive())
        .await?;

    assert!(published.is_none());

    Ok(())
}

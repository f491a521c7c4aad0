use super::*;

/// Tests resolving the puzzle dated today.
///
/// Expected: Ok(Some(rankedle)) for today's row only
#[tokio::test]
async fn returns_puzzle_dated_today() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let yesterday_map = factory::create_map(db).await?;
    let today_map = factory::create_map(db).await?;

    let yesterday = Utc::now().date_naive() - Duration::days(1);
    RankedleFactory::new(db, season.id, yesterday_map.id)
        .date(Some(yesterday))
        .build()
        .await?;
    let today = factory::create_rankedle(db, season.id, today_map.id).await?;

    let repo = RankedleRepository::new(db);
    let current = repo.current().await?;

    assert_eq!(current.map(|r| r.id), Some(today.id));

    Ok(())
}

/// Tests that an undated puzzle is never the current one.
///
/// Expected: Ok(None)
#[tokio::test]
async fn undated_puzzle_is_not_current() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let map = factory::create_map(db).await?;
    RankedleFactory::new(db, season.id, map.id)
        .date(None)
        .build()
        .await?;

    let repo = RankedleRepository::new(db);
    assert!(repo.current().await?.is_none());

    Ok(())
}

use super::*;

/// Tests that rows come back highest points first, scoped to the season.
#[tokio::test]
async fn orders_by_points_within_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let other_season = factory::create_season(db).await?;

    StatFactory::new(db, season.id, "low").points(3).build().await?;
    StatFactory::new(db, season.id, "high").points(12).build().await?;
    StatFactory::new(db, other_season.id, "elsewhere")
        .points(99)
        .build()
        .await?;

    let repo = StatRepository::new(db);
    let rows = repo.all_for_season_by_points(season.id).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].member_id, "high");
    assert_eq!(rows[1].member_id, "low");

    Ok(())
}

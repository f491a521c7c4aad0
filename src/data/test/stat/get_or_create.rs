use super::*;

/// Tests lazy creation of a zeroed stat row.
///
/// Expected: a fresh row on first call, the same row afterwards
#[tokio::test]
async fn creates_zeroed_row_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;

    let repo = StatRepository::new(db);
    let created = repo.get_or_create(season.id, "member_1").await?;
    assert_eq!(created.played, 0);
    assert_eq!(created.points, 0);

    let again = repo.get_or_create(season.id, "member_1").await?;
    assert_eq!(again.id, created.id);

    Ok(())
}

/// Tests that counters written through `apply` survive a reload.
#[tokio::test]
async fn apply_persists_every_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let repo = StatRepository::new(db);
    let mut stat = repo.get_or_create(season.id, "member_1").await?;

    stat.try2 = 1;
    stat.played = 3;
    stat.won = 1;
    stat.current_streak = 1;
    stat.max_streak = 2;
    stat.points = 6;
    repo.apply(stat).await?;

    let reloaded = repo.find(season.id, "member_1").await?.unwrap();
    assert_eq!(reloaded.try2, 1);
    assert_eq!(reloaded.played, 3);
    assert_eq!(reloaded.max_streak, 2);
    assert_eq!(reloaded.points, 6);

    Ok(())
}

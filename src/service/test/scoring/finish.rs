use super::*;
use chrono::Utc;

/// Tests the rollover sweep over the latest puzzle's open attempts.
///
/// Attempts that consumed at least one step are forfeited as losses;
/// untouched attempts stay open but still count as played; attempts already
/// terminal are left alone.
#[tokio::test]
async fn settles_open_attempts_before_rollover() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (season, _map, rankedle) = factory::helpers::create_rankedle_with_dependencies(db).await?;

    let in_progress = ScoreFactory::new(db, rankedle.id, "started")
        .skips(3)
        .build()
        .await?;
    let untouched = ScoreFactory::new(db, rankedle.id, "untouched").build().await?;
    let already_won = ScoreFactory::new(db, rankedle.id, "winner")
        .skips(1)
        .success(Some(true))
        .date_end(Some(Utc::now()))
        .build()
        .await?;

    StatService::new(db).finish().await?;

    let score_repo = ScoreRepository::new(db);
    let stat_repo = StatRepository::new(db);

    let forfeited = score_repo.find_by_id(in_progress.id).await?.unwrap();
    assert_eq!(forfeited.success, Some(false));
    assert!(forfeited.date_end.is_some());
    let stat = stat_repo.find(season.id, "started").await?.unwrap();
    assert_eq!(stat.played, 1);
    assert_eq!(stat.current_streak, 0);

    let untouched = score_repo.find_by_id(untouched.id).await?.unwrap();
    assert!(untouched.success.is_none());
    assert!(untouched.date_end.is_some());
    let stat = stat_repo.find(season.id, "untouched").await?.unwrap();
    assert_eq!(stat.played, 1);
    assert_eq!(stat.won, 0);

    // The terminal attempt was already folded; its stats stay untouched.
    let winner = score_repo.find_by_id(already_won.id).await?.unwrap();
    assert_eq!(winner.success, Some(true));
    assert!(stat_repo.find(season.id, "winner").await?.is_none());

    Ok(())
}

/// Tests that running the sweep twice changes nothing.
#[tokio::test]
async fn finish_twice_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (season, _map, rankedle) = factory::helpers::create_rankedle_with_dependencies(db).await?;
    ScoreFactory::new(db, rankedle.id, "started").skips(2).build().await?;

    let service = StatService::new(db);
    service.finish().await?;
    service.finish().await?;

    let stat = StatRepository::new(db)
        .find(season.id, "started")
        .await?
        .unwrap();
    assert_eq!(stat.played, 1);

    Ok(())
}

/// Tests the sweep with no puzzle at all.
#[tokio::test]
async fn finish_without_puzzle_is_ok() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    StatService::new(db).finish().await?;

    Ok(())
}

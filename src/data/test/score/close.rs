use super::*;

/// Tests the terminal transition on an open attempt.
///
/// Expected: Ok(true), outcome and message persisted
#[tokio::test]
async fn closes_open_attempt() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_season, _map, rankedle) = factory::helpers::create_rankedle_with_dependencies(db).await?;
    let score = factory::create_score(db, rankedle.id, "member_1").await?;

    let repo = ScoreRepository::new(db);
    let closed = repo.close(score.id, true, Some(7)).await?;
    assert!(closed);

    let reloaded = repo.find_by_id(score.id).await?.unwrap();
    assert_eq!(reloaded.success, Some(true));
    assert_eq!(reloaded.message_id, Some(7));

    Ok(())
}

/// Tests that exactly one of two close calls wins.
///
/// Expected: first Ok(true), second Ok(false) keeping the first outcome
#[tokio::test]
async fn second_close_loses_the_race() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_season, _map, rankedle) = factory::helpers::create_rankedle_with_dependencies(db).await?;
    let score = factory::create_score(db, rankedle.id, "member_1").await?;

    let repo = ScoreRepository::new(db);
    assert!(repo.close(score.id, true, None).await?);
    assert!(!repo.close(score.id, false, None).await?);

    let reloaded = repo.find_by_id(score.id).await?.unwrap();
    assert_eq!(reloaded.success, Some(true));

    Ok(())
}

use super::*;

/// Tests the stat-aggregation gate.
///
/// Expected: Ok(true) exactly once per attempt
#[tokio::test]
async fn first_caller_wins_the_gate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_season, _map, rankedle) = factory::helpers::create_rankedle_with_dependencies(db).await?;
    let score = factory::create_score(db, rankedle.id, "member_1").await?;

    let repo = ScoreRepository::new(db);
    assert!(repo.mark_ended(score.id).await?);
    assert!(!repo.mark_ended(score.id).await?);

    let reloaded = repo.find_by_id(score.id).await?.unwrap();
    assert!(reloaded.date_end.is_some());

    Ok(())
}

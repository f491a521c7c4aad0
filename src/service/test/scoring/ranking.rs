use super::*;

/// Tests dense competition ranking: tied totals share a rank, the next
/// distinct total takes the next rank rather than skipping one.
///
/// Expected: points [10, 10, 7, 5] rank as [1, 1, 2, 3]
#[tokio::test]
async fn tied_points_share_a_dense_rank() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    StatFactory::new(db, season.id, "a").points(10).build().await?;
    StatFactory::new(db, season.id, "b").points(10).build().await?;
    StatFactory::new(db, season.id, "c").points(7).build().await?;
    StatFactory::new(db, season.id, "d").points(5).build().await?;

    let board = StatService::new(db).ranking(&EchoGateway::new()).await?;

    let ranks: Vec<(i32, u32)> = board.iter().map(|row| (row.points, row.rank)).collect();
    assert_eq!(ranks, vec![(10, 1), (10, 1), (7, 2), (5, 3)]);
    assert_eq!(board[0].name, "Member a");

    Ok(())
}

/// Tests that members who left the guild drop off the board without
/// consuming a rank.
#[tokio::test]
async fn unresolvable_members_are_dropped() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    StatFactory::new(db, season.id, "gone").points(10).build().await?;
    StatFactory::new(db, season.id, "second").points(7).build().await?;
    StatFactory::new(db, season.id, "third").points(5).build().await?;

    let gateway = EchoGateway {
        missing: vec!["gone".to_string()],
    };
    let board = StatService::new(db).ranking(&gateway).await?;

    assert_eq!(board.len(), 2);
    assert_eq!(board[0].member_id, "second");
    assert_eq!(board[0].rank, 1);
    assert_eq!(board[1].rank, 2);

    Ok(())
}

/// Tests the empty database case.
///
/// Expected: an empty board without a season
#[tokio::test]
async fn empty_without_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let board = StatService::new(db).ranking(&EchoGateway::new()).await?;
    assert!(board.is_empty());

    Ok(())
}

use super::*;

/// Tests that the first listen creates the attempt and serves the shortest
/// clip.
#[tokio::test]
async fn first_play_creates_attempt_with_first_clip() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_season, _map, rankedle) = factory::helpers::create_rankedle_with_dependencies(db).await?;

    let service = game_service(db);
    let path = service.play("member_1").await?;

    assert!(path.ends_with(format!("puzzles/{}/clip_0.mp3", rankedle.id)));
    assert!(ScoreRepository::new(db)
        .find(rankedle.id, "member_1")
        .await?
        .is_some());

    Ok(())
}

/// Tests that the clip follows the consumed skip count.
#[tokio::test]
async fn play_serves_clip_for_current_step() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_season, _map, rankedle) = factory::helpers::create_rankedle_with_dependencies(db).await?;
    ScoreFactory::new(db, rankedle.id, "member_1")
        .skips(3)
        .details(skip_details_json(3))
        .build()
        .await?;

    let service = game_service(db);
    let path = service.play("member_1").await?;

    assert!(path.ends_with(format!("puzzles/{}/clip_3.mp3", rankedle.id)));

    Ok(())
}

/// Tests that a terminal attempt unlocks the full preview, win or lose.
#[tokio::test]
async fn play_serves_full_preview_after_terminal() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_season, _map, rankedle) = factory::helpers::create_rankedle_with_dependencies(db).await?;
    ScoreFactory::new(db, rankedle.id, "member_1")
        .skips(6)
        .success(Some(false))
        .build()
        .await?;

    let service = game_service(db);
    let path = service.play("member_1").await?;

    assert!(path.ends_with(format!("puzzles/{}/preview_full.mp3", rankedle.id)));

    Ok(())
}

use super::*;

async fn setup(
    db: &sea_orm::DatabaseConnection,
) -> Result<
    (
        entity::rankedle_season::Model,
        entity::rankedle_map::Model,
        entity::rankedle::Model,
        entity::rankedle_map::Model,
    ),
    AppError,
> {
    let season = factory::create_season(db).await?;
    let answer = MapFactory::new(db)
        .song_author_name("Artist A")
        .song_name("Song A")
        .build()
        .await?;
    let rankedle = factory::create_rankedle(db, season.id, answer.id).await?;
    let wrong = MapFactory::new(db)
        .song_author_name("Artist B")
        .song_name("Song B")
        .build()
        .await?;
    Ok((season, answer, rankedle, wrong))
}

/// Tests a correct guess on the very first action.
///
/// Expected: outcome Won at zero skips, eight points, first-try counter
#[tokio::test]
async fn correct_first_submit_wins_with_full_points() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (season, answer, _rankedle, _wrong) = setup(db).await?;
    let message = factory::create_message(db, "first_try").await?;

    let service = game_service(db);
    let score = service.submit("member_1", answer.id).await?;

    assert_eq!(score.success, Some(true));
    assert_eq!(score.skips, 0);
    assert_eq!(score.message_id, Some(message.id));
    assert!(score.date_end.is_some());

    let stat = StatRepository::new(db)
        .find(season.id, "member_1")
        .await?
        .unwrap();
    assert_eq!(stat.try1, 1);
    assert_eq!(stat.won, 1);
    assert_eq!(stat.played, 1);
    assert_eq!(stat.current_streak, 1);
    assert_eq!(stat.max_streak, 1);
    assert_eq!(stat.points, 8);

    Ok(())
}

/// Tests that correctness is metadata equality, not map identity.
///
/// Expected: a reissue with the same artist and title wins
#[tokio::test]
async fn reissue_with_matching_metadata_wins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_season, _answer, _rankedle, _wrong) = setup(db).await?;
    let reissue = MapFactory::new(db)
        .song_author_name("Artist A")
        .song_name("Song A")
        .build()
        .await?;

    let service = game_service(db);
    let score = service.submit("member_1", reissue.id).await?;

    assert_eq!(score.success, Some(true));

    Ok(())
}

/// Tests that a wrong guess records a fail step with the guessed song's
/// display name.
#[tokio::test]
async fn wrong_guess_records_fail_step() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_season, _answer, _rankedle, wrong) = setup(db).await?;

    let service = game_service(db);
    let score = service.submit("member_1", wrong.id).await?;

    assert_eq!(score.skips, 1);
    assert!(score.success.is_none());
    let details = details_of(&score);
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].status, GuessStatus::Fail);
    assert_eq!(details[0].text, "Artist B - Song B");
    assert_eq!(details[0].map_id, Some(wrong.id));

    Ok(())
}

/// Tests a correct guess after some skips.
///
/// Expected: win with decayed points and the matching try counter
#[tokio::test]
async fn win_after_two_skips_awards_decayed_points() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (season, answer, rankedle, _wrong) = setup(db).await?;
    factory::create_message(db, "won").await?;
    ScoreFactory::new(db, rankedle.id, "member_1")
        .skips(2)
        .details(skip_details_json(2))
        .build()
        .await?;

    let service = game_service(db);
    let score = service.submit("member_1", answer.id).await?;

    assert_eq!(score.success, Some(true));
    assert_eq!(score.skips, 2);

    let stat = StatRepository::new(db)
        .find(season.id, "member_1")
        .await?
        .unwrap();
    assert_eq!(stat.try3, 1);
    assert_eq!(stat.points, 4);

    Ok(())
}

/// Tests that any submission with every step consumed loses, even a correct
/// one.
#[tokio::test]
async fn submit_when_exhausted_loses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_season, answer, rankedle, _wrong) = setup(db).await?;
    ScoreFactory::new(db, rankedle.id, "member_1")
        .skips(6)
        .details(skip_details_json(6))
        .build()
        .await?;

    let service = game_service(db);
    let score = service.submit("member_1", answer.id).await?;

    assert_eq!(score.success, Some(false));

    Ok(())
}

/// Tests that a submission on a terminal attempt changes nothing.
#[tokio::test]
async fn submit_after_terminal_is_a_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_season, answer, rankedle, _wrong) = setup(db).await?;
    ScoreFactory::new(db, rankedle.id, "member_1")
        .skips(3)
        .success(Some(false))
        .build()
        .await?;

    let service = game_service(db);
    let score = service.submit("member_1", answer.id).await?;

    assert_eq!(score.success, Some(false));
    assert_eq!(score.skips, 3);

    Ok(())
}

/// Tests that an unknown map id is rejected.
#[tokio::test]
async fn unknown_map_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rankedle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    setup(db).await?;

    let service = game_service(db);
    let result = service.submit("member_1", 999_999).await;

    assert!(matches!(
        result,
        Err(AppError::RankedleErr(RankedleError::NotFound(_)))
    ));

    Ok(())
}

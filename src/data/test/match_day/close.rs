use super::*;

fn update(discord_id: u64, day_points: Option<i32>, history: &str) -> UserUpdate {
    UserUpdate {
        discord_id,
        day_points,
        history: PointsHistory::from_column(Some(history)),
    }
}

/// Tests the full round-close batch.
///
/// Expected: Ok with updates applied, stars cleared, round predictions deleted,
/// predictions for other matches kept and the round flagged closed
#[tokio::test]
async fn applies_results_atomically() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (round, matches) = factory::helpers::create_match_day_with_matches(db, 1, 2).await?;
    factory::user::UserFactory::new(db)
        .discord_id("1")
        .starred_match(&matches[0].match_id)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .discord_id("2")
        .starred_match(&matches[1].match_id)
        .build()
        .await?;
    factory::create_prediction(db, "1", &matches[0].match_id, "1").await?;
    factory::create_prediction(db, "2", &matches[1].match_id, "X").await?;
    factory::create_prediction(db, "2", "next_round", "2").await?;

    let repo = MatchDayRepository::new(db);
    repo.close(round.id, &[update(1, Some(1), "4"), update(2, None, "")])
        .await?;

    let users = UserRepository::new(db).get_all().await?;
    assert_eq!(users[0].day_points, Some(1));
    assert_eq!(users[0].history.to_string(), "4");
    assert_eq!(users[1].day_points, None);
    assert_eq!(users[1].history.slots(), &[None]);
    assert!(users.iter().all(|u| u.starred_match.is_none()));

    let predictions = PredictionRepository::new(db);
    assert!(predictions
        .get_for_matches(&[matches[0].match_id.clone(), matches[1].match_id.clone()])
        .await?
        .is_empty());
    assert_eq!(
        predictions
            .get_for_matches(&["next_round".to_string()])
            .await?
            .len(),
        1
    );

    assert!(repo.find_open().await?.is_none());
    assert!(repo.find_latest().await?.unwrap().closed);

    Ok(())
}

/// Tests that a round cannot be closed twice.
///
/// Expected: Err(AppError::BadRequest) and no user changes from the second attempt
#[tokio::test]
async fn rejects_second_close() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (round, _) = factory::helpers::create_match_day_with_matches(db, 1, 1).await?;
    factory::user::UserFactory::new(db)
        .discord_id("1")
        .build()
        .await?;

    let repo = MatchDayRepository::new(db);
    repo.close(round.id, &[update(1, Some(2), "3")]).await?;

    let result = repo.close(round.id, &[update(1, Some(4), "3,3")]).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let user = UserRepository::new(db).find_by_discord_id(1).await?.unwrap();
    assert_eq!(user.day_points, Some(2));
    assert_eq!(user.history.to_string(), "3");

    Ok(())
}

/// Tests a close that fails after the round flag and user updates were written.
///
/// The prediction table is left out of the schema so the final delete fails.
///
/// Expected: Err(AppError::DbErr) with day points, history, stars and the open flag
/// all unchanged
#[tokio::test]
async fn rolls_back_on_failure_midway() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MatchDay)
        .with_table(entity::prelude::MatchDayMatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (round, matches) = factory::helpers::create_match_day_with_matches(db, 1, 1).await?;
    factory::user::UserFactory::new(db)
        .discord_id("1")
        .day_points(Some(5))
        .history("2")
        .starred_match(&matches[0].match_id)
        .build()
        .await?;

    let repo = MatchDayRepository::new(db);
    let result = repo.close(round.id, &[update(1, Some(7), "2,4")]).await;
    assert!(matches!(result, Err(AppError::DbErr(_))));

    let user = UserRepository::new(db).find_by_discord_id(1).await?.unwrap();
    assert_eq!(user.day_points, Some(5));
    assert_eq!(user.history.to_string(), "2");
    assert_eq!(user.starred_match.as_deref(), Some(matches[0].match_id.as_str()));

    let open = repo.find_open().await?.unwrap();
    assert_eq!(open.id, round.id);
    assert!(!open.closed);

    Ok(())
}

/// Tests closing a round id that does not exist.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_round() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MatchDayRepository::new(db);
    let result = repo.close(404, &[]).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

use super::*;

/// Tests storing a first prediction.
///
/// Expected: Ok with the prediction stored for the user and match
#[tokio::test]
async fn creates_prediction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .discord_id("42")
        .build()
        .await?;

    let repo = PredictionRepository::new(db);
    let stored = repo
        .upsert(UpsertPredictionParam {
            user_id: 42,
            match_id: "m1".to_string(),
            prediction: "1 (2-0)".to_string(),
        })
        .await?;

    assert_eq!(stored.user_id.to_string(), user.discord_id);
    assert_eq!(stored.match_id, "m1");
    assert_eq!(stored.prediction, "1 (2-0)");

    Ok(())
}

/// Tests that a resubmission replaces the earlier prediction.
///
/// Expected: Ok with a single row holding the latest text
#[tokio::test]
async fn replaces_existing_prediction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("42")
        .build()
        .await?;
    factory::create_prediction(db, "42", "m1", "X").await?;

    let repo = PredictionRepository::new(db);
    repo.upsert(UpsertPredictionParam {
        user_id: 42,
        match_id: "m1".to_string(),
        prediction: "2".to_string(),
    })
    .await?;

    let rows = repo.get_for_matches(&["m1".to_string()]).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].prediction, "2");

    Ok(())
}

/// Tests that a prediction requires an existing player row.
///
/// Expected: Err(AppError::DbErr) from the foreign key
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PredictionRepository::new(db);
    let result = repo
        .upsert(UpsertPredictionParam {
            user_id: 42,
            match_id: "m1".to_string(),
            prediction: "1".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

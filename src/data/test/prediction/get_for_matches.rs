use super::*;

/// Tests that only predictions for the requested matches are returned.
///
/// Expected: Ok with rows of every user for those matches only
#[tokio::test]
async fn filters_by_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for discord_id in ["1", "2"] {
        factory::user::UserFactory::new(db)
            .discord_id(discord_id)
            .build()
            .await?;
    }
    factory::create_prediction(db, "1", "m1", "1").await?;
    factory::create_prediction(db, "2", "m1", "X2").await?;
    factory::create_prediction(db, "1", "m2", "2").await?;
    factory::create_prediction(db, "2", "old", "1X").await?;

    let repo = PredictionRepository::new(db);
    let mut rows = repo
        .get_for_matches(&["m1".to_string(), "m2".to_string()])
        .await?;
    rows.sort_by(|a, b| (a.user_id, &a.match_id).cmp(&(b.user_id, &b.match_id)));

    let keys: Vec<(u64, &str)> = rows
        .iter()
        .map(|row| (row.user_id, row.match_id.as_str()))
        .collect();
    assert_eq!(keys, vec![(1, "m1"), (1, "m2"), (2, "m1")]);

    Ok(())
}

/// Tests querying without any match ids.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_no_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_prediction(db, &user.discord_id, "m1", "1").await?;

    let repo = PredictionRepository::new(db);

    assert!(repo.get_for_matches(&[]).await?.is_empty());

    Ok(())
}

/// Tests reading one player's predictions for a round.
///
/// Expected: Ok with only that player's rows
#[tokio::test]
async fn returns_single_user_predictions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for discord_id in ["1", "2"] {
        factory::user::UserFactory::new(db)
            .discord_id(discord_id)
            .build()
            .await?;
    }
    factory::create_prediction(db, "1", "m1", "1").await?;
    factory::create_prediction(db, "2", "m1", "2").await?;

    let repo = PredictionRepository::new(db);
    let rows = repo.get_for_user(2, &["m1".to_string()]).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].prediction, "2");

    Ok(())
}

use super::*;

/// Tests finding an existing player by Discord ID.
///
/// Expected: Ok(Some(User)) with the stored history parsed into slots
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .history("2,,4")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(123456789).await?.unwrap();

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.history.slots(), &[Some(2), None, Some(4)]);

    Ok(())
}

/// Tests querying for a player that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_discord_id(999999999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a stored Discord ID which is not numeric is reported as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_corrupted_discord_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("not-a-snowflake")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.get_all().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

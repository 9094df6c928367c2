use super::*;

/// Tests starring and then clearing a match.
///
/// Expected: Ok with the star stored, then removed
#[tokio::test]
async fn sets_and_clears_star() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    repo.set_starred_match(123456789, Some("m7".to_string()))
        .await?;
    let user = repo.find_by_discord_id(123456789).await?.unwrap();
    assert!(user.has_starred("m7"));

    repo.set_starred_match(123456789, None).await?;
    let user = repo.find_by_discord_id(123456789).await?.unwrap();
    assert_eq!(user.starred_match, None);

    Ok(())
}

/// Tests that starring only affects the given player.
///
/// Expected: Ok with the other player's star untouched
#[tokio::test]
async fn leaves_other_users_alone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("1")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .discord_id("2")
        .starred_match("m1")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.set_starred_match(1, Some("m2".to_string())).await?;

    let other = repo.find_by_discord_id(2).await?.unwrap();
    assert_eq!(other.starred_match.as_deref(), Some("m1"));

    Ok(())
}

use super::*;

/// Tests creating a new player.
///
/// Expected: Ok with a fresh player that has no day points, history or star
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "TestUser".to_string(),
        })
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");
    assert_eq!(user.day_points, None);
    assert!(user.history.is_empty());
    assert_eq!(user.starred_match, None);

    Ok(())
}

/// Tests that upserting an existing player only refreshes the name.
///
/// Expected: Ok with new name while day points, history and star are kept
#[tokio::test]
async fn updates_name_and_keeps_game_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("OldName")
        .day_points(Some(4))
        .history("3,,1")
        .starred_match("m1")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "NewName".to_string(),
        })
        .await?;

    assert_eq!(user.name, "NewName");
    assert_eq!(user.day_points, Some(4));
    assert_eq!(user.history.to_string(), "3,,1");
    assert_eq!(user.starred_match.as_deref(), Some("m1"));

    Ok(())
}

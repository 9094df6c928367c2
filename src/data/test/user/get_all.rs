use super::*;

/// Tests listing every player.
///
/// Expected: Ok with all players in registration order
#[tokio::test]
async fn returns_users_in_registration_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for discord_id in ["1", "2", "3"] {
        factory::user::UserFactory::new(db)
            .discord_id(discord_id)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let ids: Vec<u64> = users.iter().map(|u| u.discord_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    Ok(())
}

/// Tests listing players on an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

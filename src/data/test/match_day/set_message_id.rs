use super::*;

/// Tests recording the live leaderboard message of a round.
///
/// Expected: Ok with the message ID readable from the round
#[tokio::test]
async fn stores_message_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let round = factory::create_match_day(db).await?;

    let repo = MatchDayRepository::new(db);
    repo.set_message_id(round.id, 1122334455).await?;

    let stored = repo.find_open().await?.unwrap();
    assert_eq!(stored.message_id, Some(1122334455));

    Ok(())
}

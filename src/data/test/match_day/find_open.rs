use super::*;

/// Tests that the open round is found while closed rounds are skipped.
///
/// Expected: Ok(Some) with the open round, Ok(Some) with the latest overall
#[tokio::test]
async fn finds_open_round() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::match_day::MatchDayFactory::new(db)
        .number(1)
        .closed(true)
        .build()
        .await?;
    let (open, _) = factory::helpers::create_match_day_with_matches(db, 2, 2).await?;

    let repo = MatchDayRepository::new(db);
    let found = repo.find_open().await?.unwrap();

    assert_eq!(found.id, open.id);
    assert_eq!(found.matches.len(), 2);
    assert_eq!(repo.find_latest().await?.map(|r| r.number), Some(2));

    Ok(())
}

/// Tests that no round is open once every round is closed.
///
/// Expected: Ok(None) for the open round, Ok(Some) for the latest round
#[tokio::test]
async fn returns_none_when_all_closed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for number in [1, 2] {
        factory::match_day::MatchDayFactory::new(db)
            .number(number)
            .closed(true)
            .build()
            .await?;
    }

    let repo = MatchDayRepository::new(db);

    assert!(repo.find_open().await?.is_none());
    assert_eq!(repo.find_latest().await?.map(|r| r.number), Some(2));

    Ok(())
}

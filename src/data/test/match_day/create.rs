use super::*;

/// Tests opening a round from a provider snapshot.
///
/// Expected: Ok with matches stored at positions 1..n in snapshot order
#[tokio::test]
async fn creates_round_with_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MatchDayRepository::new(db);
    let round = repo
        .create(CreateMatchDayParam {
            number: 12,
            matches: vec![scheduled("b"), scheduled("a"), scheduled("c")],
        })
        .await?;

    assert_eq!(round.number, 12);
    assert!(!round.closed);
    assert_eq!(round.match_ids(), vec!["b", "a", "c"]);
    assert_eq!(round.match_at(2).map(|m| m.match_id.as_str()), Some("a"));
    assert_eq!(round.match_at(2).map(|m| m.home_team.as_str()), Some("Home a"));

    let stored = repo.find_latest().await?.unwrap();
    assert_eq!(stored, round);

    Ok(())
}

/// Tests that a round number can only be opened once.
///
/// Expected: Err(AppError::DbErr) from the unique constraint
#[tokio::test]
async fn rejects_duplicate_round_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MatchDayRepository::new(db);
    repo.create(CreateMatchDayParam {
        number: 3,
        matches: vec![scheduled("m1")],
    })
    .await?;

    let result = repo
        .create(CreateMatchDayParam {
            number: 3,
            matches: vec![scheduled("m2")],
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an open match day with `count` matches at positions 1 through `count`.
///
/// Kickoffs fall a day from now, one hour apart.
///
/// # Arguments
/// - `db` - Database connection
/// - `number` - Match day number
/// - `count` - Number of matches to add
///
/// # Returns
/// - `Ok((match_day, matches))` - The round and its matches in position order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_day_with_matches(
    db: &DatabaseConnection,
    number: i32,
    count: i32,
) -> Result<
    (
        entity::match_day::Model,
        Vec<entity::match_day_match::Model>,
    ),
    DbErr,
> {
    let round = crate::factory::match_day::MatchDayFactory::new(db)
        .number(number)
        .build()
        .await?;

    let mut matches = Vec::new();
    for position in 1..=count {
        let fixture = crate::factory::match_day::create_match_day_match(db, round.id, position)
            .await?;
        matches.push(fixture);
    }

    Ok((round, matches))
}

//! Match day factory for creating test rounds and their matches.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test match days.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::match_day::MatchDayFactory;
///
/// let round = MatchDayFactory::new(&db).number(3).closed(true).build().await?;
/// ```
pub struct MatchDayFactory<'a> {
    db: &'a DatabaseConnection,
    number: i32,
    closed: bool,
    message_id: Option<String>,
}

impl<'a> MatchDayFactory<'a> {
    /// Creates a new MatchDayFactory with default values.
    ///
    /// Defaults:
    /// - number: auto-incremented
    /// - closed: `false`
    /// - message_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            number: next_id() as i32,
            closed: false,
            message_id: None,
        }
    }

    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    /// Builds and inserts the match day entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::match_day::Model)` - Created match day entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::match_day::Model, DbErr> {
        let now = Utc::now();
        entity::match_day::ActiveModel {
            number: ActiveValue::Set(self.number),
            closed: ActiveValue::Set(self.closed),
            message_id: ActiveValue::Set(self.message_id),
            created_at: ActiveValue::Set(now),
            closed_at: ActiveValue::Set(self.closed.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open match day with default values.
pub async fn create_match_day(db: &DatabaseConnection) -> Result<entity::match_day::Model, DbErr> {
    MatchDayFactory::new(db).build().await
}

/// Adds a match to a round.
///
/// The match id is `"match_{id}"` with an auto-incremented id, and the kickoff is one
/// day from now plus one hour per position.
///
/// # Arguments
/// - `db` - Database connection
/// - `match_day_id` - Database id of the round
/// - `position` - One-based position within the round
///
/// # Returns
/// - `Ok(entity::match_day_match::Model)` - Created match entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_match_day_match(
    db: &DatabaseConnection,
    match_day_id: i32,
    position: i32,
) -> Result<entity::match_day_match::Model, DbErr> {
    let id = next_id();
    entity::match_day_match::ActiveModel {
        match_day_id: ActiveValue::Set(match_day_id),
        match_id: ActiveValue::Set(format!("match_{}", id)),
        position: ActiveValue::Set(position),
        home_team: ActiveValue::Set(format!("Home {}", id)),
        away_team: ActiveValue::Set(format!("Away {}", id)),
        kickoff_at: ActiveValue::Set(
            Utc::now() + Duration::days(1) + Duration::hours(position as i64),
        ),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_match_day_with_matches};

    #[tokio::test]
    async fn creates_round_with_positions() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_game_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (round, matches) = create_match_day_with_matches(db, 7, 3).await?;

        assert_eq!(round.number, 7);
        assert!(!round.closed);
        assert_eq!(
            matches.iter().map(|m| m.position).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(matches.iter().all(|m| m.match_day_id == round.id));

        Ok(())
    }
}

//! Match day data repository.
//!
//! This module provides the `MatchDayRepository` for rounds and the matches captured when a
//! round opens. It also owns the round-close transaction: writing the new day points and
//! histories, clearing every starred match, deleting the round's predictions and marking
//! the round closed happen atomically or not at all.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    error::AppError,
    model::match_day::{CreateMatchDayParam, MatchDay},
    scoring::closing::UserUpdate,
};

/// Repository providing database operations for match days.
pub struct MatchDayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchDayRepository<'a> {
    /// Creates a new MatchDayRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MatchDayRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new match day with its matches.
    ///
    /// Matches are stored in the given order with positions starting at 1. The round and
    /// its matches are written in one transaction.
    ///
    /// # Arguments
    /// - `param` - Round number and provider snapshot of its matches
    ///
    /// # Returns
    /// - `Ok(MatchDay)` - The created round
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate round number
    pub async fn create(&self, param: CreateMatchDayParam) -> Result<MatchDay, AppError> {
        let number = i32::try_from(param.number).map_err(|_| {
            AppError::BadRequest(format!("Match day number {} is out of range", param.number))
        })?;

        let txn = self.db.begin().await?;

        let round = entity::match_day::ActiveModel {
            number: ActiveValue::Set(number),
            closed: ActiveValue::Set(false),
            message_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            closed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut matches = Vec::with_capacity(param.matches.len());
        for (position, fixture) in (1..).zip(param.matches) {
            let stored = entity::match_day_match::ActiveModel {
                match_day_id: ActiveValue::Set(round.id),
                match_id: ActiveValue::Set(fixture.id),
                position: ActiveValue::Set(position),
                home_team: ActiveValue::Set(fixture.home_team),
                away_team: ActiveValue::Set(fixture.away_team),
                kickoff_at: ActiveValue::Set(fixture.kickoff),
            }
            .insert(&txn)
            .await?;
            matches.push(stored);
        }

        txn.commit().await?;

        MatchDay::from_entity(round, matches)
    }

    /// Finds the most recent round that has not been closed yet.
    ///
    /// # Returns
    /// - `Ok(Some(MatchDay))` - The open round with its matches
    /// - `Ok(None)` - Every round is closed or none exists
    /// - `Err(AppError)` - Database error or corrupted stored values
    pub async fn find_open(&self) -> Result<Option<MatchDay>, AppError> {
        let entity = entity::prelude::MatchDay::find()
            .filter(entity::match_day::Column::Closed.eq(false))
            .order_by_desc(entity::match_day::Column::Number)
            .one(self.db)
            .await?;

        self.with_matches(entity).await
    }

    /// Finds the round with the highest number, open or closed.
    pub async fn find_latest(&self) -> Result<Option<MatchDay>, AppError> {
        let entity = entity::prelude::MatchDay::find()
            .order_by_desc(entity::match_day::Column::Number)
            .one(self.db)
            .await?;

        self.with_matches(entity).await
    }

    /// Records the Discord message that carries the round's live leaderboard.
    ///
    /// # Arguments
    /// - `id` - Database id of the round
    /// - `message_id` - Discord message ID
    ///
    /// # Returns
    /// - `Ok(())` - Message ID stored (or no matching round found)
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_message_id(&self, id: i32, message_id: u64) -> Result<(), AppError> {
        entity::prelude::MatchDay::update_many()
            .filter(entity::match_day::Column::Id.eq(id))
            .col_expr(
                entity::match_day::Column::MessageId,
                Expr::value(message_id.to_string()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Closes a round and applies its results in a single transaction.
    ///
    /// The round is flagged closed first, guarded on it still being open, so a second
    /// close of the same round fails without touching any user. Then each update's day
    /// points and history are written, every user's starred match is cleared and all
    /// predictions for the round's matches are deleted.
    ///
    /// # Arguments
    /// - `id` - Database id of the round
    /// - `updates` - New values per user from the closing leaderboard
    ///
    /// # Returns
    /// - `Ok(())` - Round closed and every change committed
    /// - `Err(AppError::BadRequest)` - Round is missing or already closed; nothing was written
    /// - `Err(AppError::DbErr)` - Database error; the transaction was rolled back
    pub async fn close(&self, id: i32, updates: &[UserUpdate]) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let flagged = entity::prelude::MatchDay::update_many()
            .filter(entity::match_day::Column::Id.eq(id))
            .filter(entity::match_day::Column::Closed.eq(false))
            .col_expr(entity::match_day::Column::Closed, Expr::value(true))
            .col_expr(entity::match_day::Column::ClosedAt, Expr::value(Utc::now()))
            .exec(&txn)
            .await?;

        if flagged.rows_affected == 0 {
            txn.rollback().await?;
            return Err(AppError::BadRequest(format!(
                "Match day {id} does not exist or is already closed"
            )));
        }

        for update in updates {
            entity::prelude::User::update_many()
                .filter(entity::user::Column::DiscordId.eq(update.discord_id.to_string()))
                .col_expr(
                    entity::user::Column::DayPoints,
                    Expr::value(update.day_points),
                )
                .col_expr(
                    entity::user::Column::MatchPointsHistory,
                    Expr::value(update.history.to_column()),
                )
                .exec(&txn)
                .await?;
        }

        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::StarredMatch,
                Expr::value(Option::<String>::None),
            )
            .exec(&txn)
            .await?;

        let match_ids: Vec<String> = entity::prelude::MatchDayMatch::find()
            .filter(entity::match_day_match::Column::MatchDayId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|m| m.match_id)
            .collect();

        entity::prelude::Prediction::delete_many()
            .filter(entity::prediction::Column::MatchId.is_in(match_ids))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }

    async fn with_matches(
        &self,
        entity: Option<entity::match_day::Model>,
    ) -> Result<Option<MatchDay>, AppError> {
        let Some(entity) = entity else {
            return Ok(None);
        };

        let matches = entity::prelude::MatchDayMatch::find()
            .filter(entity::match_day_match::Column::MatchDayId.eq(entity.id))
            .order_by_asc(entity::match_day_match::Column::Position)
            .all(self.db)
            .await?;

        MatchDay::from_entity(entity, matches).map(Some)
    }
}

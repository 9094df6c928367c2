//! Prediction service for player submissions.
//!
//! This module provides the `PredictionService` behind `/predict` and `/star`. Both requests
//! go through the same checks: a round must be open, its lock must not have passed, and
//! the requested position must exist in the round. Players are created on their first
//! accepted request.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{match_day::MatchDayRepository, prediction::PredictionRepository, user::UserRepository},
    error::{submission::SubmissionError, AppError},
    model::{
        match_day::MatchDayMatch,
        prediction::{SubmitPredictionParam, SubmittedPrediction, UpsertPredictionParam},
        user::{StarMatchParam, UpsertUserParam},
    },
    scoring::prediction,
};

/// Service providing prediction and star submission for players.
pub struct PredictionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PredictionService<'a> {
    /// Creates a new PredictionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PredictionService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a match of the open round that still accepts predictions.
    ///
    /// Used before showing the prediction modal so players are turned away early, and
    /// again on submission since the lock may pass while the modal is open.
    ///
    /// # Arguments
    /// - `position` - One-based match number as shown to players
    /// - `now` - Current time
    ///
    /// # Returns
    /// - `Ok(MatchDayMatch)` - The match at that position
    /// - `Err(AppError::SubmissionErr)` - No open round, round locked or unknown position
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn open_match(
        &self,
        position: u32,
        now: DateTime<Utc>,
    ) -> Result<MatchDayMatch, AppError> {
        let round = MatchDayRepository::new(self.db)
            .find_open()
            .await?
            .ok_or(SubmissionError::NoOpenMatchDay)?;

        if round.is_locked(now) {
            return Err(SubmissionError::Locked.into());
        }

        round
            .match_at(position)
            .cloned()
            .ok_or_else(|| SubmissionError::UnknownMatch(position).into())
    }

    /// Gets the player's stored prediction for a match, used to prefill the modal.
    pub async fn stored_prediction(
        &self,
        discord_id: u64,
        fixture: &MatchDayMatch,
    ) -> Result<Option<String>, AppError> {
        let stored = PredictionRepository::new(self.db)
            .get_for_user(discord_id, std::slice::from_ref(&fixture.match_id))
            .await?;

        Ok(stored.into_iter().next().map(|p| p.prediction))
    }

    /// Validates and stores a prediction, replacing any earlier one for the same match.
    ///
    /// The text is stored in canonical form, so `x2` and ` X2 ` are both saved as `X2`.
    ///
    /// # Arguments
    /// - `param` - Player, match position and prediction text
    /// - `now` - Current time, checked against the round lock
    ///
    /// # Returns
    /// - `Ok(SubmittedPrediction)` - The match and the stored prediction text
    /// - `Err(AppError::SubmissionErr)` - Request rejected; the message is safe to show
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn submit(
        &self,
        param: SubmitPredictionParam,
        now: DateTime<Utc>,
    ) -> Result<SubmittedPrediction, AppError> {
        let fixture = self.open_match(param.position, now).await?;
        if param
            .match_id
            .as_ref()
            .is_some_and(|expected| *expected != fixture.match_id)
        {
            return Err(SubmissionError::MatchChanged(param.position).into());
        }
        let parsed = prediction::parse(&param.text).map_err(SubmissionError::from)?;
        let canonical = parsed.to_string();

        UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                discord_id: param.discord_id,
                name: param.name,
            })
            .await?;

        PredictionRepository::new(self.db)
            .upsert(UpsertPredictionParam {
                user_id: param.discord_id,
                match_id: fixture.match_id.clone(),
                prediction: canonical.clone(),
            })
            .await?;

        tracing::debug!(
            "User {} predicted {} for match {}",
            param.discord_id,
            canonical,
            fixture.match_id
        );

        Ok(SubmittedPrediction {
            fixture,
            prediction: canonical,
        })
    }

    /// Nominates a match of the open round as the player's starred pick.
    ///
    /// Replaces any earlier star; a player has at most one per round.
    ///
    /// # Arguments
    /// - `param` - Player and match position
    /// - `now` - Current time, checked against the round lock
    ///
    /// # Returns
    /// - `Ok(MatchDayMatch)` - The starred match
    /// - `Err(AppError::SubmissionErr)` - Request rejected; the message is safe to show
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn star(
        &self,
        param: StarMatchParam,
        now: DateTime<Utc>,
    ) -> Result<MatchDayMatch, AppError> {
        let fixture = self.open_match(param.position, now).await?;

        let user_repo = UserRepository::new(self.db);
        user_repo
            .upsert(UpsertUserParam {
                discord_id: param.discord_id,
                name: param.name,
            })
            .await?;
        user_repo
            .set_starred_match(param.discord_id, Some(fixture.match_id.clone()))
            .await?;

        Ok(fixture)
    }
}

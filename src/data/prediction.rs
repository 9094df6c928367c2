//! Prediction data repository.
//!
//! Predictions are keyed by (user, match). Resubmitting replaces the stored text.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    error::AppError,
    model::prediction::{UpsertPredictionParam, UserPrediction},
};

pub struct PredictionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PredictionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a prediction or replaces the user's earlier prediction for the same match.
    ///
    /// # Arguments
    /// - `param` - User, match and canonical prediction text
    ///
    /// # Returns
    /// - `Ok(UserPrediction)` - The stored prediction
    /// - `Err(AppError::DbErr)` - Database error, including a missing user row
    pub async fn upsert(&self, param: UpsertPredictionParam) -> Result<UserPrediction, AppError> {
        let entity = entity::prelude::Prediction::insert(entity::prediction::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            match_id: ActiveValue::Set(param.match_id),
            prediction: ActiveValue::Set(param.prediction),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::prediction::Column::UserId,
                entity::prediction::Column::MatchId,
            ])
            .update_columns([
                entity::prediction::Column::Prediction,
                entity::prediction::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        UserPrediction::from_entity(entity)
    }

    /// Gets every stored prediction for the given matches.
    ///
    /// # Arguments
    /// - `match_ids` - Provider ids of the matches of a round
    ///
    /// # Returns
    /// - `Ok(Vec<UserPrediction>)` - Predictions of all users, empty for no matches
    /// - `Err(AppError)` - Database error or corrupted stored user ID
    pub async fn get_for_matches(
        &self,
        match_ids: &[String],
    ) -> Result<Vec<UserPrediction>, AppError> {
        if match_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Prediction::find()
            .filter(entity::prediction::Column::MatchId.is_in(match_ids.iter().cloned()))
            .order_by_asc(entity::prediction::Column::UserId)
            .all(self.db)
            .await?
            .into_iter()
            .map(UserPrediction::from_entity)
            .collect()
    }

    /// Gets a single user's predictions for the given matches.
    pub async fn get_for_user(
        &self,
        user_id: u64,
        match_ids: &[String],
    ) -> Result<Vec<UserPrediction>, AppError> {
        if match_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Prediction::find()
            .filter(entity::prediction::Column::UserId.eq(user_id.to_string()))
            .filter(entity::prediction::Column::MatchId.is_in(match_ids.iter().cloned()))
            .all(self.db)
            .await?
            .into_iter()
            .map(UserPrediction::from_entity)
            .collect()
    }
}

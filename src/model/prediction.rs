//! Stored prediction models and parameters.

use crate::{
    error::AppError, model::match_day::MatchDayMatch, util::parse::parse_u64_from_string,
};

/// A prediction row as stored, one per (user, match).
///
/// The text is kept verbatim in canonical form; the scoring engine parses it again when
/// it evaluates the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPrediction {
    /// Discord ID of the predicting user
    pub user_id: u64,
    /// Provider id of the match
    pub match_id: String,
    /// Prediction text, e.g. `1 (2-0)`
    pub prediction: String,
}

impl UserPrediction {
    /// Converts an entity model to the domain model.
    ///
    /// # Returns
    /// - `Ok(UserPrediction)` - Converted prediction
    /// - `Err(AppError::InternalError(ParseStringId))` - Stored user ID is not a u64
    pub fn from_entity(entity: entity::prediction::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            match_id: entity.match_id,
            prediction: entity.prediction,
        })
    }
}

/// Parameters for inserting or replacing a prediction.
#[derive(Debug, Clone)]
pub struct UpsertPredictionParam {
    pub user_id: u64,
    pub match_id: String,
    /// Already validated, canonical prediction text.
    pub prediction: String,
}

/// A player's prediction as submitted through the prediction modal.
#[derive(Debug, Clone)]
pub struct SubmitPredictionParam {
    /// Discord ID of the player
    pub discord_id: u64,
    /// Display name to store for the player.
    pub name: String,
    /// One-based match number within the open round.
    pub position: u32,
    /// Provider id of the match the form was opened for, if known.
    pub match_id: Option<String>,
    /// Raw text typed by the player.
    pub text: String,
}

/// An accepted prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedPrediction {
    pub fixture: MatchDayMatch,
    /// Stored canonical prediction text.
    pub prediction: String,
}

//! Player domain models and parameters.

use crate::{
    error::AppError,
    scoring::history::PointsHistory,
    util::parse::parse_u64_from_string,
};

/// A player of the prediction game.
///
/// Created lazily the first time a Discord user submits a prediction or stars a match.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name captured at the last submission.
    pub name: String,
    /// Rank points accumulated over closed match days, `None` before the first close.
    pub day_points: Option<i32>,
    /// Points per match day, aligned with match day numbers.
    pub history: PointsHistory,
    /// Match id of the starred pick for the open match day.
    pub starred_match: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalError(ParseStringId))` - Stored Discord ID is not a u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_id: parse_u64_from_string(entity.discord_id)?,
            name: entity.name,
            day_points: entity.day_points,
            history: PointsHistory::from_column(entity.match_points_history.as_deref()),
            starred_match: entity.starred_match,
        })
    }

    /// Whether the given match is this user's starred pick.
    pub fn has_starred(&self, match_id: &str) -> bool {
        self.starred_match.as_deref() == Some(match_id)
    }
}

/// Parameters for creating a user on first interaction or refreshing their name.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
}

/// Parameters for starring a match of the open round.
#[derive(Debug, Clone)]
pub struct StarMatchParam {
    /// Discord ID of the player
    pub discord_id: u64,
    pub name: String,
    /// One-based match number within the open round.
    pub position: u32,
}

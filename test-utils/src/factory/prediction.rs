//! Prediction factory for creating test prediction entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a prediction row.
///
/// The user row must exist already.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID of the predicting user
/// - `match_id` - Provider match id
/// - `prediction` - Prediction text, stored verbatim
///
/// # Returns
/// - `Ok(entity::prediction::Model)` - Created prediction entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_prediction(
    db: &DatabaseConnection,
    user_id: &str,
    match_id: &str,
    prediction: &str,
) -> Result<entity::prediction::Model, DbErr> {
    entity::prediction::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        match_id: ActiveValue::Set(match_id.to_string()),
        prediction: ActiveValue::Set(prediction.to_string()),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

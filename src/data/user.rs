//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing player records. Players are
//! created lazily on their first prediction or star and keep their accumulated day points
//! and points history across match days.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};

/// Repository providing database operations for player management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from parameter model.
    ///
    /// Inserts a new player or refreshes the display name of an existing one. Day points,
    /// history and the starred match are never touched by this operation.
    ///
    /// # Arguments
    /// - `param` - Discord ID and current display name
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            day_points: ActiveValue::Set(None),
            match_points_history: ActiveValue::Set(None),
            starred_match: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_column(entity::user::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID as u64
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user found with that Discord ID
    /// - `Err(AppError)` - Database error or corrupted stored ID
    pub async fn find_by_discord_id(&self, user_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Gets every registered player in registration order.
    ///
    /// The order is stable between calls so that leaderboard ties keep a consistent
    /// arrangement.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users, oldest first
    /// - `Err(AppError)` - Database error or corrupted stored ID
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::CreatedAt)
            .order_by_asc(entity::user::Column::DiscordId)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Sets or clears the starred match of a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user as u64
    /// - `match_id` - Provider match id to star, `None` to clear
    ///
    /// # Returns
    /// - `Ok(())` - Starred match updated (or no matching user found)
    /// - `Err(AppError::DbErr)` - Database error during update operation
    pub async fn set_starred_match(
        &self,
        user_id: u64,
        match_id: Option<String>,
    ) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id.to_string()))
            .col_expr(entity::user::Column::StarredMatch, Expr::value(match_id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}

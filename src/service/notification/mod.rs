//! Discord notifications for match days.
//!
//! The live leaderboard of a round is a single message in the game channel. It is posted
//! when the round opens, edited on every tick while matches are played and edited one
//! last time when the round closes, followed by a separate standings message.
//!
//! - `builder` - Embed building and line formatting
//! - `posting` - Sending and editing messages

pub mod builder;
pub mod posting;

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

/// Service posting match day messages to the game channel.
pub struct MatchDayNotification<'a> {
    /// Database connection for storing the live message id
    db: &'a DatabaseConnection,
    /// Discord HTTP client for sending and editing messages
    http: Arc<Http>,
    /// Channel all game messages go to
    channel_id: u64,
}

impl<'a> MatchDayNotification<'a> {
    /// Creates a new MatchDayNotification instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    /// - `channel_id` - Discord channel ID of the game channel
    ///
    /// # Returns
    /// - `MatchDayNotification` - New service instance
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            db,
            http,
            channel_id,
        }
    }
}

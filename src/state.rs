//! Shared application state.
//!
//! `AppState` holds the resources the scheduler needs on every tick. It is built once in
//! `main` after the database is migrated and the bot client exists, then cloned into the
//! scheduler job. All fields are cheap to clone.

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::provider::MatchSource;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; clones share the pool.
    pub db: DatabaseConnection,

    /// Discord HTTP client shared with the bot.
    pub discord_http: Arc<Http>,

    /// Fixtures and live scores.
    pub match_source: Arc<dyn MatchSource>,

    /// Channel for the live leaderboard and standings messages.
    pub channel_id: u64,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `discord_http` - Discord HTTP client for posting messages
    /// - `match_source` - Provider of fixtures and live scores
    /// - `channel_id` - Discord channel ID of the game channel
    ///
    /// # Returns
    /// - `AppState` - Initialized application state
    pub fn new(
        db: DatabaseConnection,
        discord_http: Arc<Http>,
        match_source: Arc<dyn MatchSource>,
        channel_id: u64,
    ) -> Self {
        Self {
            db,
            discord_http,
            match_source,
            channel_id,
        }
    }
}

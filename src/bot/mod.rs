//! Discord bot for the prediction game.
//!
//! The bot registers the game's slash commands in the configured guild when it connects
//! and answers command and modal interactions. Its HTTP client is shared with the match
//! day scheduler, which posts the live leaderboard without a second gateway connection.
//!
//! # Gateway Intents
//!
//! Interactions are delivered regardless of intents; only `GUILDS` is requested.

pub mod handler;
pub mod start;

//! External football data.
//!
//! The rest of the crate only talks to the `MatchSource` trait, so the scheduler and the
//! match-day service can be exercised with an in-memory source in tests.

pub mod football_data;

#[cfg(test)]
pub(crate) mod fake;

use serenity::async_trait;

use crate::{error::AppError, model::football::Match};

/// Read access to the fixtures and live scores of one competition.
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Number of the match day the competition is currently on.
    ///
    /// # Returns
    /// - `Ok(u32)` - Current one-based match day
    /// - `Err(AppError)` - Request failed or the competition has no current match day
    async fn current_match_day(&self) -> Result<u32, AppError>;

    /// Snapshot of every match of a match day, in kickoff order.
    ///
    /// # Arguments
    /// - `number` - One-based match day number
    ///
    /// # Returns
    /// - `Ok(Vec<Match>)` - Matches with their current status and score
    /// - `Err(AppError)` - Request failed or the response could not be decoded
    async fn fetch_match_day(&self, number: u32) -> Result<Vec<Match>, AppError>;
}

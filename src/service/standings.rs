//! Overall standings and historical statistics.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::User,
    scoring::{
        standings::{sort_leaderboard, Standing},
        stats::{overall_stats, round_stats, OverallStats, RoundStats},
    },
};

/// Everything shown by `/stats`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub overall: OverallStats,
    /// Per-round summaries, oldest first.
    pub rounds: Vec<RoundStats>,
    /// Every player, for resolving names.
    pub users: Vec<User>,
}

impl StatsSummary {
    /// Display name of a player, falling back to a mention for unknown ids.
    pub fn name_of(&self, discord_id: u64) -> String {
        self.users
            .iter()
            .find(|user| user.discord_id == discord_id)
            .map(|user| user.name.clone())
            .unwrap_or_else(|| format!("<@{}>", discord_id))
    }
}

pub struct StandingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StandingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Overall standings, best first.
    ///
    /// # Returns
    /// - `Ok(Vec<Standing>)` - One row per registered player
    /// - `Err(AppError)` - Database error or corrupted stored values
    pub async fn get_standings(&self) -> Result<Vec<Standing>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(sort_leaderboard(&users))
    }

    /// Records and per-round summaries over every closed round.
    pub async fn get_stats(&self) -> Result<StatsSummary, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(StatsSummary {
            overall: overall_stats(&users),
            rounds: round_stats(&users),
            users,
        })
    }
}

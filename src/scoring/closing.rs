//! State transition applied when a match day closes.

use crate::scoring::{history::PointsHistory, leaderboard::Leaderboard};

/// New persisted values for one user after a match day closes.
///
/// Clearing the starred match and deleting the round's predictions are not part of the
/// update values; the repository applies them to every user in the same transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct UserUpdate {
    pub discord_id: u64,
    pub day_points: Option<i32>,
    pub history: PointsHistory,
}

/// Computes the user updates for closing a match day.
///
/// Participants get their rank points added to their day points and their round points
/// recorded in the history slot of this round. Everybody else only has their history
/// padded with empty slots so it stays aligned with round numbers.
///
/// # Arguments
/// - `round_number` - One-based number of the closing match day
/// - `leaderboard` - Final leaderboard of the match day
///
/// # Returns
/// - `Vec<UserUpdate>` - One update per leaderboard entry, in leaderboard order
pub fn close_match_day(round_number: u32, leaderboard: &Leaderboard) -> Vec<UserUpdate> {
    leaderboard
        .entries
        .iter()
        .map(|entry| {
            let mut history = entry.user.history.clone();
            let day_points = if entry.participated {
                history.record(round_number, entry.current_points);
                Some(entry.user.day_points.unwrap_or_default() + entry.rank_points)
            } else {
                history.pad_to(round_number as usize);
                entry.user.day_points
            };

            UserUpdate {
                discord_id: entry.user.discord_id,
                day_points,
                history,
            }
        })
        .collect()
}

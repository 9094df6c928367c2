//! Round leaderboard resolution and rank-point distribution.

use std::collections::{HashMap, HashSet};

use crate::{
    model::{football::Match, prediction::UserPrediction, user::User},
    scoring::points::{round_points, RoundPoints},
};

/// One row of a round leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub user: User,
    /// Points realized so far in the round.
    pub current_points: i32,
    /// Day points awarded for this position if the round closed now.
    pub rank_points: i32,
    /// Best total still attainable in the round.
    pub max_points: i32,
    /// Whether the user predicted at least one match of the round.
    pub participated: bool,
}

/// Ordered leaderboard of a round: participants by points, then non-participants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn participants(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter().filter(|entry| entry.participated)
    }

    /// Sum of rank points handed out by this leaderboard.
    pub fn rank_points_total(&self) -> i32 {
        self.entries.iter().map(|entry| entry.rank_points).sum()
    }
}

/// Scores every user for a round and orders the result.
///
/// Participants are sorted by current points, highest first, keeping input order among
/// equal scores. Each group of equal scores is one rank bucket and every member gets
/// `ceil(n / 2) - start`, where `n` is the number of participants and `start` the
/// position of the bucket's first member. Users without any prediction for the round
/// follow all participants and receive no rank points.
///
/// # Arguments
/// - `users` - Every registered player
/// - `predictions` - Stored predictions; rows for matches outside the round are ignored
/// - `matches` - Current snapshots of the round's matches
///
/// # Returns
/// - `Leaderboard` - Ordered entries with rank and maximum points filled in
pub fn resolve_leaderboard(
    users: &[User],
    predictions: &[UserPrediction],
    matches: &[Match],
) -> Leaderboard {
    let round_match_ids: HashSet<&str> = matches.iter().map(|m| m.id.as_str()).collect();

    let mut by_user: HashMap<u64, HashMap<&str, &str>> = HashMap::new();
    for row in predictions
        .iter()
        .filter(|row| round_match_ids.contains(row.match_id.as_str()))
    {
        by_user
            .entry(row.user_id)
            .or_default()
            .insert(row.match_id.as_str(), row.prediction.as_str());
    }

    let empty = HashMap::new();
    let (mut participants, mut absentees): (Vec<_>, Vec<_>) = users
        .iter()
        .map(|user| {
            let user_predictions = by_user.get(&user.discord_id).unwrap_or(&empty);
            let RoundPoints { current, max } = round_points(user, user_predictions, matches);

            LeaderboardEntry {
                user: user.clone(),
                current_points: current,
                rank_points: 0,
                max_points: max,
                participated: !user_predictions.is_empty(),
            }
        })
        .partition(|entry| entry.participated);

    participants.sort_by(|a, b| b.current_points.cmp(&a.current_points));
    absentees.sort_by(|a, b| b.current_points.cmp(&a.current_points));
    assign_rank_points(&mut participants);

    participants.extend(absentees);
    Leaderboard {
        entries: participants,
    }
}

/// Fills in rank points for entries already sorted by current points.
fn assign_rank_points(sorted: &mut [LeaderboardEntry]) {
    let top = sorted.len().div_ceil(2) as i32;
    let mut start = 0;

    for bucket in sorted.chunk_by_mut(|a, b| a.current_points == b.current_points) {
        let rank_points = top - start as i32;
        for entry in bucket.iter_mut() {
            entry.rank_points = rank_points;
        }
        start += bucket.len();
    }
}

//! Overall standings ordering.

use crate::{
    model::user::User,
    scoring::stats::{calculate_average_points, calculate_wins},
};

/// A player's row in the overall standings.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub user: User,
    /// Accumulated day points, 0 before the player's first closed round.
    pub day_points: i32,
    pub wins: u32,
    pub average: f64,
}

/// Orders every player for the overall standings.
///
/// Sorted by day points, then round wins, then average points, all descending. Players
/// equal on all three keep their input order.
///
/// # Arguments
/// - `users` - Every registered player
///
/// # Returns
/// - `Vec<Standing>` - One row per player, best first
pub fn sort_leaderboard(users: &[User]) -> Vec<Standing> {
    let wins = calculate_wins(users);
    let averages = calculate_average_points(users);

    let mut standings: Vec<Standing> = users
        .iter()
        .map(|user| Standing {
            user: user.clone(),
            day_points: user.day_points.unwrap_or_default(),
            wins: wins.get(&user.discord_id).copied().unwrap_or_default(),
            average: averages
                .get(&user.discord_id)
                .copied()
                .unwrap_or_default(),
        })
        .collect();

    standings.sort_by(|a, b| {
        b.day_points
            .cmp(&a.day_points)
            .then_with(|| b.wins.cmp(&a.wins))
            .then_with(|| b.average.total_cmp(&a.average))
    });

    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures::{user, user_with_history};

    fn order(standings: &[Standing]) -> Vec<u64> {
        standings
            .iter()
            .map(|standing| standing.user.discord_id)
            .collect()
    }

    fn with_day_points(mut user: User, day_points: i32) -> User {
        user.day_points = Some(day_points);
        user
    }

    #[test]
    fn day_points_come_first() {
        let users = vec![
            with_day_points(user_with_history(1, "9,9"), 1),
            with_day_points(user_with_history(2, "1,1"), 4),
        ];

        assert_eq!(order(&sort_leaderboard(&users)), vec![2, 1]);
    }

    #[test]
    fn wins_break_day_point_ties() {
        let users = vec![
            with_day_points(user_with_history(1, "3,4"), 2),
            with_day_points(user_with_history(2, "5,4"), 2),
        ];

        let standings = sort_leaderboard(&users);

        assert_eq!(order(&standings), vec![2, 1]);
        assert_eq!(standings[0].wins, 2);
        assert_eq!(standings[1].wins, 1);
    }

    #[test]
    fn average_breaks_win_ties() {
        let users = vec![
            with_day_points(user_with_history(1, "4,1,"), 0),
            with_day_points(user_with_history(2, "1,4,4"), 0),
            with_day_points(user_with_history(3, ",,5"), 0),
        ];

        let standings = sort_leaderboard(&users);

        assert_eq!(order(&standings), vec![3, 2, 1]);
        assert_eq!(standings[2].average, 2.5);
    }

    #[test]
    fn missing_day_points_count_as_zero() {
        let users = vec![user(1), with_day_points(user(2), -1), with_day_points(user(3), 0)];

        let standings = sort_leaderboard(&users);

        assert_eq!(order(&standings), vec![1, 3, 2]);
        assert_eq!(standings[0].day_points, 0);
    }
}

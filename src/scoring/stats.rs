//! Aggregation over the points history of every player.
//!
//! Every figure is derived from the per-round history alone. Empty slots mean the player sat
//! the round out; they never count as a score of zero.

use std::{cmp::Ordering, collections::HashMap};

use crate::model::user::User;

/// Summary of one closed round that had at least one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStats {
    /// One-based round number.
    pub round: u32,
    /// Players sharing the top score, in input order.
    pub winners: Vec<u64>,
    pub top_points: i32,
    /// Score of the second entry in descending order; equals `top_points` on a shared win.
    pub runner_up_points: Option<i32>,
    pub total_points: i32,
    pub participants: usize,
}

impl RoundStats {
    /// Margin between the winner and the runner-up, `None` with a single participant.
    pub fn gap(&self) -> Option<i32> {
        self.runner_up_points.map(|runner_up| self.top_points - runner_up)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestRound {
    pub round: u32,
    pub holders: Vec<u64>,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HighestAverage {
    pub holders: Vec<u64>,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blowout {
    pub round: u32,
    pub winners: Vec<u64>,
    pub gap: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Streak {
    pub holders: Vec<u64>,
    pub length: u32,
}

/// Records across all closed rounds.
///
/// Earlier rounds keep a record when a later round only equals it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverallStats {
    pub best_round: Option<BestRound>,
    pub highest_average: Option<HighestAverage>,
    pub biggest_blowout: Option<Blowout>,
    pub longest_streak: Option<Streak>,
    pub rounds_played: usize,
    pub total_points: i32,
}

/// Builds the summary of every round any player took part in.
///
/// Rounds where every slot is empty are skipped.
pub fn round_stats(users: &[User]) -> Vec<RoundStats> {
    let rounds = users
        .iter()
        .map(|user| user.history.len())
        .max()
        .unwrap_or_default();

    (0..rounds)
        .filter_map(|index| {
            let mut scores: Vec<(u64, i32)> = users
                .iter()
                .filter_map(|user| {
                    user.history
                        .slots()
                        .get(index)
                        .copied()
                        .flatten()
                        .map(|points| (user.discord_id, points))
                })
                .collect();
            scores.sort_by(|a, b| b.1.cmp(&a.1));

            let &(_, top_points) = scores.first()?;
            Some(RoundStats {
                round: index as u32 + 1,
                winners: scores
                    .iter()
                    .take_while(|(_, points)| *points == top_points)
                    .map(|(discord_id, _)| *discord_id)
                    .collect(),
                top_points,
                runner_up_points: scores.get(1).map(|(_, points)| *points),
                total_points: scores.iter().map(|(_, points)| points).sum(),
                participants: scores.len(),
            })
        })
        .collect()
}

/// Counts round wins per player; tied winners each get the win.
///
/// # Arguments
/// - `users` - Every registered player
///
/// # Returns
/// - `HashMap<u64, u32>` - Wins keyed by Discord ID, with an entry for every player
pub fn calculate_wins(users: &[User]) -> HashMap<u64, u32> {
    let mut wins: HashMap<u64, u32> = users.iter().map(|user| (user.discord_id, 0)).collect();

    for round in round_stats(users) {
        for winner in round.winners {
            *wins.entry(winner).or_default() += 1;
        }
    }

    wins
}

/// Average points per participated round, keyed by Discord ID; 0 without history.
pub fn calculate_average_points(users: &[User]) -> HashMap<u64, f64> {
    users
        .iter()
        .map(|user| (user.discord_id, user.history.average()))
        .collect()
}

/// Reduces all rounds to the all-time records shown in the stats embed.
///
/// A win streak counts consecutive non-empty rounds in which the player was among the
/// winners. Rounds nobody took part in do not break a streak.
///
/// # Arguments
/// - `users` - Every registered player
///
/// # Returns
/// - `OverallStats` - Records, `None` where no round qualifies
pub fn overall_stats(users: &[User]) -> OverallStats {
    let rounds = round_stats(users);
    let mut stats = OverallStats {
        highest_average: highest_average(users),
        rounds_played: rounds.len(),
        total_points: rounds.iter().map(|round| round.total_points).sum(),
        ..Default::default()
    };
    let mut streaks: HashMap<u64, u32> = HashMap::new();

    for round in &rounds {
        if stats
            .best_round
            .as_ref()
            .is_none_or(|best| round.top_points > best.points)
        {
            stats.best_round = Some(BestRound {
                round: round.round,
                holders: round.winners.clone(),
                points: round.top_points,
            });
        }

        if let Some(gap) = round.gap() {
            if stats
                .biggest_blowout
                .as_ref()
                .is_none_or(|blowout| gap > blowout.gap)
            {
                stats.biggest_blowout = Some(Blowout {
                    round: round.round,
                    winners: round.winners.clone(),
                    gap,
                });
            }
        }

        streaks.retain(|discord_id, _| round.winners.contains(discord_id));
        for &winner in &round.winners {
            let length = streaks.entry(winner).or_default();
            *length += 1;
            record_streak(&mut stats.longest_streak, winner, *length);
        }
    }

    stats
}

fn record_streak(longest: &mut Option<Streak>, discord_id: u64, length: u32) {
    let Some(streak) = longest.as_mut() else {
        *longest = Some(Streak {
            holders: vec![discord_id],
            length,
        });
        return;
    };

    match length.cmp(&streak.length) {
        Ordering::Greater => {
            *streak = Streak {
                holders: vec![discord_id],
                length,
            }
        }
        Ordering::Equal if !streak.holders.contains(&discord_id) => {
            streak.holders.push(discord_id)
        }
        _ => {}
    }
}

fn highest_average(users: &[User]) -> Option<HighestAverage> {
    let mut best: Option<HighestAverage> = None;

    for user in users
        .iter()
        .filter(|user| user.history.participations().next().is_some())
    {
        let average = user.history.average();
        let Some(current) = best.as_mut() else {
            best = Some(HighestAverage {
                holders: vec![user.discord_id],
                average,
            });
            continue;
        };

        match average.total_cmp(&current.average) {
            Ordering::Greater => {
                *current = HighestAverage {
                    holders: vec![user.discord_id],
                    average,
                }
            }
            Ordering::Equal => current.holders.push(user.discord_id),
            Ordering::Less => {}
        }
    }

    best
}

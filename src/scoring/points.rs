//! Per-match and per-round point calculation.

use std::collections::HashMap;

use crate::{
    model::{
        football::{Match, MatchStatus},
        user::User,
    },
    scoring::prediction::{self, Prediction, Score},
};

/// Exact final score predicted.
pub const EXACT_SCORE_POINTS: i32 = 3;
/// Correct outcome on a single-outcome bet.
pub const OUTCOME_POINTS: i32 = 2;
/// Correct outcome on a double-chance bet.
pub const DOUBLE_CHANCE_POINTS: i32 = 1;
/// Wrong outcome on a double-chance bet. Not doubled by a star.
pub const WRONG_DOUBLE_CHANCE_POINTS: i32 = -1;
/// No usable prediction for a match that has kicked off.
pub const MISSING_PREDICTION_POINTS: i32 = -1;

const STAR_MULTIPLIER: i32 = 2;

/// Points of one prediction against one match snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchPoints {
    /// Points already earned; only finished matches and missing predictions realize points.
    pub result_points: i32,
    /// Best total this match can still contribute.
    pub max_potential: i32,
}

impl MatchPoints {
    fn settled(points: i32) -> Self {
        Self {
            result_points: points,
            max_potential: points,
        }
    }

    fn open(max_potential: i32) -> Self {
        Self {
            result_points: 0,
            max_potential,
        }
    }
}

/// Scores a single prediction against a match.
///
/// A missing prediction costs nothing until the match kicks off, then it costs
/// [`MISSING_PREDICTION_POINTS`]. Unfinished matches only contribute to the potential;
/// a starred match doubles every positive value.
///
/// # Arguments
/// - `prediction` - Parsed prediction, `None` if the player has no usable prediction
/// - `fixture` - Current snapshot of the match
/// - `starred` - Whether the match is the player's starred pick
///
/// # Returns
/// - `MatchPoints` - Realized points and remaining potential for this match
pub fn score_match(prediction: Option<&Prediction>, fixture: &Match, starred: bool) -> MatchPoints {
    let multiplier = if starred { STAR_MULTIPLIER } else { 1 };

    let Some(prediction) = prediction else {
        return if fixture.has_started() {
            MatchPoints::settled(MISSING_PREDICTION_POINTS)
        } else {
            MatchPoints::default()
        };
    };

    match fixture.status {
        MatchStatus::ToBePlayed | MatchStatus::Postponed => {
            MatchPoints::open(potential(prediction, None) * multiplier)
        }
        MatchStatus::Live => {
            MatchPoints::open(potential(prediction, Some(fixture.score())) * multiplier)
        }
        MatchStatus::Finished => {
            MatchPoints::settled(realized(prediction, fixture.score(), multiplier))
        }
    }
}

/// Unmultiplied best case for a prediction on an unfinished match.
fn potential(prediction: &Prediction, current: Option<Score>) -> i32 {
    match prediction {
        Prediction::SingleOutcome {
            exact_score: Some(exact),
            ..
        } => {
            if current.is_none_or(|score| exact.reachable_from(score)) {
                EXACT_SCORE_POINTS
            } else {
                OUTCOME_POINTS
            }
        }
        Prediction::SingleOutcome {
            exact_score: None, ..
        } => OUTCOME_POINTS,
        Prediction::DoubleChance { .. } => DOUBLE_CHANCE_POINTS,
    }
}

fn realized(prediction: &Prediction, final_score: Score, multiplier: i32) -> i32 {
    let outcome = final_score.outcome();

    match prediction {
        Prediction::SingleOutcome {
            exact_score: Some(exact),
            ..
        } if *exact == final_score => EXACT_SCORE_POINTS * multiplier,
        Prediction::SingleOutcome { .. } if prediction.covers(outcome) => {
            OUTCOME_POINTS * multiplier
        }
        Prediction::SingleOutcome { .. } => 0,
        Prediction::DoubleChance { .. } if prediction.covers(outcome) => {
            DOUBLE_CHANCE_POINTS * multiplier
        }
        Prediction::DoubleChance { .. } => WRONG_DOUBLE_CHANCE_POINTS,
    }
}

/// A player's totals for one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundPoints {
    pub current: i32,
    pub max: i32,
}

/// Sums a player's points over every match of a round.
///
/// Prediction texts that fail to parse are scored like missing predictions.
///
/// # Arguments
/// - `user` - The player, used for the starred match
/// - `predictions` - The player's prediction texts keyed by match id
/// - `matches` - Every match of the round
///
/// # Returns
/// - `RoundPoints` - Realized and maximum attainable points for the round
pub fn round_points(
    user: &User,
    predictions: &HashMap<&str, &str>,
    matches: &[Match],
) -> RoundPoints {
    matches.iter().fold(RoundPoints::default(), |total, fixture| {
        let parsed = predictions
            .get(fixture.id.as_str())
            .and_then(|text| prediction::parse(text).ok());
        let points = score_match(parsed.as_ref(), fixture, user.has_starred(&fixture.id));

        RoundPoints {
            current: total.current + points.result_points,
            max: total.max + points.max_potential,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures::{finished, fixture, live, scheduled, user};

    fn score(text: &str, fixture: &Match, starred: bool) -> MatchPoints {
        let parsed = prediction::parse(text).unwrap();
        score_match(Some(&parsed), fixture, starred)
    }

    #[test]
    fn finished_exact_score() {
        let m = finished("m1", 2, 0);

        assert_eq!(score("1 (2-0)", &m, false), MatchPoints::settled(3));
        assert_eq!(score("1 (2-0)", &m, true), MatchPoints::settled(6));
    }

    #[test]
    fn finished_correct_outcome_with_wrong_score() {
        let m = finished("m1", 3, 1);

        assert_eq!(score("1 (2-0)", &m, false), MatchPoints::settled(2));
        assert_eq!(score("1", &m, false), MatchPoints::settled(2));
        assert_eq!(score("1", &m, true), MatchPoints::settled(4));
    }

    #[test]
    fn finished_double_chance() {
        let m = finished("m1", 1, 1);

        assert_eq!(score("1X", &m, false), MatchPoints::settled(1));
        assert_eq!(score("X2", &m, true), MatchPoints::settled(2));
        assert_eq!(score("12", &m, false), MatchPoints::settled(-1));
        assert_eq!(score("12", &m, true), MatchPoints::settled(-1));
    }

    #[test]
    fn finished_wrong_single_outcome_scores_nothing() {
        let m = finished("m1", 0, 2);

        assert_eq!(score("1", &m, true), MatchPoints::settled(0));
        assert_eq!(score("X (1-1)", &m, false), MatchPoints::settled(0));
    }

    #[test]
    fn points_are_monotonic_in_prediction_quality() {
        let m = finished("m1", 2, 1);
        let exact = score("1 (2-1)", &m, false).result_points;
        let outcome = score("1", &m, false).result_points;
        let double = score("1X", &m, false).result_points;
        let wrong = score("2", &m, false).result_points;

        assert!(exact >= outcome);
        assert!(outcome >= double);
        assert!(double >= wrong);
    }

    #[test]
    fn unplayed_match_only_has_potential() {
        let m = scheduled("m1");

        assert_eq!(score("1 (2-0)", &m, false), MatchPoints::open(3));
        assert_eq!(score("1 (2-0)", &m, true), MatchPoints::open(6));
        assert_eq!(score("X", &m, false), MatchPoints::open(2));
        assert_eq!(score("X", &m, true), MatchPoints::open(4));
        assert_eq!(score("1X", &m, false), MatchPoints::open(1));
        assert_eq!(score("1X", &m, true), MatchPoints::open(2));
    }

    #[test]
    fn postponed_match_counts_as_unplayed() {
        let m = fixture("m1", MatchStatus::Postponed, None);

        assert_eq!(score("2", &m, false), MatchPoints::open(2));
        assert_eq!(score_match(None, &m, false), MatchPoints::default());
    }

    #[test]
    fn live_exact_score_degrades_once_unreachable() {
        assert_eq!(score("1 (2-0)", &live("m1", 1, 0), false), MatchPoints::open(3));
        assert_eq!(score("1 (2-0)", &live("m1", 0, 1), false), MatchPoints::open(2));
        assert_eq!(score("1 (2-0)", &live("m1", 3, 0), true), MatchPoints::open(4));
    }

    #[test]
    fn missing_prediction_is_penalized_only_after_kickoff() {
        assert_eq!(score_match(None, &scheduled("m1"), false), MatchPoints::default());
        assert_eq!(score_match(None, &live("m1", 0, 0), false), MatchPoints::settled(-1));
        assert_eq!(score_match(None, &finished("m1", 1, 0), true), MatchPoints::settled(-1));
    }

    #[test]
    fn missing_goal_counts_read_as_zero() {
        let m = fixture("m1", MatchStatus::Finished, None);

        assert_eq!(score("X (0-0)", &m, false), MatchPoints::settled(3));
    }

    #[test]
    fn round_points_sum_matches_and_apply_star() {
        let matches = vec![finished("m1", 2, 0), live("m2", 0, 0), scheduled("m3")];
        let mut player = user(1);
        player.starred_match = Some("m1".to_string());

        let predictions = HashMap::from([("m1", "1"), ("m2", "X (1-1)")]);
        let totals = round_points(&player, &predictions, &matches);

        assert_eq!(totals, RoundPoints { current: 4, max: 7 });
    }

    #[test]
    fn unparsable_prediction_counts_as_missing() {
        let matches = vec![finished("m1", 2, 0)];
        let predictions = HashMap::from([("m1", "banana")]);

        let totals = round_points(&user(1), &predictions, &matches);

        assert_eq!(totals, RoundPoints { current: -1, max: -1 });
    }
}

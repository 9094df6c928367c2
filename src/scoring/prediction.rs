//! Prediction text parsing.
//!
//! Predictions are stored as the text the player submitted. This module is the only place
//! that interprets that text: the submission path uses it to reject bad input, and the
//! scoring path uses it to turn stored rows back into typed values.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Highest goal count accepted in an exact-score prediction.
pub const MAX_GOALS: u32 = 999;

static PREDICTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(1X|12|X2|1|X|2)(?:\s*\(([0-9]+)\s*-\s*([0-9]+)\))?$")
        .expect("prediction pattern is a valid regex")
});

/// Result class of a football match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Home win, written `1`.
    Home,
    /// Draw, written `X`.
    Draw,
    /// Away win, written `2`.
    Away,
}

impl Outcome {
    fn from_token(token: char) -> Option<Self> {
        match token {
            '1' => Some(Self::Home),
            'X' => Some(Self::Draw),
            '2' => Some(Self::Away),
            _ => None,
        }
    }

    fn token(self) -> char {
        match self {
            Self::Home => '1',
            Self::Draw => 'X',
            Self::Away => '2',
        }
    }
}

/// A scoreline, either predicted or observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Outcome class this scoreline belongs to.
    pub fn outcome(&self) -> Outcome {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Outcome::Home,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Away,
        }
    }

    /// Whether a match currently at `current` can still end on this scoreline.
    ///
    /// Goals are never taken back, so neither side may already be above its target.
    pub fn reachable_from(&self, current: Score) -> bool {
        current.home <= self.home && current.away <= self.away
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// A parsed prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    /// A single outcome, optionally narrowed to an exact score consistent with it.
    SingleOutcome {
        outcome: Outcome,
        exact_score: Option<Score>,
    },
    /// A double-chance bet covering two of the three outcomes.
    DoubleChance { outcomes: [Outcome; 2] },
}

impl Prediction {
    /// Whether the prediction counts the given outcome as correct.
    pub fn covers(&self, outcome: Outcome) -> bool {
        match self {
            Self::SingleOutcome { outcome: own, .. } => *own == outcome,
            Self::DoubleChance { outcomes } => outcomes.contains(&outcome),
        }
    }
}

/// Canonical text form, e.g. `1 (2-0)` or `X2`.
impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleOutcome {
                outcome,
                exact_score: Some(score),
            } => write!(f, "{} ({})", outcome.token(), score),
            Self::SingleOutcome {
                outcome,
                exact_score: None,
            } => write!(f, "{}", outcome.token()),
            Self::DoubleChance { outcomes } => {
                write!(f, "{}{}", outcomes[0].token(), outcomes[1].token())
            }
        }
    }
}

/// Reasons a prediction text is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    /// Text does not follow `TYPE` or `TYPE (home-away)`.
    #[error("`{0}` is not a valid prediction. Use 1, X, 2, 1X, 12, X2, optionally with a score like `1 (2-0)`")]
    Malformed(String),

    /// An exact score was attached to a double-chance bet.
    #[error("An exact score can only be given with 1, X or 2")]
    ScoreOnDoubleChance,

    /// The exact score does not belong to the predicted outcome.
    #[error("The score {score} does not match the predicted result {outcome}")]
    InconsistentScore { outcome: char, score: Score },

    /// A goal count above the accepted maximum.
    #[error("Goal counts above {MAX_GOALS} are not accepted")]
    ScoreOutOfRange,
}

/// Parses prediction text into a typed [`Prediction`].
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Arguments
/// - `text` - Prediction as typed by the player
///
/// # Returns
/// - `Ok(Prediction)` - Well-formed, internally consistent prediction
/// - `Err(PredictionError)` - Why the text was rejected
pub fn parse(text: &str) -> Result<Prediction, PredictionError> {
    let trimmed = text.trim();
    let captures = PREDICTION_PATTERN
        .captures(trimmed)
        .ok_or_else(|| PredictionError::Malformed(trimmed.to_string()))?;

    let token = captures[1].to_ascii_uppercase();
    let outcomes: Vec<Outcome> = token.chars().filter_map(Outcome::from_token).collect();

    let exact_score = match (captures.get(2), captures.get(3)) {
        (Some(home), Some(away)) => Some(Score::new(
            parse_goals(home.as_str())?,
            parse_goals(away.as_str())?,
        )),
        _ => None,
    };

    match outcomes.as_slice() {
        [outcome] => {
            if let Some(score) = exact_score {
                if score.outcome() != *outcome {
                    return Err(PredictionError::InconsistentScore {
                        outcome: outcome.token(),
                        score,
                    });
                }
            }
            Ok(Prediction::SingleOutcome {
                outcome: *outcome,
                exact_score,
            })
        }
        [first, second] => {
            if exact_score.is_some() {
                return Err(PredictionError::ScoreOnDoubleChance);
            }
            Ok(Prediction::DoubleChance {
                outcomes: [*first, *second],
            })
        }
        _ => Err(PredictionError::Malformed(trimmed.to_string())),
    }
}

fn parse_goals(digits: &str) -> Result<u32, PredictionError> {
    digits
        .parse::<u32>()
        .ok()
        .filter(|goals| *goals <= MAX_GOALS)
        .ok_or(PredictionError::ScoreOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_outcomes() {
        assert_eq!(
            parse("1"),
            Ok(Prediction::SingleOutcome {
                outcome: Outcome::Home,
                exact_score: None
            })
        );
        assert_eq!(
            parse(" x "),
            Ok(Prediction::SingleOutcome {
                outcome: Outcome::Draw,
                exact_score: None
            })
        );
        assert_eq!(
            parse("2"),
            Ok(Prediction::SingleOutcome {
                outcome: Outcome::Away,
                exact_score: None
            })
        );
    }

    #[test]
    fn parses_double_chance() {
        assert_eq!(
            parse("x2"),
            Ok(Prediction::DoubleChance {
                outcomes: [Outcome::Draw, Outcome::Away]
            })
        );
        assert_eq!(
            parse("12"),
            Ok(Prediction::DoubleChance {
                outcomes: [Outcome::Home, Outcome::Away]
            })
        );
    }

    #[test]
    fn parses_exact_score_with_loose_spacing() {
        let expected = Ok(Prediction::SingleOutcome {
            outcome: Outcome::Home,
            exact_score: Some(Score::new(2, 0)),
        });

        assert_eq!(parse("1 (2-0)"), expected);
        assert_eq!(parse("1(2 - 0)"), expected);
    }

    #[test]
    fn rejects_score_on_double_chance() {
        assert_eq!(parse("1X (1-1)"), Err(PredictionError::ScoreOnDoubleChance));
    }

    #[test]
    fn rejects_score_contradicting_outcome() {
        assert!(matches!(
            parse("1 (0-0)"),
            Err(PredictionError::InconsistentScore { outcome: '1', .. })
        ));
        assert!(matches!(
            parse("X (2-1)"),
            Err(PredictionError::InconsistentScore { outcome: 'X', .. })
        ));
        assert!(matches!(
            parse("2 (3-1)"),
            Err(PredictionError::InconsistentScore { outcome: '2', .. })
        ));
    }

    #[test]
    fn rejects_goal_counts_above_limit() {
        assert_eq!(parse("1 (1000-0)"), Err(PredictionError::ScoreOutOfRange));
        assert_eq!(
            parse("2 (0-99999999999)"),
            Err(PredictionError::ScoreOutOfRange)
        );
        assert!(parse("1 (999-0)").is_ok());
    }

    #[test]
    fn rejects_malformed_text() {
        for text in [
            "",
            "3",
            "1X2",
            "home",
            "1 (2-)",
            "X1",
            "1 2-0",
            "1 ( 2-0 )",
            "1 (2-0 )",
            "1 (٢-0)",
        ] {
            assert!(
                matches!(parse(text), Err(PredictionError::Malformed(_))),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(parse("1x").unwrap().to_string(), "1X");
        assert_eq!(parse("2(0 -3)").unwrap().to_string(), "2 (0-3)");
    }
}

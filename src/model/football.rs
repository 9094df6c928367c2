//! Football match snapshots as reported by the match provider.

use chrono::{DateTime, Utc};

use crate::scoring::prediction::Score;

/// Lifecycle state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    ToBePlayed,
    Live,
    Finished,
    Postponed,
}

/// One match at the time of polling.
///
/// Goal counts are `None` until the provider reports a score.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Provider id of the match
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
    pub status: MatchStatus,
    pub kickoff: DateTime<Utc>,
}

impl Match {
    /// Current scoreline with missing goal counts read as 0.
    pub fn score(&self) -> Score {
        Score::new(
            self.home_goals.unwrap_or_default(),
            self.away_goals.unwrap_or_default(),
        )
    }

    /// Whether the match is in play or over.
    pub fn has_started(&self) -> bool {
        matches!(self.status, MatchStatus::Live | MatchStatus::Finished)
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }
}

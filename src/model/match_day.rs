//! Match day (round) domain models and parameters.

use chrono::{DateTime, Duration, Utc};

use crate::{
    error::{internal::InternalError, AppError},
    model::football::Match,
    util::parse::parse_u64_from_string,
};

/// How long before the first kickoff predictions and stars are locked.
pub const LOCK_BEFORE_KICKOFF_MINUTES: i64 = 5;

/// A round of matches that is predicted on together.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDay {
    pub id: i32,
    /// One-based round number, also the provider's match day number.
    pub number: u32,
    pub closed: bool,
    /// Discord message carrying the live leaderboard, once posted.
    pub message_id: Option<u64>,
    /// Matches of the round ordered by their position.
    pub matches: Vec<MatchDayMatch>,
}

impl MatchDay {
    /// Converts the entity models of a round and its matches to the domain model.
    ///
    /// # Returns
    /// - `Ok(MatchDay)` - Converted round with matches sorted by position
    /// - `Err(AppError::InternalError)` - Negative round number or malformed message ID
    pub fn from_entity(
        entity: entity::match_day::Model,
        matches: Vec<entity::match_day_match::Model>,
    ) -> Result<Self, AppError> {
        let number = u32::try_from(entity.number).map_err(|_| InternalError::InvalidRoundNumber {
            value: entity.number,
        })?;
        let message_id = entity
            .message_id
            .map(parse_u64_from_string)
            .transpose()?;

        let mut matches: Vec<MatchDayMatch> =
            matches.into_iter().map(MatchDayMatch::from_entity).collect();
        matches.sort_by_key(|m| m.position);

        Ok(Self {
            id: entity.id,
            number,
            closed: entity.closed,
            message_id,
            matches,
        })
    }

    /// Moment after which predictions and stars are refused.
    ///
    /// `None` for a round without matches.
    pub fn locks_at(&self) -> Option<DateTime<Utc>> {
        self.matches
            .iter()
            .map(|m| m.kickoff_at)
            .min()
            .map(|first_kickoff| first_kickoff - Duration::minutes(LOCK_BEFORE_KICKOFF_MINUTES))
    }

    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        self.locks_at().is_none_or(|lock| now >= lock)
    }

    /// Looks up a match by its one-based position as shown to players.
    pub fn match_at(&self, position: u32) -> Option<&MatchDayMatch> {
        self.matches.iter().find(|m| m.position == position)
    }

    pub fn match_ids(&self) -> Vec<String> {
        self.matches.iter().map(|m| m.match_id.clone()).collect()
    }
}

/// A match as captured when its round was opened.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDayMatch {
    pub match_id: String,
    /// One-based position within the round.
    pub position: u32,
    pub home_team: String,
    pub away_team: String,
    pub kickoff_at: DateTime<Utc>,
}

impl MatchDayMatch {
    pub fn from_entity(entity: entity::match_day_match::Model) -> Self {
        Self {
            match_id: entity.match_id,
            position: entity.position.max(0) as u32,
            home_team: entity.home_team,
            away_team: entity.away_team,
            kickoff_at: entity.kickoff_at,
        }
    }

    /// `Home - Away` label used in replies and embeds.
    pub fn label(&self) -> String {
        format!("{} - {}", self.home_team, self.away_team)
    }
}

/// Parameters for opening a new round from a provider snapshot.
#[derive(Debug, Clone)]
pub struct CreateMatchDayParam {
    pub number: u32,
    /// Matches in display order; positions are assigned from 1.
    pub matches: Vec<Match>,
}

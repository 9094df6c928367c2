//! Match day orchestration.
//!
//! This module provides the `MatchDayService` that drives a round through its lifecycle.
//! Every tick re-derives the state from the database and a fresh provider snapshot:
//!
//! - no open round: open the provider's current match day if it is newer than the last one
//! - open round with unfinished matches: resolve the live leaderboard
//! - open round with every match finished: close it and hand out day points
//!
//! Ticks never keep state between runs, so a failed tick is simply retried by the next.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{match_day::MatchDayRepository, prediction::PredictionRepository, user::UserRepository},
    error::AppError,
    model::{
        football::Match,
        match_day::{CreateMatchDayParam, MatchDay},
    },
    provider::MatchSource,
    scoring::{
        closing::close_match_day,
        leaderboard::{resolve_leaderboard, Leaderboard},
    },
};

/// A round together with the provider's view of its matches and the resulting leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSnapshot {
    pub match_day: MatchDay,
    /// Provider snapshots of the round's matches, in round position order.
    pub matches: Vec<Match>,
    pub leaderboard: Leaderboard,
}

impl RoundSnapshot {
    /// Whether the round can be closed: every captured match is present and finished.
    ///
    /// Postponed matches keep the round open.
    pub fn is_complete(&self) -> bool {
        !self.match_day.matches.is_empty()
            && self.matches.len() == self.match_day.matches.len()
            && self.matches.iter().all(Match::is_finished)
    }
}

/// What a tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Nothing to do; no round is open and the provider has no new one.
    Idle,
    /// A new round was opened.
    Opened(RoundSnapshot),
    /// The open round's leaderboard was refreshed.
    Updated(RoundSnapshot),
    /// The open round finished and was closed.
    Closed(RoundSnapshot),
}

/// Service driving match days from opening to closing.
pub struct MatchDayService<'a> {
    db: &'a DatabaseConnection,
    source: &'a dyn MatchSource,
}

impl<'a> MatchDayService<'a> {
    /// Creates a new MatchDayService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `source` - Provider of fixtures and live scores
    ///
    /// # Returns
    /// - `MatchDayService` - New service instance
    pub fn new(db: &'a DatabaseConnection, source: &'a dyn MatchSource) -> Self {
        Self { db, source }
    }

    /// Advances the match day lifecycle by one step.
    ///
    /// # Arguments
    /// - `now` - Current time, used only for logging the lock state
    ///
    /// # Returns
    /// - `Ok(TickOutcome)` - What changed during this tick
    /// - `Err(AppError)` - Provider or database failure; nothing was written if the round
    ///   close failed
    pub async fn tick(&self, now: DateTime<Utc>) -> Result<TickOutcome, AppError> {
        let repo = MatchDayRepository::new(self.db);

        let Some(round) = repo.find_open().await? else {
            return self.open_next(&repo).await;
        };

        if !round.is_locked(now) {
            tracing::debug!("Match day {} still accepting predictions", round.number);
        }

        let snapshot = self.snapshot(round).await?;
        if !snapshot.is_complete() {
            return Ok(TickOutcome::Updated(snapshot));
        }

        let updates = close_match_day(snapshot.match_day.number, &snapshot.leaderboard);
        repo.close(snapshot.match_day.id, &updates).await?;

        tracing::info!(
            "Closed match day {} with {} participants, {} day points handed out",
            snapshot.match_day.number,
            snapshot.leaderboard.participants().count(),
            snapshot.leaderboard.rank_points_total()
        );

        let mut snapshot = snapshot;
        snapshot.match_day.closed = true;
        Ok(TickOutcome::Closed(snapshot))
    }

    async fn open_next(&self, repo: &MatchDayRepository<'_>) -> Result<TickOutcome, AppError> {
        let current = self.source.current_match_day().await?;

        if let Some(latest) = repo.find_latest().await? {
            if latest.number >= current {
                return Ok(TickOutcome::Idle);
            }
        }

        let mut matches = self.source.fetch_match_day(current).await?;
        if matches.is_empty() {
            tracing::warn!("Provider returned no matches for match day {}", current);
            return Ok(TickOutcome::Idle);
        }
        matches.sort_by_key(|m| m.kickoff);

        let round = repo
            .create(CreateMatchDayParam {
                number: current,
                matches,
            })
            .await?;

        tracing::info!(
            "Opened match day {} with {} matches",
            round.number,
            round.matches.len()
        );

        Ok(TickOutcome::Opened(self.snapshot(round).await?))
    }

    async fn snapshot(&self, round: MatchDay) -> Result<RoundSnapshot, AppError> {
        let fetched = self.source.fetch_match_day(round.number).await?;
        let matches = align_with_round(&round, fetched);

        let users = UserRepository::new(self.db).get_all().await?;
        let predictions = PredictionRepository::new(self.db)
            .get_for_matches(&round.match_ids())
            .await?;

        let leaderboard = resolve_leaderboard(&users, &predictions, &matches);

        Ok(RoundSnapshot {
            match_day: round,
            matches,
            leaderboard,
        })
    }
}

/// Keeps the provider matches that belong to the round, in round position order.
///
/// Matches the provider added to the match day after the round opened are ignored.
fn align_with_round(round: &MatchDay, fetched: Vec<Match>) -> Vec<Match> {
    let mut by_id: HashMap<String, Match> =
        fetched.into_iter().map(|m| (m.id.clone(), m)).collect();

    round
        .matches
        .iter()
        .filter_map(|captured| {
            let found = by_id.remove(&captured.match_id);
            if found.is_none() {
                tracing::warn!(
                    "Match {} of match day {} missing from provider snapshot",
                    captured.match_id,
                    round.number
                );
            }
            found
        })
        .collect()
}

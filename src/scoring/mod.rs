//! Scoring and leaderboard engine for the prediction game.
//!
//! Everything in this module is pure computation over in-memory snapshots: no database
//! access, no Discord calls, no clock reads. The services fetch matches, users and
//! predictions, hand them to the engine, and persist whatever the engine returns.
//!
//! # Pipeline
//!
//! The engine is organised leaves first:
//!
//! 1. **Parsing** (`prediction`) - turns submitted text such as `1X` or `2 (0-1)` into a
//!    typed [`Prediction`](prediction::Prediction)
//! 2. **Per-match scoring** (`points`) - realized and still-attainable points for one
//!    prediction against one match snapshot
//! 3. **Leaderboard** (`leaderboard`) - per-user round totals, ordering and rank points
//! 4. **Round closing** (`closing`) - the state transition applied when a match day ends
//! 5. **History** (`history`, `stats`, `standings`) - wins, averages, streaks, records and
//!    the overall display ordering

pub mod closing;
pub mod history;
pub mod leaderboard;
pub mod points;
pub mod prediction;
pub mod standings;
pub mod stats;

#[cfg(test)]
pub(crate) mod fixtures;

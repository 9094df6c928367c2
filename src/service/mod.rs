//! Service layer for business logic and orchestration.
//!
//! Services sit between the Discord layer and the repositories. They validate player
//! requests, feed database and provider snapshots into the scoring engine, and persist
//! what the engine returns. Services work with domain models only.

pub mod match_day;
pub mod notification;
pub mod prediction;
pub mod standings;

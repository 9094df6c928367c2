//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and are
//! what services, the scoring engine and the Discord layer work with. Ids that Discord
//! hands out as snowflakes are carried as `u64` here and stored as strings.

pub mod football;
pub mod match_day;
pub mod prediction;
pub mod user;

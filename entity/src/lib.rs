//! SeaORM entity models for the prediction game tables.

pub mod prelude;

pub mod match_day;
pub mod match_day_match;
pub mod prediction;
pub mod user;

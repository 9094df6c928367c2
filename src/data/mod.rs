//! Database repository layer for the prediction game.
//!
//! Each repository wraps a borrowed `DatabaseConnection` and converts SeaORM entity models
//! into domain models at the boundary, so services never see entity types.

pub mod match_day;
pub mod prediction;
pub mod user;

#[cfg(test)]
mod test;

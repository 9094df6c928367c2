//! Matchday Test Utils
//!
//! Shared testing utilities for the prediction game. Provides a builder for test contexts
//! backed by in-memory SQLite databases plus factories for players, rounds and predictions.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn closes_round() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_game_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let (round, matches) = factory::helpers::create_match_day_with_matches(&db, 1, 3).await?;
//! factory::create_prediction(&db, &user.discord_id, &matches[0].match_id, "1").await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .discord_id("987654321")
//!     .day_points(Some(4))
//!     .history("3,,1")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod match_day;
pub mod prediction;
pub mod user;

pub use match_day::{create_match_day, create_match_day_match};
pub use prediction::create_prediction;
pub use user::create_user;

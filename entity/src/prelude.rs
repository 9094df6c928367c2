pub use super::match_day::Entity as MatchDay;
pub use super::match_day_match::Entity as MatchDayMatch;
pub use super::prediction::Entity as Prediction;
pub use super::user::Entity as User;

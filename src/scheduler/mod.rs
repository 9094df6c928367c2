//! Background jobs.

pub mod match_day;

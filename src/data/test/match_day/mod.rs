use crate::{
    data::{match_day::MatchDayRepository, prediction::PredictionRepository, user::UserRepository},
    error::AppError,
    model::match_day::CreateMatchDayParam,
    scoring::{closing::UserUpdate, fixtures::scheduled, history::PointsHistory},
};
use test_utils::{builder::TestBuilder, factory};

mod close;
mod create;
mod find_open;
mod set_message_id;

use crate::{
    data::user::UserRepository, error::AppError, model::user::UpsertUserParam,
};
use test_utils::{builder::TestBuilder, factory};

mod find_by_discord_id;
mod get_all;
mod set_starred_match;
mod upsert;

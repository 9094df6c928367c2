use crate::{
    data::prediction::PredictionRepository, error::AppError,
    model::prediction::UpsertPredictionParam,
};
use test_utils::{builder::TestBuilder, factory};

mod get_for_matches;
mod upsert;

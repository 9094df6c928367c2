mod bot;
mod config;
mod data;
mod error;
mod model;
mod provider;
mod scheduler;
mod scoring;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config, error::AppError, provider::football_data::FootballDataClient,
    scheduler::match_day, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let match_source = Arc::new(FootballDataClient::new(
        http_client,
        config.football_data_url.clone(),
        config.football_data_token.clone(),
        config.football_data_competition.clone(),
    ));

    tracing::info!(
        "Starting prediction game for competition {}",
        config.football_data_competition
    );

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config, db.clone()).await?;

    let state = AppState::new(db, discord_http, match_source, config.discord_channel_id);
    if let Err(e) = match_day::start_scheduler(state).await {
        tracing::error!("Match day scheduler error: {}", e);
    }

    bot::start::start_bot(bot_client).await
}

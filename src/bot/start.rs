use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting it.
///
/// The client's HTTP handle is returned alongside so other services can post messages
/// before and while the gateway connection runs.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and guild ID
/// - `db` - Database connection for the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP handle
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Http>), AppError> {
    let handler = Handler::new(db, config.discord_guild_id);

    let client = Client::builder(&config.discord_bot_token, GatewayIntents::GUILDS)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and runs until the connection ends.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

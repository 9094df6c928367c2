use crate::error::{config::ConfigError, AppError};

const DEFAULT_FOOTBALL_DATA_URL: &str = "https://api.football-data.org/v4";
const DEFAULT_COMPETITION: &str = "PL";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    /// Guild the slash commands are registered in.
    pub discord_guild_id: u64,
    /// Channel for the live leaderboard and standings messages.
    pub discord_channel_id: u64,

    pub football_data_token: String,
    /// Competition code, e.g. `PL` or `BL1`.
    pub football_data_competition: String,
    pub football_data_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_guild_id: required_id("DISCORD_GUILD_ID")?,
            discord_channel_id: required_id("DISCORD_CHANNEL_ID")?,
            football_data_token: required("FOOTBALL_DATA_TOKEN")?,
            football_data_competition: std::env::var("FOOTBALL_DATA_COMPETITION")
                .unwrap_or_else(|_| DEFAULT_COMPETITION.to_string()),
            football_data_url: std::env::var("FOOTBALL_DATA_URL")
                .unwrap_or_else(|_| DEFAULT_FOOTBALL_DATA_URL.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn required_id(name: &str) -> Result<u64, ConfigError> {
    let value = required(name)?;
    value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}

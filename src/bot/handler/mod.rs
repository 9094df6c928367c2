use sea_orm::DatabaseConnection;
use serenity::all::{ActivityData, Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;

pub mod command;
pub mod modal;

/// Discord bot event handler
pub struct Handler {
    db: DatabaseConnection,
    /// Guild the slash commands are registered in
    guild_id: u64,
}

impl Handler {
    pub fn new(db: DatabaseConnection, guild_id: u64) -> Self {
        Self { db, guild_id }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::custom("/predict")));

        match GuildId::new(self.guild_id)
            .set_commands(&ctx.http, command::definitions())
            .await
        {
            Ok(commands) => tracing::info!(
                "Registered {} commands in guild {}",
                commands.len(),
                self.guild_id
            ),
            Err(e) => tracing::error!("Failed to register commands: {:?}", e),
        }
    }

    /// Called for every slash command and modal submission
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => command::handle(&ctx, &self.db, &command).await,
            Interaction::Modal(modal) => modal::handle(&ctx, &self.db, &modal).await,
            _ => {}
        }
    }
}

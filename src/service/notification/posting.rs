//! Posting and editing match day messages.

use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, CreateEmbed, CreateMessage, EditMessage, MessageId};

use crate::{
    data::match_day::MatchDayRepository,
    error::AppError,
    scoring::standings::Standing,
    service::match_day::RoundSnapshot,
};

use super::{
    builder::{build_live_embed, build_standings_embed},
    MatchDayNotification,
};

impl<'a> MatchDayNotification<'a> {
    /// Posts or refreshes the live leaderboard of a round.
    ///
    /// Edits the round's stored message when there is one. If there is none yet, or the
    /// edit fails because the message was deleted, a new message is posted and its id
    /// stored on the round.
    ///
    /// # Arguments
    /// - `snapshot` - Round, provider matches and resolved leaderboard
    /// - `now` - Current time
    ///
    /// # Returns
    /// - `Ok(())` - Message posted or edited
    /// - `Err(AppError::DiscordErr)` - Posting a new message failed
    /// - `Err(AppError::DbErr)` - Storing the message id failed
    pub async fn post_live(
        &self,
        snapshot: &RoundSnapshot,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let embed = build_live_embed(snapshot, now)?;
        let channel_id = ChannelId::new(self.channel_id);

        if let Some(message_id) = snapshot.match_day.message_id {
            let edit_message = EditMessage::new().embed(embed.clone());

            match self
                .http
                .edit_message(channel_id, MessageId::new(message_id), &edit_message, vec![])
                .await
            {
                Ok(_) => {
                    tracing::debug!(
                        "Edited live leaderboard of match day {}",
                        snapshot.match_day.number
                    );
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to edit live leaderboard {} of match day {}, posting a new one: {}",
                        message_id,
                        snapshot.match_day.number,
                        e
                    );
                }
            }
        }

        self.post_new_live_message(channel_id, snapshot, embed).await
    }

    /// Posts the overall standings after a round closed.
    ///
    /// # Arguments
    /// - `round_number` - Number of the round that just closed
    /// - `standings` - Overall standings in display order
    ///
    /// # Returns
    /// - `Ok(())` - Message posted
    /// - `Err(AppError::DiscordErr)` - Discord rejected the message
    pub async fn post_final_standings(
        &self,
        round_number: u32,
        standings: &[Standing],
    ) -> Result<(), AppError> {
        let embed = build_standings_embed(
            &format!("Standings after match day {}", round_number),
            standings,
        );

        ChannelId::new(self.channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        tracing::info!("Posted standings after match day {}", round_number);

        Ok(())
    }

    async fn post_new_live_message(
        &self,
        channel_id: ChannelId,
        snapshot: &RoundSnapshot,
        embed: CreateEmbed,
    ) -> Result<(), AppError> {
        let message = channel_id
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        MatchDayRepository::new(self.db)
            .set_message_id(snapshot.match_day.id, message.id.get())
            .await?;

        tracing::info!(
            "Posted live leaderboard of match day {} in channel {}",
            snapshot.match_day.number,
            self.channel_id
        );

        Ok(())
    }
}

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::{
        match_day::{MatchDayService, TickOutcome},
        notification::MatchDayNotification,
        standings::StandingsService,
    },
    state::AppState,
};

/// Starts the match day scheduler
///
/// This scheduler runs every minute and advances the match day lifecycle:
/// - Opens the provider's current match day when no round is open
/// - Refreshes the live leaderboard message of the open round
/// - Closes the round once every match is finished and posts the standings
///
/// A tick that is still running when the next one is due causes the next one to be
/// skipped.
///
/// # Arguments
/// - `state`: Shared application state
pub async fn start_scheduler(state: AppState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;
    let running = Arc::new(Mutex::new(()));

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let state = state.clone();
        let running = running.clone();

        Box::pin(async move {
            let Ok(_guard) = running.try_lock() else {
                tracing::warn!("Previous match day tick still running, skipping");
                return;
            };

            if let Err(e) = process_match_day(&state, Utc::now()).await {
                tracing::error!("Error processing match day: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Match day scheduler started");

    Ok(())
}

/// Runs one lifecycle step and publishes its result
async fn process_match_day(state: &AppState, now: DateTime<Utc>) -> Result<(), AppError> {
    let service = MatchDayService::new(&state.db, state.match_source.as_ref());
    let notification =
        MatchDayNotification::new(&state.db, state.discord_http.clone(), state.channel_id);

    match service.tick(now).await? {
        TickOutcome::Idle => {}
        TickOutcome::Opened(snapshot) | TickOutcome::Updated(snapshot) => {
            notification.post_live(&snapshot, now).await?;
        }
        TickOutcome::Closed(snapshot) => {
            // Round is closed already, the next tick will not retry this post.
            if let Err(e) = notification.post_live(&snapshot, now).await {
                tracing::error!(
                    "Failed to post final leaderboard of match day {}: {}",
                    snapshot.match_day.number,
                    e
                );
            }

            let standings = StandingsService::new(&state.db).get_standings().await?;
            notification
                .post_final_standings(snapshot.match_day.number, &standings)
                .await?;
        }
    }

    Ok(())
}

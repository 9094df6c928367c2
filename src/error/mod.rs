//! Error types for the application.
//!
//! `AppError` is the top-level error returned by repositories, services, the bot layer,
//! the scheduler and startup code. Repositories convert entity models into domain models
//! at the boundary, so stored values that fail to parse surface as `InternalErr`.
//!
//! Errors that players caused (a late or malformed prediction) are kept apart in
//! `SubmissionError` so the bot can show their message verbatim while every other failure
//! is logged and answered with a generic reply.

pub mod config;
pub mod internal;
pub mod submission;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, submission::SubmissionError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A player's request was rejected; the message is safe to show to them.
    #[error(transparent)]
    SubmissionErr(#[from] SubmissionError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest, raised by the match provider.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected state indicating a bug or corrupted data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request or state transition.
    ///
    /// # Fields
    /// - Message describing what was invalid
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Text to show a Discord user when their interaction failed.
    ///
    /// Submission errors carry their own message. Everything else is logged and the
    /// user only sees a generic notice, so internals never leak into Discord.
    pub fn user_message(&self) -> String {
        match self {
            Self::SubmissionErr(err) => err.to_string(),
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            err => {
                tracing::error!("{}", err);
                "Something went wrong, please try again later.".to_string()
            }
        }
    }
}

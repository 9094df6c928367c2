use thiserror::Error;

use crate::scoring::prediction::PredictionError;

/// Rejections of a player's prediction or star request.
///
/// Display strings are sent back to the player as ephemeral replies.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// No match day is currently open for predictions.
    #[error("There is no open match day right now.")]
    NoOpenMatchDay,

    /// The requested match number does not exist in the open match day.
    #[error("Match #{0} is not part of the current match day.")]
    UnknownMatch(u32),

    /// The match at the requested number changed since the prediction form was opened.
    #[error("Match #{0} changed since you opened the form. Use /predict again.")]
    MatchChanged(u32),

    /// The round lock has passed.
    #[error("Predictions for this match day are locked.")]
    Locked,

    /// The prediction text is invalid.
    #[error(transparent)]
    InvalidPrediction(#[from] PredictionError),
}

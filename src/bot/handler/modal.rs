//! Prediction modal submissions.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{ActionRow, ActionRowComponent, Context, ModalInteraction};

use crate::{
    bot::handler::command::{display_name, ephemeral},
    error::AppError,
    model::{match_day::MatchDayMatch, prediction::SubmitPredictionParam},
    service::prediction::PredictionService,
};

/// Custom id of the prediction text input.
pub const PREDICTION_INPUT: &str = "prediction";

const PREDICT_MODAL_PREFIX: &str = "predict:";

/// Custom id of the prediction modal, `predict:<position>:<match id>`.
///
/// The match id is checked on submission, so a form left open across a round change is
/// not saved against whatever match took its position.
pub fn predict_modal_id(fixture: &MatchDayMatch) -> String {
    format!("{}{}:{}", PREDICT_MODAL_PREFIX, fixture.position, fixture.match_id)
}

/// Match position and match id encoded in a prediction modal id.
pub fn parse_predict_modal_id(custom_id: &str) -> Option<(u32, String)> {
    let (position, match_id) = custom_id
        .strip_prefix(PREDICT_MODAL_PREFIX)?
        .split_once(':')?;
    if match_id.is_empty() {
        return None;
    }

    Some((position.parse().ok()?, match_id.to_string()))
}

/// Stores the prediction typed into the modal and confirms it to the player.
pub async fn handle(ctx: &Context, db: &DatabaseConnection, modal: &ModalInteraction) {
    let Some((position, match_id)) = parse_predict_modal_id(&modal.data.custom_id) else {
        tracing::warn!("Received unknown modal {}", modal.data.custom_id);
        return;
    };

    let content = match submit(db, modal, position, match_id).await {
        Ok(content) => content,
        Err(e) => e.user_message(),
    };

    if let Err(e) = modal.create_response(ctx, ephemeral(content)).await {
        tracing::error!(
            "Failed to respond to prediction modal from {}: {:?}",
            modal.user.id,
            e
        );
    }
}

async fn submit(
    db: &DatabaseConnection,
    modal: &ModalInteraction,
    position: u32,
    match_id: String,
) -> Result<String, AppError> {
    let text = input_value(&modal.data.components, PREDICTION_INPUT)
        .ok_or_else(|| AppError::BadRequest("The prediction was empty.".to_string()))?;

    let submitted = PredictionService::new(db)
        .submit(
            SubmitPredictionParam {
                discord_id: modal.user.id.get(),
                name: display_name(modal.member.as_ref(), &modal.user),
                position,
                match_id: Some(match_id),
                text,
            },
            Utc::now(),
        )
        .await?;

    Ok(format!(
        "Saved **{}** for {}.",
        submitted.prediction,
        submitted.fixture.label()
    ))
}

/// Value of the text input with the given custom id.
fn input_value(rows: &[ActionRow], custom_id: &str) -> Option<String> {
    rows.iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == custom_id => {
                input.value.clone()
            }
            _ => None,
        })
        .filter(|value| !value.trim().is_empty())
}

//! Slash command definitions and handlers.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandDataOptionValue, CommandInteraction, CommandOptionType, Context, CreateActionRow,
    CreateCommand, CreateCommandOption, CreateInputText, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateModal, InputTextStyle, Member, User,
};

use crate::{
    bot::handler::modal::{predict_modal_id, PREDICTION_INPUT},
    error::AppError,
    model::{match_day::MatchDayMatch, user::StarMatchParam},
    service::{
        notification::builder::{build_standings_embed, build_stats_embed},
        prediction::PredictionService,
        standings::StandingsService,
    },
};

pub const PREDICT: &str = "predict";
pub const STAR: &str = "star";
pub const LEADERBOARD: &str = "leaderboard";
pub const STATS: &str = "stats";

const MATCH_OPTION: &str = "match";

/// Discord's limit for a modal title.
const MODAL_TITLE_LIMIT: usize = 45;

/// Slash commands registered in the game guild.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(PREDICT)
            .description("Predict a match of the current match day")
            .add_option(match_option()),
        CreateCommand::new(STAR)
            .description("Double your points for one match of the current match day")
            .add_option(match_option()),
        CreateCommand::new(LEADERBOARD).description("Show the overall standings"),
        CreateCommand::new(STATS).description("Show records and recent winners"),
    ]
}

fn match_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::Integer,
        MATCH_OPTION,
        "Match number as shown on the live leaderboard",
    )
    .required(true)
}

/// Answers a slash command.
///
/// Failures are answered with an ephemeral message; only the reply itself failing is
/// logged here.
pub async fn handle(ctx: &Context, db: &DatabaseConnection, command: &CommandInteraction) {
    let result = match command.data.name.as_str() {
        PREDICT => predict(db, command).await,
        STAR => star(db, command).await,
        LEADERBOARD => leaderboard(db).await,
        STATS => stats(db).await,
        other => {
            tracing::warn!("Received unknown command {}", other);
            return;
        }
    };

    let response = result.unwrap_or_else(|e| ephemeral(e.user_message()));

    if let Err(e) = command.create_response(ctx, response).await {
        tracing::error!(
            "Failed to respond to /{} from {}: {:?}",
            command.data.name,
            command.user.id,
            e
        );
    }
}

/// Opens the prediction modal if the match still accepts predictions.
async fn predict(
    db: &DatabaseConnection,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponse, AppError> {
    let position = match_position(command)?;
    let service = PredictionService::new(db);
    let fixture = service.open_match(position, Utc::now()).await?;

    let mut input = CreateInputText::new(InputTextStyle::Short, "Prediction", PREDICTION_INPUT)
        .placeholder("1, X, 2, 1X, 12, X2 or e.g. 1 (2-0)")
        .required(true)
        .max_length(20);
    if let Some(stored) = service
        .stored_prediction(command.user.id.get(), &fixture)
        .await?
    {
        input = input.value(stored);
    }

    Ok(CreateInteractionResponse::Modal(
        CreateModal::new(predict_modal_id(&fixture), modal_title(&fixture))
            .components(vec![CreateActionRow::InputText(input)]),
    ))
}

async fn star(
    db: &DatabaseConnection,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponse, AppError> {
    let position = match_position(command)?;
    let fixture = PredictionService::new(db)
        .star(
            StarMatchParam {
                discord_id: command.user.id.get(),
                name: display_name(command.member.as_deref(), &command.user),
                position,
            },
            Utc::now(),
        )
        .await?;

    Ok(ephemeral(format!(
        "Starred {}. Your points for this match count double.",
        fixture.label()
    )))
}

async fn leaderboard(db: &DatabaseConnection) -> Result<CreateInteractionResponse, AppError> {
    let standings = StandingsService::new(db).get_standings().await?;

    Ok(CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(build_standings_embed("Standings", &standings)),
    ))
}

async fn stats(db: &DatabaseConnection) -> Result<CreateInteractionResponse, AppError> {
    let stats = StandingsService::new(db).get_stats().await?;

    Ok(CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().embed(build_stats_embed(&stats)),
    ))
}

fn match_position(command: &CommandInteraction) -> Result<u32, AppError> {
    let value = command
        .data
        .options
        .iter()
        .find(|option| option.name == MATCH_OPTION)
        .map(|option| &option.value);

    position_from(value)
        .ok_or_else(|| AppError::BadRequest("Give a valid match number.".to_string()))
}

/// Reads a one-based match number from a command option.
pub fn position_from(value: Option<&CommandDataOptionValue>) -> Option<u32> {
    match value {
        Some(CommandDataOptionValue::Integer(number)) => u32::try_from(*number).ok(),
        _ => None,
    }
}

/// Modal title naming the match, cut to Discord's limit.
pub fn modal_title(fixture: &MatchDayMatch) -> String {
    let title = format!("#{} {}", fixture.position, fixture.label());
    if title.chars().count() <= MODAL_TITLE_LIMIT {
        return title;
    }

    let mut cut: String = title.chars().take(MODAL_TITLE_LIMIT - 3).collect();
    cut.push_str("...");
    cut
}

/// Name stored for a player: guild nickname, then global name, then username.
pub fn display_name(member: Option<&Member>, user: &User) -> String {
    member
        .and_then(|member| member.nick.clone())
        .or_else(|| user.global_name.clone())
        .unwrap_or_else(|| user.name.clone())
}

pub fn ephemeral(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures::scheduled;

    fn fixture(position: u32, home: &str, away: &str) -> MatchDayMatch {
        MatchDayMatch {
            match_id: "m1".to_string(),
            position,
            home_team: home.to_string(),
            away_team: away.to_string(),
            kickoff_at: scheduled("m1").kickoff,
        }
    }

    #[test]
    fn reads_positive_match_numbers() {
        assert_eq!(
            position_from(Some(&CommandDataOptionValue::Integer(3))),
            Some(3)
        );
        assert_eq!(
            position_from(Some(&CommandDataOptionValue::Integer(-1))),
            None
        );
        assert_eq!(
            position_from(Some(&CommandDataOptionValue::String("3".to_string()))),
            None
        );
        assert_eq!(position_from(None), None);
    }

    #[test]
    fn short_titles_are_kept() {
        assert_eq!(
            modal_title(&fixture(2, "Arsenal", "Chelsea")),
            "#2 Arsenal - Chelsea"
        );
    }

    #[test]
    fn long_titles_are_cut_to_limit() {
        let title = modal_title(&fixture(
            10,
            "Borussia Mönchengladbach",
            "Brighton & Hove Albion",
        ));

        assert_eq!(title.chars().count(), MODAL_TITLE_LIMIT);
        assert!(title.starts_with("#10 Borussia"));
        assert!(title.ends_with("..."));
    }

    #[test]
    fn defines_all_game_commands() {
        assert_eq!(definitions().len(), 4);
    }
}

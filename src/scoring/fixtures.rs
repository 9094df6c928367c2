//! Builders for engine inputs used across the scoring tests.

use chrono::{TimeZone, Utc};

use crate::{
    model::{
        football::{Match, MatchStatus},
        prediction::UserPrediction,
        user::User,
    },
    scoring::history::PointsHistory,
};

pub fn user(discord_id: u64) -> User {
    User {
        discord_id,
        name: format!("User {discord_id}"),
        day_points: None,
        history: PointsHistory::new(),
        starred_match: None,
    }
}

pub fn user_with_history(discord_id: u64, history: &str) -> User {
    User {
        history: PointsHistory::from_column(Some(history)),
        ..user(discord_id)
    }
}

pub fn fixture(id: &str, status: MatchStatus, goals: Option<(u32, u32)>) -> Match {
    Match {
        id: id.to_string(),
        home_team: format!("Home {id}"),
        away_team: format!("Away {id}"),
        home_goals: goals.map(|(home, _)| home),
        away_goals: goals.map(|(_, away)| away),
        status,
        kickoff: Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).unwrap(),
    }
}

pub fn finished(id: &str, home: u32, away: u32) -> Match {
    fixture(id, MatchStatus::Finished, Some((home, away)))
}

pub fn live(id: &str, home: u32, away: u32) -> Match {
    fixture(id, MatchStatus::Live, Some((home, away)))
}

pub fn scheduled(id: &str) -> Match {
    fixture(id, MatchStatus::ToBePlayed, None)
}

pub fn prediction(user_id: u64, match_id: &str, text: &str) -> UserPrediction {
    UserPrediction {
        user_id,
        match_id: match_id.to_string(),
        prediction: text.to_string(),
    }
}

//! football-data.org v4 client.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serenity::async_trait;

use crate::{
    error::AppError,
    model::football::{Match, MatchStatus},
    provider::MatchSource,
};

/// Client for the football-data.org v4 REST API.
#[derive(Clone)]
pub struct FootballDataClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    competition: String,
}

impl FootballDataClient {
    /// Creates a client for one competition.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `base_url` - API root, e.g. `https://api.football-data.org/v4`
    /// - `token` - API token sent as `X-Auth-Token`
    /// - `competition` - Competition code, e.g. `PL`
    ///
    /// # Returns
    /// - `FootballDataClient` - New client instance
    pub fn new(http: reqwest::Client, base_url: String, token: String, competition: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            competition,
        }
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("X-Auth-Token", &self.token)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MatchSource for FootballDataClient {
    async fn current_match_day(&self) -> Result<u32, AppError> {
        let competition: CompetitionResponse = self
            .get(&format!("/competitions/{}", self.competition), &[])
            .await?;

        competition
            .current_season
            .and_then(|season| season.current_matchday)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Competition {} has no current match day",
                    self.competition
                ))
            })
    }

    async fn fetch_match_day(&self, number: u32) -> Result<Vec<Match>, AppError> {
        let response: MatchesResponse = self
            .get(
                &format!("/competitions/{}/matches", self.competition),
                &[("matchday", number.to_string())],
            )
            .await?;

        Ok(response.into_matches())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompetitionResponse {
    current_season: Option<SeasonDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeasonDto {
    current_matchday: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct MatchesResponse {
    matches: Vec<MatchDto>,
}

impl MatchesResponse {
    fn into_matches(self) -> Vec<Match> {
        let mut matches: Vec<Match> = self.matches.into_iter().map(MatchDto::into_match).collect();
        matches.sort_by(|a, b| a.kickoff.cmp(&b.kickoff).then_with(|| a.id.cmp(&b.id)));
        matches
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchDto {
    id: u64,
    utc_date: DateTime<Utc>,
    status: String,
    home_team: TeamDto,
    away_team: TeamDto,
    score: ScoreDto,
}

impl MatchDto {
    fn into_match(self) -> Match {
        Match {
            id: self.id.to_string(),
            home_team: self.home_team.display_name(),
            away_team: self.away_team.display_name(),
            home_goals: self.score.full_time.home,
            away_goals: self.score.full_time.away,
            status: map_status(&self.status),
            kickoff: self.utc_date,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamDto {
    name: Option<String>,
    short_name: Option<String>,
}

impl TeamDto {
    fn display_name(self) -> String {
        self.short_name
            .or(self.name)
            .unwrap_or_else(|| "TBD".to_string())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreDto {
    full_time: GoalsDto,
}

/// Running score while a match is live, final score once finished.
#[derive(Debug, Deserialize)]
struct GoalsDto {
    home: Option<u32>,
    away: Option<u32>,
}

fn map_status(status: &str) -> MatchStatus {
    match status {
        "SCHEDULED" | "TIMED" => MatchStatus::ToBePlayed,
        "IN_PLAY" | "PAUSED" | "LIVE" => MatchStatus::Live,
        "FINISHED" | "AWARDED" => MatchStatus::Finished,
        "POSTPONED" | "SUSPENDED" | "CANCELLED" => MatchStatus::Postponed,
        other => {
            tracing::warn!("Unknown match status {}, treating as not started", other);
            MatchStatus::ToBePlayed
        }
    }
}

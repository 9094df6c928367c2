//! Embed builders for match day notifications.
//!
//! Line formatting is kept in plain functions returning `String` so the layout can be
//! checked without a Discord connection. The `build_*` functions only assemble embeds
//! from those lines.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    error::{internal::InternalError, AppError},
    model::{
        football::{Match, MatchStatus},
        match_day::MatchDayMatch,
    },
    scoring::{
        leaderboard::{Leaderboard, LeaderboardEntry},
        standings::Standing,
    },
    service::{match_day::RoundSnapshot, standings::StatsSummary},
};

/// Discord's limit for an embed description.
pub const DESCRIPTION_LIMIT: usize = 4096;
/// Discord's limit for an embed field value.
pub const FIELD_LIMIT: usize = 1024;

const COLOR_OPEN: u32 = 0x2ecc71;
const COLOR_LOCKED: u32 = 0xf39c12;
const COLOR_FINAL: u32 = 0x3498db;
const COLOR_STATS: u32 = 0x5865f2;

/// Rounds listed in the stats embed.
const RECENT_ROUNDS: usize = 5;

/// Builds the live leaderboard embed of an open or just-closed round.
///
/// # Arguments
/// - `snapshot` - Round, provider matches and resolved leaderboard
/// - `now` - Current time, shown as the embed timestamp
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed ready for posting
/// - `Err(AppError::InternalErr)` - `now` cannot be expressed as a Discord timestamp
pub fn build_live_embed(
    snapshot: &RoundSnapshot,
    now: DateTime<Utc>,
) -> Result<CreateEmbed, AppError> {
    let round = &snapshot.match_day;
    let color = if round.closed {
        COLOR_FINAL
    } else if round.is_locked(now) {
        COLOR_LOCKED
    } else {
        COLOR_OPEN
    };

    let match_lines: Vec<String> = round
        .matches
        .iter()
        .map(|captured| {
            let current = snapshot.matches.iter().find(|m| m.id == captured.match_id);
            format_match_line(captured, current)
        })
        .collect();

    let title = if round.closed {
        format!("Match day {} - final", round.number)
    } else {
        format!("Match day {}", round.number)
    };

    let mut embed = CreateEmbed::new()
        .title(title)
        .color(color)
        .description(join_within(&match_lines, DESCRIPTION_LIMIT))
        .field(
            "Leaderboard",
            join_within(&format_leaderboard_lines(&snapshot.leaderboard), FIELD_LIMIT),
            false,
        );

    if let Some(locks_at) = round.locks_at().filter(|_| !round.closed) {
        let verb = if now >= locks_at { "locked" } else { "lock" };
        embed = embed.field(
            "Predictions",
            format!("Predictions {} <t:{}:R>", verb, locks_at.timestamp()),
            false,
        );
    }

    Ok(embed
        .footer(CreateEmbedFooter::new(
            "/predict to submit, /star to double one match",
        ))
        .timestamp(discord_timestamp(now)?))
}

/// Builds the overall standings embed.
///
/// # Arguments
/// - `title` - Embed title
/// - `standings` - Rows already in display order
pub fn build_standings_embed(title: &str, standings: &[Standing]) -> CreateEmbed {
    let lines = format_standings_lines(standings);
    let description = if lines.is_empty() {
        "Nobody has played yet.".to_string()
    } else {
        join_within(&lines, DESCRIPTION_LIMIT)
    };

    CreateEmbed::new()
        .title(title)
        .color(COLOR_FINAL)
        .description(description)
}

/// Builds the `/stats` embed.
pub fn build_stats_embed(stats: &StatsSummary) -> CreateEmbed {
    let overall = &stats.overall;
    let mut embed = CreateEmbed::new().title("Statistics").color(COLOR_STATS);

    if overall.rounds_played == 0 {
        return embed.description("No match day has been closed yet.");
    }

    embed = embed.description(format!(
        "{} match days played, {} points scored",
        overall.rounds_played, overall.total_points
    ));

    if let Some(best) = &overall.best_round {
        embed = embed.field(
            "Best match day",
            format!(
                "{} with {} points on match day {}",
                names(stats, &best.holders),
                best.points,
                best.round
            ),
            false,
        );
    }
    if let Some(average) = &overall.highest_average {
        embed = embed.field(
            "Highest average",
            format!(
                "{} with {:.2} points per match day",
                names(stats, &average.holders),
                average.average
            ),
            false,
        );
    }
    if let Some(blowout) = &overall.biggest_blowout {
        embed = embed.field(
            "Biggest win",
            format!(
                "{} by {} points on match day {}",
                names(stats, &blowout.winners),
                blowout.gap,
                blowout.round
            ),
            false,
        );
    }
    if let Some(streak) = &overall.longest_streak {
        embed = embed.field(
            "Longest winning streak",
            format!(
                "{} with {} match days in a row",
                names(stats, &streak.holders),
                streak.length
            ),
            false,
        );
    }

    let recent: Vec<String> = stats
        .rounds
        .iter()
        .rev()
        .take(RECENT_ROUNDS)
        .map(|round| {
            format!(
                "`MD {}` {} ({} pts, {} players)",
                round.round,
                names(stats, &round.winners),
                round.top_points,
                round.participants
            )
        })
        .collect();

    embed.field("Recent winners", join_within(&recent, FIELD_LIMIT), false)
}

/// One line per match: position, teams, score and state.
pub fn format_match_line(captured: &MatchDayMatch, current: Option<&Match>) -> String {
    let position = captured.position;
    let Some(current) = current else {
        return format!("`{}` {} (no data)", position, captured.label());
    };

    match current.status {
        MatchStatus::ToBePlayed => format!(
            "`{}` {} <t:{}:f>",
            position,
            captured.label(),
            current.kickoff.timestamp()
        ),
        MatchStatus::Live => format!(
            "`{}` {} {} {} (live)",
            position,
            current.home_team,
            current.score(),
            current.away_team
        ),
        MatchStatus::Finished => format!(
            "`{}` {} {} {} (FT)",
            position,
            current.home_team,
            current.score(),
            current.away_team
        ),
        MatchStatus::Postponed => format!("`{}` {} (postponed)", position, captured.label()),
    }
}

/// Leaderboard rows with shared ranks for equal points.
///
/// Players who did not predict are listed last without a rank.
pub fn format_leaderboard_lines(leaderboard: &Leaderboard) -> Vec<String> {
    if leaderboard.participants().next().is_none() {
        return vec!["No predictions yet.".to_string()];
    }

    let mut lines = Vec::with_capacity(leaderboard.entries.len());
    let mut rank = 0;
    let mut previous: Option<i32> = None;

    for (index, entry) in leaderboard.entries.iter().enumerate() {
        if !entry.participated {
            lines.push(format!("`-` {} did not predict", entry.user.name));
            continue;
        }
        if previous != Some(entry.current_points) {
            rank = index + 1;
            previous = Some(entry.current_points);
        }
        lines.push(format_leaderboard_entry(rank, entry));
    }

    lines
}

fn format_leaderboard_entry(rank: usize, entry: &LeaderboardEntry) -> String {
    format!(
        "`{}.` **{}** {} pts (max {}) {:+} day pts",
        rank, entry.user.name, entry.current_points, entry.max_points, entry.rank_points
    )
}

/// Overall standings rows.
pub fn format_standings_lines(standings: &[Standing]) -> Vec<String> {
    standings
        .iter()
        .enumerate()
        .map(|(index, standing)| {
            format!(
                "`{}.` **{}** {} pts, {} wins, avg {:.2}",
                index + 1,
                standing.user.name,
                standing.day_points,
                standing.wins,
                standing.average
            )
        })
        .collect()
}

/// Joins lines with newlines, dropping trailing lines that would exceed `limit` characters.
///
/// Dropped lines are summarised as `...and N more`. The result never exceeds `limit`.
pub fn join_within(lines: &[String], limit: usize) -> String {
    let full = lines.join("\n");
    if full.chars().count() <= limit {
        return full;
    }

    let mut joined = String::new();
    let mut kept = 0;

    for line in lines {
        let summary = format!("...and {} more", lines.len() - kept - 1);
        let separator = usize::from(!joined.is_empty());
        let needed =
            joined.chars().count() + separator + line.chars().count() + 1 + summary.chars().count();
        if needed > limit {
            break;
        }

        if separator == 1 {
            joined.push('\n');
        }
        joined.push_str(line);
        kept += 1;
    }

    if !joined.is_empty() {
        joined.push('\n');
    }
    joined.push_str(&format!("...and {} more", lines.len() - kept));
    joined.chars().take(limit).collect()
}

fn names(stats: &StatsSummary, discord_ids: &[u64]) -> String {
    discord_ids
        .iter()
        .map(|id| stats.name_of(*id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn discord_timestamp(time: DateTime<Utc>) -> Result<Timestamp, AppError> {
    Timestamp::from_unix_timestamp(time.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: time.timestamp(),
            reason: e.to_string(),
        }
        .into()
    })
}

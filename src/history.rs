//! League history extraction.
//!
//! One row per team per season, written as delimited text. Online runs fetch
//! each season through a [`LeagueSource`] and skip seasons that fail, except
//! when ESPN rejects the session cookies: that aborts the run since every
//! later season would fail the same way. Offline runs write a fixed sample.
//!
//! The output file is always written, header included, even when no season
//! produced rows.

mod fixture;

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    cli::types::{Delimiter, Season},
    config::ExtractConfig,
    espn::LeagueSource,
    Result,
};

pub use fixture::offline_rows;


/// Output columns, in file order.
pub const HEADERS: [&str; 15] = [
    "owner",
    "year",
    "team_name",
    "win",
    "loss",
    "draws",
    "final_standing",
    "points_for",
    "points_against",
    "acquisitions",
    "trades",
    "drops",
    "streak_length",
    "streak_type",
    "playoff_seed",
];

/// One team's record for one season.
///
/// Field order matches [`HEADERS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub owner: String,
    pub year: u16,
    pub team_name: String,
    pub win: u32,
    pub loss: u32,
    pub draws: u32,
    pub final_standing: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub acquisitions: u32,
    pub trades: u32,
    pub drops: u32,
    pub streak_length: u32,
    pub streak_type: String,
    pub playoff_seed: u32,
}

fn u32_at(v: &Value, pointer: &str) -> u32 {
    v.pointer(pointer)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

fn f64_at(v: &Value, pointer: &str) -> f64 {
    v.pointer(pointer).and_then(Value::as_f64).unwrap_or(0.0)
}

fn str_at<'a>(v: &'a Value, pointer: &str) -> &'a str {
    v.pointer(pointer).and_then(Value::as_str).unwrap_or("")
}

/// Display name for a member id: "First Last", else `displayName`.
fn member_name(members: &[Value], id: &str) -> Option<String> {
    let member = members.iter().find(|m| m["id"].as_str() == Some(id))?;
    let full = format!(
        "{} {}",
        str_at(member, "/firstName"),
        str_at(member, "/lastName")
    );
    let full = full.trim();
    if !full.is_empty() {
        return Some(full.to_string());
    }
    let display = str_at(member, "/displayName");
    (!display.is_empty()).then(|| display.to_string())
}

/// Owner of a team: the primary owner if resolvable, otherwise every listed
/// owner joined with ", ".
fn resolve_owner(team: &Value, members: &[Value]) -> String {
    if let Some(name) = team["primaryOwner"]
        .as_str()
        .and_then(|id| member_name(members, id))
    {
        return name;
    }

    team["owners"]
        .as_array()
        .map(|owners| {
            owners
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|id| member_name(members, id))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

/// `name` when present, else "location nickname" (older seasons).
fn resolve_team_name(team: &Value) -> String {
    let name = str_at(team, "/name").trim();
    if !name.is_empty() {
        return name.to_string();
    }
    format!("{} {}", str_at(team, "/location"), str_at(team, "/nickname"))
        .trim()
        .to_string()
}

impl HistoryRow {
    /// Flatten one team object from a season payload.
    ///
    /// Missing fields become zero or empty.
    pub fn from_team(year: Season, team: &Value, members: &[Value]) -> Self {
        Self {
            owner: resolve_owner(team, members),
            year: year.as_u16(),
            team_name: resolve_team_name(team),
            win: u32_at(team, "/record/overall/wins"),
            loss: u32_at(team, "/record/overall/losses"),
            draws: u32_at(team, "/record/overall/ties"),
            final_standing: u32_at(team, "/rankCalculatedFinal"),
            points_for: f64_at(team, "/record/overall/pointsFor"),
            points_against: f64_at(team, "/record/overall/pointsAgainst"),
            acquisitions: u32_at(team, "/transactionCounter/acquisitions"),
            trades: u32_at(team, "/transactionCounter/trades"),
            drops: u32_at(team, "/transactionCounter/drops"),
            streak_length: u32_at(team, "/record/overall/streakLength"),
            streak_type: str_at(team, "/record/overall/streakType").to_string(),
            playoff_seed: u32_at(team, "/playoffSeed"),
        }
    }
}

/// All team rows in a season payload.
pub fn season_rows(season: Season, payload: &Value) -> Vec<HistoryRow> {
    let members = payload["members"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    payload["teams"]
        .as_array()
        .map(|teams| {
            teams
                .iter()
                .map(|team| HistoryRow::from_team(season, team, members))
                .collect()
        })
        .unwrap_or_default()
}

/// Write `rows` under a header line, creating parent directories as needed.
pub fn write_rows(path: &Path, delimiter: Delimiter, rows: &[HistoryRow]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Run an extraction and return the number of data rows written.
pub async fn extract_team_records<S: LeagueSource>(
    config: &ExtractConfig,
    source: &S,
) -> Result<usize> {
    debug!(out_file = %config.out_file.display(), "extracting ESPN data");

    if config.offline {
        let rows = offline_rows();
        debug!("writing offline fixture");
        write_rows(&config.out_file, config.delimiter, &rows)?;
        return Ok(rows.len());
    }

    debug!(
        seasons = %config.seasons,
        league_id = %config.league_id,
        "processing years"
    );

    let mut rows = Vec::new();
    for season in config.seasons.iter() {
        match source.fetch_season(config.league_id, season).await {
            Ok(payload) => {
                let season_rows = season_rows(season, &payload);
                if season_rows.is_empty() {
                    warn!(season = season.as_u16(), "season payload contained no teams");
                }
                debug!(
                    season = season.as_u16(),
                    teams = season_rows.len(),
                    "season fetched"
                );
                rows.extend(season_rows);
            }
            Err(e) if e.is_upstream_auth() => return Err(e),
            Err(e) => {
                warn!(
                    season = season.as_u16(),
                    error = %e,
                    "skipping season: failed to fetch league"
                );
            }
        }
    }

    write_rows(&config.out_file, config.delimiter, &rows)?;
    debug!(
        rows = rows.len(),
        out_file = %config.out_file.display(),
        "wrote history"
    );
    Ok(rows.len())
}

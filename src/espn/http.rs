//! HTTP access to ESPN's fantasy football league endpoints.
//!
//! The league client is a collaborator behind [`LeagueSource`]: it receives
//! the session cookies at construction and hands back the raw season payload.
//! Interpreting that payload is left to the history module.

use std::future::Future;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, COOKIE},
    Client, StatusCode,
};
use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Season},
    config::ExtractConfig,
    credentials::Credentials,
    error::EspnError,
    Result,
};


/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Views requested for every season: team records plus standings.
const SEASON_VIEWS: [&str; 2] = ["mTeam", "mStandings"];

/// Source of per-season league payloads.
pub trait LeagueSource {
    /// Fetch the league as it stood in `season`.
    fn fetch_season(
        &self,
        league_id: LeagueId,
        season: Season,
    ) -> impl Future<Output = Result<Value>> + Send;
}

/// Build request headers, adding the session cookies when present.
pub fn build_headers(credentials: Option<&Credentials>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(creds) = credentials {
        h.insert(COOKIE, creds.cookie_header()?);
    }
    Ok(h)
}

/// URL and query for one season of a league.
///
/// Seasons before 2018 live under `leagueHistory`, keyed by `seasonId`.
pub fn season_request(
    base_url: &str,
    league_id: LeagueId,
    season: Season,
) -> (String, Vec<(&'static str, String)>) {
    let mut query: Vec<(&'static str, String)> = SEASON_VIEWS
        .iter()
        .map(|view| ("view", view.to_string()))
        .collect();

    let url = if season.is_historical() {
        query.insert(0, ("seasonId", season.to_string()));
        format!("{base_url}/leagueHistory/{league_id}")
    } else {
        format!("{base_url}/seasons/{season}/segments/0/leagues/{league_id}")
    };

    (url, query)
}

/// reqwest-backed [`LeagueSource`].
#[derive(Debug, Clone)]
pub struct EspnClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl EspnClient {
    pub fn new(credentials: Option<&Credentials>) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: FFL_BASE_URL.to_string(),
            headers: build_headers(credentials)?,
        })
    }

    pub fn from_config(config: &ExtractConfig) -> Result<Self> {
        Self::new(config.credentials.as_ref())
    }

    /// Point the client at another host, e.g. a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.headers.contains_key(COOKIE)
    }
}

impl LeagueSource for EspnClient {
    async fn fetch_season(&self, league_id: LeagueId, season: Season) -> Result<Value> {
        let (url, query) = season_request(&self.base_url, league_id, season);
        debug!(
            %url,
            ?query,
            authenticated = self.is_authenticated(),
            "requesting league season"
        );

        let res = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(&query)
            .send()
            .await?;

        match res.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(EspnError::UpstreamAuth {
                    season: season.as_u16(),
                    status: res.status().as_u16(),
                });
            }
            StatusCode::NOT_FOUND => {
                return Err(EspnError::SeasonNotFound {
                    season: season.as_u16(),
                });
            }
            _ => {}
        }

        let body = res.error_for_status()?.json::<Value>().await?;

        if season.is_historical() {
            // leagueHistory answers with one element per matching season
            body.as_array()
                .and_then(|seasons| seasons.first())
                .cloned()
                .ok_or(EspnError::NoData)
        } else {
            Ok(body)
        }
    }
}

//! Error types for the ESPN league history extractor

use thiserror::Error;


pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// A required credential variable is unset or empty.
    #[error("{env_var} environment variable not set (required for private leagues)")]
    MissingCredential { env_var: String },

    /// A credential variable is set but not well-formed. Only the variable
    /// name and the rule it broke are reported, never the value.
    #[error("{env_var} environment variable is malformed: {reason}")]
    MalformedCredential { env_var: String, reason: String },

    /// ESPN refused access: cookies expired, wrong league, or a private
    /// league requested without cookies.
    #[error("ESPN denied access to season {season} (HTTP {status}); private leagues need current ESPN_S2 and SWID cookies")]
    UpstreamAuth { season: u16, status: u16 },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("Value must be a positive integer")]
    NotPositive,

    #[error("Invalid season range: {start} is after {end}")]
    InvalidSeasonRange { start: u16, end: u16 },

    #[error("Invalid delimiter {delimiter:?}: {reason}")]
    InvalidDelimiter { delimiter: String, reason: String },

    #[error("Season {season} not found for this league")]
    SeasonNotFound { season: u16 },

    #[error("ESPN API returned no data")]
    NoData,
}

impl EspnError {
    /// True for failures the platform raised about the cookies themselves.
    pub fn is_upstream_auth(&self) -> bool {
        matches!(self, EspnError::UpstreamAuth { .. })
    }

    /// True for configuration problems detected before any network access.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EspnError::MissingCredential { .. }
                | EspnError::MalformedCredential { .. }
                | EspnError::MissingLeagueId { .. }
                | EspnError::InvalidLeagueId(_)
                | EspnError::NotPositive
                | EspnError::InvalidSeasonRange { .. }
                | EspnError::InvalidDelimiter { .. }
        )
    }
}

//! ESPN Fantasy League History Extractor
//!
//! Pulls one row per team per season from ESPN's fantasy football API and
//! writes them as CSV (or any single-character delimited text).
//!
//! ## Private leagues
//!
//! Private leagues are read with the session cookies of a logged-in browser,
//! supplied through the environment:
//!
//! ```bash
//! export ESPN_S2="AECp....."
//! export SWID="{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}"
//! ```
//!
//! They are loaded once, validated, and passed explicitly to the HTTP client:
//!
//! ```rust
//! use std::collections::HashMap;
//! use espn_extractor::credentials::{load_credentials, LeagueAccess};
//!
//! let env = HashMap::from([
//!     ("ESPN_S2", "AECp-example"),
//!     ("SWID", "{12345678-90AB-CDEF-1234-567890ABCDEF}"),
//! ]);
//! let creds = load_credentials(&env, LeagueAccess::Private)?.unwrap();
//! assert_eq!(creds.swid.as_str(), "{12345678-90AB-CDEF-1234-567890ABCDEF}");
//! # Ok::<(), espn_extractor::EspnError>(())
//! ```
//!
//! ## Environment Configuration
//!
//! Set your ESPN league ID to avoid passing it in every command:
//! ```bash
//! export ESPN_LEAGUE_ID=123456
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod espn;
pub mod history;
pub mod logging;

// Re-export commonly used types
pub use cli::types::{Delimiter, LeagueId, Season, SeasonRange};
pub use config::ExtractConfig;
pub use credentials::{Credentials, EspnS2, LeagueAccess, Swid};
pub use error::{EspnError, Result};
pub use history::HistoryRow;

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_LEAGUE_ID";

//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser};
use types::{Delimiter, LeagueId, Season};

/// Arguments for a league history extraction run.
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// League ID (or set `ESPN_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// First season (e.g. 2019).
    #[clap(long)]
    pub start_year: Season,

    /// Last season (inclusive).
    #[clap(long)]
    pub end_year: Season,

    /// Output file path (CSV or other delimited text).
    #[clap(long = "out", short)]
    pub out_file: PathBuf,

    /// Field delimiter, a single character; `\t` for tab.
    #[clap(long, short, default_value_t = Delimiter::default())]
    pub delimiter: Delimiter,

    /// Write deterministic, network-free sample rows for tests/dev.
    #[clap(long)]
    pub offline: bool,

    /// Enable debug logging, including request URLs.
    #[clap(long)]
    pub debug: bool,

    /// Echo whether `ESPN_S2`/`SWID` are set (for troubleshooting).
    #[clap(long)]
    pub print_cookies: bool,

    /// The league is private: require `ESPN_S2` and `SWID`.
    #[clap(long)]
    pub private: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "espn-extractor",
    about = "ESPN fantasy league history extractor",
    after_help = "For private leagues, set environment variables:\n  export ESPN_S2=\"AECp.....\"\n  export SWID=\"{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}\""
)]
pub struct Extractor {
    #[clap(flatten)]
    pub args: ExtractArgs,
}

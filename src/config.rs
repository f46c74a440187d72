//! Run configuration, built once at startup.
//!
//! `ExtractConfig` gathers CLI arguments and environment-sourced values into
//! one struct that is passed by reference to the extraction and HTTP layers,
//! so nothing downstream reads the environment on its own.

use std::path::PathBuf;

use tracing::debug;

use crate::{
    cli::{
        types::{Delimiter, LeagueId, SeasonRange},
        ExtractArgs,
    },
    credentials::{load_credentials, Credentials, EnvSource, LeagueAccess},
    error::EspnError,
    Result, LEAGUE_ID_ENV_VAR,
};

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub league_id: LeagueId,
    pub seasons: SeasonRange,
    pub out_file: PathBuf,
    pub delimiter: Delimiter,
    pub debug: bool,
    pub offline: bool,
    pub access: LeagueAccess,
    pub credentials: Option<Credentials>,
}

impl ExtractConfig {
    /// Build the configuration from parsed arguments and the given environment.
    ///
    /// Configuration errors (missing league ID, inverted season range, missing
    /// or malformed cookies for a private league) surface here, before any
    /// network access or file write.
    pub fn from_args(args: &ExtractArgs, env: &impl EnvSource) -> Result<Self> {
        let league_id = resolve_league_id(args.league_id, env)?;
        let seasons = SeasonRange::new(args.start_year, args.end_year)?;
        let access = if args.private {
            LeagueAccess::Private
        } else {
            LeagueAccess::Public
        };

        // Offline runs never talk to ESPN, but a private league is still
        // checked so a bad setup is caught on the cheap path too.
        let credentials = if args.offline && access == LeagueAccess::Public {
            None
        } else {
            load_credentials(env, access)?
        };

        debug!(
            %league_id,
            %seasons,
            ?access,
            authenticated = credentials.is_some(),
            "configuration loaded"
        );

        Ok(Self {
            league_id,
            seasons,
            out_file: args.out_file.clone(),
            delimiter: args.delimiter,
            debug: args.debug,
            offline: args.offline,
            access,
            credentials,
        })
    }
}

/// Resolve league ID from CLI option or `ESPN_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>, env: &impl EnvSource) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }
    match env.var(LEAGUE_ID_ENV_VAR) {
        Some(raw) => raw.parse::<LeagueId>(),
        None => Err(EspnError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}

//! History extraction command implementation

use tracing::debug;

use crate::{
    cli::ExtractArgs,
    config::ExtractConfig,
    credentials::{CookieStatus, EnvSource, ProcessEnv},
    espn::{EspnClient, LeagueSource},
    history::extract_team_records,
    Result,
};

/// Print whether each cookie variable is set, never the values.
pub fn print_cookie_status(env: &impl EnvSource) {
    println!("{}", CookieStatus::from_env(env));
}

/// Run an extraction against an explicit environment and league source.
pub async fn run_extract<S: LeagueSource>(
    args: &ExtractArgs,
    env: &impl EnvSource,
    source: impl FnOnce(&ExtractConfig) -> Result<S>,
) -> Result<usize> {
    if args.print_cookies {
        print_cookie_status(env);
    }

    let config = ExtractConfig::from_args(args, env)?;
    let source = source(&config)?;

    if config.offline {
        println!("Writing offline fixture to {}", config.out_file.display());
    } else {
        println!("Processing Years {}", config.seasons);
    }

    let written = extract_team_records(&config, &source).await?;
    println!("Wrote {} rows to {}", written, config.out_file.display());
    Ok(written)
}

/// Handle the extract command using the process environment and ESPN.
pub async fn handle_extract(args: ExtractArgs) -> Result<()> {
    debug!(?args, "starting extraction");
    run_extract(&args, &ProcessEnv, EspnClient::from_config).await?;
    Ok(())
}

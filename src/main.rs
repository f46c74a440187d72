//! Entry point: parse CLI and dispatch to the extract command.

use clap::Parser;
use espn_extractor::{cli::Extractor, commands::extract::handle_extract, logging, Result};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Extractor::parse();
    logging::init(app.args.debug);

    handle_extract(app.args).await
}

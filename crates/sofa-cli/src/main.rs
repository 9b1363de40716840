//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs logging and dispatches to the
//! command handlers.

use clap::Parser;

use sofa_cli::{Cli, CliConfig, CommandHostProbe, Commands, handlers, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment first so clap's `env` fallbacks can see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig::from_cli(&cli);

    match cli.command.unwrap_or_default() {
        Commands::Check(args) => {
            handlers::check::execute(&config, &args, &CommandHostProbe::new()).await?;
        }
        Commands::Paths => {
            handlers::paths::execute(&config)?;
        }
    }

    Ok(())
}

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use envgen_config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr so `--stdout` output stays clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Generate(args) => {
            let config = match &cli.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            commands::generate::handle(args, &config).await
        }
        cli::Commands::Types { json } => commands::types::handle(json),
        cli::Commands::Check { name } => commands::check::handle(&name),
        cli::Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

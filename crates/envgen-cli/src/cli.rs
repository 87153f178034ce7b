use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envgen")]
#[command(about = "Generate committable .env templates with secrets redacted", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: envgen/config.toml in the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a template from a .env file
    Generate(GenerateArgs),

    /// List the known template types
    Types {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a target file name would be accepted
    Check {
        /// Target file name, e.g. .env.staging
        name: String,
    },

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// The .env file to read
    pub env_file: PathBuf,

    /// Target file name, written next to the source (default from config: .env.example)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Author for the header; skips the git lookup
    #[arg(long, env = "ENVGEN_AUTHOR")]
    pub author: Option<String>,

    /// Date for the header (default: today, DD/MM/YYYY)
    #[arg(long)]
    pub date: Option<String>,

    /// Overwrite the target if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Print the template instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Show which rule redacted each key (values are never shown)
    #[arg(long)]
    pub report: bool,

    /// Print the report as JSON
    #[arg(long, requires = "report")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "envgen",
            "generate",
            "app/.env",
            "-t",
            ".env.production",
            "--author",
            "Ana",
            "--stdout",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("Expected generate command");
        };
        assert_eq!(args.env_file, PathBuf::from("app/.env"));
        assert_eq!(args.target.as_deref(), Some(".env.production"));
        assert_eq!(args.author.as_deref(), Some("Ana"));
        assert!(args.stdout);
        assert!(!args.force);
    }

    #[test]
    fn test_json_requires_report() {
        assert!(Cli::try_parse_from(["envgen", "generate", ".env", "--json"]).is_err());
        assert!(Cli::try_parse_from(["envgen", "generate", ".env", "--report", "--json"]).is_ok());
    }
}

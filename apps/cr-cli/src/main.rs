//! # cr-cli
//!
//! Command-line front end for Contact Relay.
//!
//! Stands in for the website's form handler:
//! - `contact-relay submit` — validate fields and forward them with the configured strategy
//! - `contact-relay validate` — run the form checks only
//! - `contact-relay strategies` — list the available submit strategies
//! - `contact-relay init` — write a starter relay.toml

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Contact Relay CLI — forward contact form submissions.
#[derive(Parser)]
#[command(name = "contact-relay", version, about)]
struct Cli {
    /// Path to the relay config file.
    #[arg(long, global = true, default_value = "relay.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a submission and send it with the configured strategy.
    Submit {
        #[command(flatten)]
        fields: commands::FieldArgs,
        /// Record requests instead of sending them, and print what would go out.
        #[arg(long)]
        dry_run: bool,
    },
    /// Check form fields without sending anything.
    Validate {
        #[command(flatten)]
        fields: commands::FieldArgs,
    },
    /// List available submit strategies.
    Strategies,
    /// Write a starter config file.
    Init {
        /// Where to write it (defaults to --config).
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the result JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("cr_submit=info".parse()?)
                .add_directive("cr_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Submit { fields, dry_run } => {
            commands::submit::execute(&cli.config, fields, *dry_run)
        }
        Commands::Validate { fields } => commands::validate::execute(fields),
        Commands::Strategies => commands::strategies::execute(&cli.config),
        Commands::Init { path, force } => {
            commands::init::execute(path.as_ref().unwrap_or(&cli.config), *force)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_accepts_path() {
        let cli = Cli::try_parse_from(["contact-relay", "init", "--path", "site/relay.toml"]).unwrap();
        match cli.command {
            Commands::Init { path, force } => {
                assert_eq!(path, Some(PathBuf::from("site/relay.toml")));
                assert!(!force);
            }
            _ => panic!("expected init"),
        }
    }

    #[test]
    fn init_path_defaults_to_config() {
        let cli = Cli::try_parse_from(["contact-relay", "--config", "x.toml", "init"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(cli.command, Commands::Init { path: None, .. }));
    }
}

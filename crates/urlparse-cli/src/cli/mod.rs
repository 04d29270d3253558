//! CLI for the urlparse event transform.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_check, run_parse, run_pipeline};

/// Top-level CLI for the urlparse transform.
#[derive(Debug, Parser)]
#[command(name = "urlparse")]
#[command(about = "urlparse: decompose URL fields of NDJSON events into their components", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Transform NDJSON events, one JSON object per line, writing results to stdout.
    Run {
        /// Processor config (TOML). Defaults to ~/.config/urlparse/config.toml.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Read events from this file instead of stdin.
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
    },

    /// Print the components of a single URL as JSON.
    Parse {
        /// URL (or any string) to decompose.
        url: String,
    },

    /// Validate a config and print the resolved field mappings.
    Check {
        /// Processor config (TOML). Defaults to ~/.config/urlparse/config.toml.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Run { config, input } => {
                run_pipeline(config.as_deref(), input.as_deref())?
            }
            CliCommand::Parse { url } => run_parse(&url)?,
            CliCommand::Check { config } => run_check(config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

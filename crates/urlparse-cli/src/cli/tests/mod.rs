//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_run_defaults() {
    match parse(&["urlparse", "run"]) {
        CliCommand::Run { config, input } => {
            assert!(config.is_none());
            assert!(input.is_none());
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_with_paths() {
    match parse(&[
        "urlparse",
        "run",
        "--config",
        "/etc/urlparse.toml",
        "--input",
        "events.ndjson",
    ]) {
        CliCommand::Run { config, input } => {
            assert_eq!(config.as_deref(), Some(Path::new("/etc/urlparse.toml")));
            assert_eq!(input.as_deref(), Some(Path::new("events.ndjson")));
        }
        _ => panic!("expected Run with paths"),
    }
}

#[test]
fn cli_parse_parse() {
    match parse(&["urlparse", "parse", "https://example.com/a?b=c"]) {
        CliCommand::Parse { url } => assert_eq!(url, "https://example.com/a?b=c"),
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_check() {
    match parse(&["urlparse", "check", "--config", "c.toml"]) {
        CliCommand::Check { config } => {
            assert_eq!(config.as_deref(), Some(Path::new("c.toml")))
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_requires_url() {
    assert!(Cli::try_parse_from(["urlparse", "parse"]).is_err());
}

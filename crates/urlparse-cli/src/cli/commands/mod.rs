//! CLI command handlers. Each command is in its own file.

mod check;
mod parse;
mod run;

pub use check::run_check;
pub use parse::run_parse;
pub use run::run_pipeline;

use anyhow::{Context, Result};
use std::path::Path;
use urlparse_core::{config, UrlParse};

/// Build the processor from an explicit config file or the XDG default.
fn load_processor(config_path: Option<&Path>) -> Result<UrlParse> {
    let cfg = match config_path {
        Some(path) => config::load_from(path)?,
        None => config::load_default()?,
    };
    let processor = UrlParse::new(cfg).context("invalid urlparse configuration")?;
    tracing::debug!("configured {}", processor);
    Ok(processor)
}

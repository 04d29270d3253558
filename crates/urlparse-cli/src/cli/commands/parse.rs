//! Parse command: decompose one URL.

use anyhow::{Context, Result};
use urlparse_core::parse_url;

/// Print the components of `url` as pretty JSON.
pub fn run_parse(url: &str) -> Result<()> {
    let parsed = parse_url(url).with_context(|| format!("cannot parse {:?}", url))?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

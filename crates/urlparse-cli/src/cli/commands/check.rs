//! Check command: validate configuration.

use anyhow::Result;
use std::path::Path;

use super::load_processor;

/// Load the config, build the processor and print its mappings.
pub fn run_check(config: Option<&Path>) -> Result<()> {
    let processor = load_processor(config)?;
    let plan = processor.plan();
    println!("{}", processor);
    println!(
        "ignore_missing={} fail_on_error={}",
        plan.ignore_missing(),
        plan.fail_on_error()
    );
    Ok(())
}

//! Validated, immutable execution plan.

use std::fmt;

use crate::config::{ConfigError, UrlParseConfig};

/// A field mapping with its target resolved. `to` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMapping {
    pub from: String,
    pub to: String,
}

impl fmt::Display for ResolvedMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{from:{} to:{}}}", self.from, self.to)
    }
}

/// Mappings in configured order plus the two policy flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    mappings: Vec<ResolvedMapping>,
    ignore_missing: bool,
    fail_on_error: bool,
}

impl Plan {
    pub fn resolve(config: UrlParseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mappings = config
            .fields
            .into_iter()
            .map(|field| {
                let to = match field.to {
                    Some(to) if !to.is_empty() => to,
                    _ => field.from.clone(),
                };
                ResolvedMapping {
                    from: field.from,
                    to,
                }
            })
            .collect();
        Ok(Self {
            mappings,
            ignore_missing: config.ignore_missing,
            fail_on_error: config.fail_on_error,
        })
    }

    pub fn mappings(&self) -> &[ResolvedMapping] {
        &self.mappings
    }

    pub fn ignore_missing(&self) -> bool {
        self.ignore_missing
    }

    pub fn fail_on_error(&self) -> bool {
        self.fail_on_error
    }
}

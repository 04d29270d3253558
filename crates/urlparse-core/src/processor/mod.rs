//! The urlparse transform.
//!
//! [`UrlParse`] holds an immutable [`Plan`] built once from configuration and is
//! run once per event. With `fail_on_error` the run is all-or-nothing: the
//! first failing mapping restores the event as it arrived, annotates it at
//! [`ERROR_MESSAGE_KEY`] and stops. Without it, failing mappings are logged and
//! skipped while the rest still apply.

mod error;
mod plan;
mod run;

pub use error::ProcessError;
pub use plan::{Plan, ResolvedMapping};

use std::fmt;

use crate::config::{ConfigError, UrlParseConfig};

/// Where strict mode records the reason an event was left untouched.
pub const ERROR_MESSAGE_KEY: &str = "error.message";

/// URL-decomposing transform. Shareable across threads; each run needs its own event.
#[derive(Debug, Clone)]
pub struct UrlParse {
    plan: Plan,
}

impl UrlParse {
    pub fn new(config: UrlParseConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            plan: Plan::resolve(config)?,
        })
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }
}

impl fmt::Display for UrlParse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "urlparse=[")?;
        for (i, mapping) in self.plan.mappings().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", mapping)?;
        }
        write!(f, "]")
    }
}

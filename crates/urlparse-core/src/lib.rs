pub mod config;
pub mod logging;

pub mod event;
pub mod processor;
pub mod url_model;

pub use config::{ConfigError, FieldMapping, UrlParseConfig};
pub use event::{Event, EventError};
pub use processor::{ProcessError, UrlParse};
pub use url_model::{parse_url, ParsedUrl, UrlError};

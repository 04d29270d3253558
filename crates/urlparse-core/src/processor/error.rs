//! Per-mapping failures of the transform.

use crate::event::EventError;
use crate::url_model::UrlError;

/// Why one field mapping could not be applied to an event.
///
/// Every variant is subject to the fail-on-error policy; `MissingField` can
/// additionally be suppressed with `ignore_missing`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    #[error("could not fetch value for key: {key}, Error: key not found")]
    MissingField { key: String },
    /// The walk to `key` hit a non-object segment before reaching it.
    #[error("could not fetch value for key: {key}, Error: {source}")]
    Lookup {
        key: String,
        #[source]
        source: EventError,
    },
    #[error("invalid type for `from` ({key}), expecting a string received {found}")]
    TypeMismatch { key: String, found: &'static str },
    #[error("error trying to URL-parse {value}: {source}")]
    UrlSyntax {
        value: String,
        #[source]
        source: UrlError,
    },
    #[error("could not put value: {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: EventError,
    },
}

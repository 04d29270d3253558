//! Errors from reading or writing event fields.

/// Failure to resolve a dotted key against an event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("key not found")]
    KeyNotFound,
    /// A path segment exists but holds a non-object, so the walk cannot continue.
    #[error("expected object at `{key}` but type is {found}")]
    NotAnObject { key: String, found: &'static str },
}

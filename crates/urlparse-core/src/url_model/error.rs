//! URL syntax errors.

/// Reason a string was rejected by [`super::parse_url`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("invalid control character in URL")]
    InvalidControlCharacter,
    #[error("missing protocol scheme")]
    MissingScheme,
    #[error("first path segment in URL cannot contain colon")]
    ColonInFirstSegment,
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),
    #[error("invalid character {0:?} in host name")]
    InvalidHostCharacter(String),
    #[error("missing ']' in host")]
    MissingBracket,
    #[error("invalid port {0:?} after host")]
    InvalidPort(String),
    #[error("invalid userinfo")]
    InvalidUserinfo,
}

//! URL decomposition.
//!
//! The grammar is deliberately permissive: the scheme is optional and most
//! strings parse. Only structural problems are rejected: malformed percent
//! escapes, bad ports, control characters, illegal host characters, and a
//! scheme-less first path segment containing a colon. Nothing is normalized
//! apart from lower-casing the scheme.

mod authority;
mod error;
mod escape;

pub use error::UrlError;

use serde::Serialize;
use serde_json::{Map, Value};

use authority::{parse_authority, split_host_port};
use escape::{escape, lossy, unescape, unescape_bytes, Encoding};

/// Components of a parsed URL. Absent parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    pub scheme: String,
    /// Everything after `scheme:` when it does not start with `/` (e.g. `mailto:a@b`).
    pub opaque: String,
    pub hostname: String,
    pub port: String,
    /// Percent-decoded path.
    pub path: String,
    /// Original path text, set only when re-escaping `path` would not reproduce it.
    pub raw_path: String,
    pub raw_query: String,
    /// Percent-decoded fragment.
    pub fragment: String,
}

impl ParsedUrl {
    /// The object written into events: the eight component keys, all strings.
    pub fn into_value(self) -> Value {
        let mut map = Map::with_capacity(8);
        map.insert("scheme".into(), Value::String(self.scheme));
        map.insert("opaque".into(), Value::String(self.opaque));
        map.insert("hostname".into(), Value::String(self.hostname));
        map.insert("port".into(), Value::String(self.port));
        map.insert("path".into(), Value::String(self.path));
        map.insert("raw_path".into(), Value::String(self.raw_path));
        map.insert("raw_query".into(), Value::String(self.raw_query));
        map.insert("fragment".into(), Value::String(self.fragment));
        Value::Object(map)
    }

    fn set_path(&mut self, raw: &str) -> Result<(), UrlError> {
        let decoded = unescape_bytes(raw, Encoding::Path)?;
        self.raw_path = if escape(&decoded, Encoding::Path) == raw {
            String::new()
        } else {
            raw.to_string()
        };
        self.path = lossy(decoded);
        Ok(())
    }

    fn set_host(&mut self, host: &str) {
        let (hostname, port) = split_host_port(host);
        self.hostname = hostname.to_string();
        self.port = port.to_string();
    }
}

/// Splits a leading `scheme:` off `raw`. No scheme is not an error.
fn split_scheme(raw: &str) -> Result<(&str, &str), UrlError> {
    for (i, c) in raw.bytes().enumerate() {
        match c {
            b'a'..=b'z' | b'A'..=b'Z' => {}
            b'0'..=b'9' | b'+' | b'-' | b'.' if i > 0 => {}
            b':' if i == 0 => return Err(UrlError::MissingScheme),
            b':' => return Ok((&raw[..i], &raw[i + 1..])),
            _ => return Ok(("", raw)),
        }
    }
    Ok(("", raw))
}

/// Parses `raw` into its components.
///
/// # Examples
///
/// - `"https://example.com:8443/a/b?x=1#frag"` → scheme `https`, hostname
///   `example.com`, port `8443`, path `/a/b`, raw_query `x=1`, fragment `frag`
/// - `"example.com/index.html"` → path `example.com/index.html`, everything else empty
/// - `"mailto:ops@example.com"` → scheme `mailto`, opaque `ops@example.com`
pub fn parse_url(raw: &str) -> Result<ParsedUrl, UrlError> {
    let (rest, fragment) = match raw.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (raw, None),
    };
    let mut url = parse_without_fragment(rest)?;
    if let Some(fragment) = fragment {
        url.fragment = unescape(fragment, Encoding::Fragment)?;
    }
    Ok(url)
}

fn parse_without_fragment(raw: &str) -> Result<ParsedUrl, UrlError> {
    if raw.bytes().any(|b| b < b' ' || b == 0x7f) {
        return Err(UrlError::InvalidControlCharacter);
    }

    let mut url = ParsedUrl::default();
    if raw == "*" {
        url.path = "*".into();
        return Ok(url);
    }

    let (scheme, rest) = split_scheme(raw)?;
    url.scheme = scheme.to_ascii_lowercase();

    let (mut rest, query) = rest.split_once('?').unwrap_or((rest, ""));
    url.raw_query = query.to_string();

    if !rest.starts_with('/') {
        if !url.scheme.is_empty() {
            url.opaque = rest.to_string();
            return Ok(url);
        }
        // Guards against misreading a malformed scheme such as `1http:x`.
        let first_segment = rest.split('/').next().unwrap_or_default();
        if first_segment.contains(':') {
            return Err(UrlError::ColonInFirstSegment);
        }
    }

    if (!url.scheme.is_empty() || !rest.starts_with("///")) && rest.starts_with("//") {
        let after_slashes = &rest[2..];
        let (authority, path) = match after_slashes.find('/') {
            Some(i) => after_slashes.split_at(i),
            None => (after_slashes, ""),
        };
        let host = parse_authority(authority)?;
        url.set_host(&host);
        rest = path;
    }

    url.set_path(rest)?;
    Ok(url)
}

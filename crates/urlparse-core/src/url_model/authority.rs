//! Authority section: `[userinfo@]host[:port]`.

use super::escape::{lossy, unescape_bytes, Encoding};
use super::UrlError;

/// Validates the authority and returns the decoded host, port included.
/// Userinfo is checked but not kept.
pub(crate) fn parse_authority(authority: &str) -> Result<String, UrlError> {
    let (userinfo, host) = match authority.rfind('@') {
        Some(i) => (Some(&authority[..i]), &authority[i + 1..]),
        None => (None, authority),
    };
    let host = parse_host(host)?;

    if let Some(userinfo) = userinfo {
        if !valid_userinfo(userinfo) {
            return Err(UrlError::InvalidUserinfo);
        }
        for part in userinfo.splitn(2, ':') {
            unescape_bytes(part, Encoding::UserPassword)?;
        }
    }
    Ok(host)
}

fn valid_userinfo(s: &str) -> bool {
    s.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                '-' | '.'
                    | '_'
                    | ':'
                    | '~'
                    | '!'
                    | '$'
                    | '&'
                    | '\''
                    | '('
                    | ')'
                    | '*'
                    | '+'
                    | ','
                    | ';'
                    | '='
                    | '%'
                    | '@'
            )
    })
}

fn parse_host(host: &str) -> Result<String, UrlError> {
    if host.starts_with('[') {
        let Some(close) = host.rfind(']') else {
            return Err(UrlError::MissingBracket);
        };
        let colon_port = &host[close + 1..];
        if !valid_optional_port(colon_port) {
            return Err(UrlError::InvalidPort(colon_port.to_string()));
        }
        // IPv6 zone identifier, e.g. [fe80::1%25en0]: the zone has its own rules.
        if let Some(zone) = host[..close].find("%25") {
            let mut out = unescape_bytes(&host[..zone], Encoding::Host)?;
            out.extend(unescape_bytes(&host[zone..close], Encoding::Zone)?);
            out.extend(unescape_bytes(&host[close..], Encoding::Host)?);
            return Ok(lossy(out));
        }
    } else if let Some(colon) = host.rfind(':') {
        let colon_port = &host[colon..];
        if !valid_optional_port(colon_port) {
            return Err(UrlError::InvalidPort(colon_port.to_string()));
        }
    }
    unescape_bytes(host, Encoding::Host).map(lossy)
}

/// Empty, or `:` followed by ASCII digits only.
pub(crate) fn valid_optional_port(port: &str) -> bool {
    match port.strip_prefix(':') {
        Some(digits) => digits.bytes().all(|b| b.is_ascii_digit()),
        None => port.is_empty(),
    }
}

/// Splits `host[:port]` into hostname (brackets stripped) and port.
pub(crate) fn split_host_port(host_port: &str) -> (&str, &str) {
    let (mut host, port) = match host_port.rfind(':') {
        Some(colon) if valid_optional_port(&host_port[colon..]) => {
            (&host_port[..colon], &host_port[colon + 1..])
        }
        _ => (host_port, ""),
    };
    if host.starts_with('[') && host.ends_with(']') && host.len() >= 2 {
        host = &host[1..host.len() - 1];
    }
    (host, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_with_port() {
        assert_eq!(parse_authority("example.com:8443").unwrap(), "example.com:8443");
        assert_eq!(split_host_port("example.com:8443"), ("example.com", "8443"));
    }

    #[test]
    fn non_numeric_port_rejected() {
        assert_eq!(
            parse_authority("example.com:http"),
            Err(UrlError::InvalidPort(":http".into()))
        );
    }

    #[test]
    fn ipv6_literal_and_zone() {
        assert_eq!(split_host_port("[::1]:80"), ("::1", "80"));
        assert_eq!(split_host_port("[::1]"), ("::1", ""));
        assert_eq!(
            parse_authority("[fe80::1%25en0]:8080").unwrap(),
            "[fe80::1%en0]:8080"
        );
        assert_eq!(parse_authority("[::1"), Err(UrlError::MissingBracket));
    }

    #[test]
    fn userinfo_is_validated_and_dropped() {
        assert_eq!(parse_authority("user:p%40ss@host").unwrap(), "host");
        assert_eq!(parse_authority("us er@host"), Err(UrlError::InvalidUserinfo));
        assert!(matches!(
            parse_authority("user:%zz@host"),
            Err(UrlError::InvalidEscape(_))
        ));
    }

    #[test]
    fn empty_port_is_kept_empty() {
        assert_eq!(split_host_port("example.com:"), ("example.com", ""));
    }
}

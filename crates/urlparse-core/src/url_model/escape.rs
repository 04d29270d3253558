//! Percent-escape validation, decoding and re-encoding per URL component.

use super::UrlError;

/// Component being decoded; each has its own set of characters left unescaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Encoding {
    Path,
    UserPassword,
    Host,
    Zone,
    Fragment,
}

pub(crate) fn should_escape(c: u8, mode: Encoding) -> bool {
    if c.is_ascii_alphanumeric() {
        return false;
    }

    if matches!(mode, Encoding::Host | Encoding::Zone) {
        // Sub-delims, plus ':' and brackets for IPv6 literals.
        if matches!(
            c,
            b'!' | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b':'
                | b'['
                | b']'
                | b'<'
                | b'>'
                | b'"'
        ) {
            return false;
        }
    }

    match c {
        b'-' | b'_' | b'.' | b'~' => return false,
        b'$' | b'&' | b'+' | b',' | b'/' | b':' | b';' | b'=' | b'?' | b'@' => match mode {
            Encoding::Path => return c == b'?',
            Encoding::UserPassword => return matches!(c, b'@' | b'/' | b'?' | b':'),
            Encoding::Fragment => return false,
            Encoding::Host | Encoding::Zone => {}
        },
        _ => {}
    }

    if mode == Encoding::Fragment && matches!(c, b'!' | b'(' | b')' | b'*') {
        return false;
    }

    true
}

fn unhex(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

fn escape_snippet(bytes: &[u8], start: usize) -> String {
    let end = (start + 3).min(bytes.len());
    String::from_utf8_lossy(&bytes[start..end]).into_owned()
}

/// Validates and decodes `s`. Returns raw bytes; callers decide how to treat
/// non-UTF-8 results.
pub(crate) fn unescape_bytes(s: &str, mode: Encoding) -> Result<Vec<u8>, UrlError> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if i + 2 >= bytes.len()
                    || !bytes[i + 1].is_ascii_hexdigit()
                    || !bytes[i + 2].is_ascii_hexdigit()
                {
                    return Err(UrlError::InvalidEscape(escape_snippet(bytes, i)));
                }
                let is_pct25 = &bytes[i..i + 3] == b"%25";
                // In a host, escapes may only encode non-ASCII bytes; %25 is
                // allowed for IPv6 zone identifiers.
                if mode == Encoding::Host && unhex(bytes[i + 1]) < 8 && !is_pct25 {
                    return Err(UrlError::InvalidEscape(escape_snippet(bytes, i)));
                }
                if mode == Encoding::Zone {
                    let v = unhex(bytes[i + 1]) << 4 | unhex(bytes[i + 2]);
                    if !is_pct25 && v != b' ' && should_escape(v, Encoding::Host) {
                        return Err(UrlError::InvalidEscape(escape_snippet(bytes, i)));
                    }
                }
                i += 3;
            }
            c => {
                if matches!(mode, Encoding::Host | Encoding::Zone)
                    && c < 0x80
                    && should_escape(c, mode)
                {
                    return Err(UrlError::InvalidHostCharacter((c as char).to_string()));
                }
                i += 1;
            }
        }
    }

    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            out.push(unhex(bytes[i + 1]) << 4 | unhex(bytes[i + 2]));
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(out)
}

pub(crate) fn unescape(s: &str, mode: Encoding) -> Result<String, UrlError> {
    unescape_bytes(s, mode).map(lossy)
}

pub(crate) fn lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Percent-encodes every byte `should_escape` flags, with upper-case hex.
pub(crate) fn escape(bytes: &[u8], mode: Encoding) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(bytes.len());
    for &c in bytes {
        if should_escape(c, mode) {
            out.push('%');
            out.push(HEX[(c >> 4) as usize] as char);
            out.push(HEX[(c & 0x0f) as usize] as char);
        } else {
            out.push(c as char);
        }
    }
    out
}

use url::Url;

use crate::error::{ErrorKind, ValidationError};

/// Base used only to check that a relative reference resolves.
const RESOLUTION_BASE: &str = "http://localhost/";

/// Characters RFC 3986 never allows unescaped anywhere in a URI reference.
const FORBIDDEN: &[char] = &['<', '>', '"', '{', '}', '|', '\\', '^', '`'];

/// Validates a URI reference (RFC 3986).
///
/// Accepts absolute URIs (`https://example.com/feed.xml`, `mailto:a@b.c`) and
/// relative references (`/feed.xml`, `../img.png`). Rejects the empty string,
/// whitespace, control characters and characters outside the RFC 3986 set.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidUri`] with the parser's reason on failure.
///
/// # Examples
///
/// ```
/// use rss_validate::util::valid_uri;
///
/// assert!(valid_uri("https://example.com/feed.xml").is_ok());
/// assert!(valid_uri("/feed.xml").is_ok());
/// assert!(valid_uri("not a uri").is_err());
/// assert!(valid_uri("").is_err());
/// ```
pub fn valid_uri(s: &str) -> Result<(), ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::with_reason(
            ErrorKind::InvalidUri,
            "empty URI",
        ));
    }

    if let Some(c) = s
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || FORBIDDEN.contains(c))
    {
        return Err(ValidationError::with_reason(
            ErrorKind::InvalidUri,
            format!("invalid character {:?}", c),
        ));
    }

    check_reference_syntax(s)
        .map_err(|reason| ValidationError::with_reason(ErrorKind::InvalidUri, reason))?;

    match Url::parse(s) {
        Ok(_) => Ok(()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            // Relative reference: it must still resolve against some base.
            let base = Url::parse(RESOLUTION_BASE)
                .map_err(|e| ValidationError::with_reason(ErrorKind::InvalidUri, e.to_string()))?;
            base.join(s)
                .map(|_| ())
                .map_err(|e| ValidationError::with_reason(ErrorKind::InvalidUri, e.to_string()))
        }
        Err(e) => Err(ValidationError::with_reason(
            ErrorKind::InvalidUri,
            e.to_string(),
        )),
    }
}

/// RFC 3986 rules the WHATWG parser in `url` repairs instead of rejecting.
fn check_reference_syntax(s: &str) -> Result<(), String> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
        {
            return Err(format!("invalid percent-encoding at byte {}", i));
        }
    }

    if s.matches('#').count() > 1 {
        return Err("more than one '#'".to_string());
    }

    if s.contains(['[', ']']) {
        let host = authority(s)
            .map(|a| a.rsplit_once('@').map_or(a, |(_, host)| host))
            .unwrap_or("");
        let literal = host.starts_with('[')
            && host
                .rfind(']')
                .is_some_and(|end| host[end + 1..].is_empty() || host[end + 1..].starts_with(':'));
        let brackets = s.matches(['[', ']']).count();
        if !literal || brackets != 2 {
            return Err("'[' and ']' are only allowed around an IP literal host".to_string());
        }
    }

    Ok(())
}

/// The authority component (between `//` and the path), if the reference has one.
fn authority(s: &str) -> Option<&str> {
    let rest = match s.find(':') {
        Some(colon)
            if s[..colon].starts_with(|c: char| c.is_ascii_alphabetic())
                && s[..colon]
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) =>
        {
            &s[colon + 1..]
        }
        _ => s,
    };
    let rest = rest.strip_prefix("//")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

use std::ops::RangeInclusive;

use crate::error::{ErrorKind, ValidationError};

/// Fails with [`ErrorKind::EmptyValue`] if `s` is the empty string.
pub fn not_empty(s: &str) -> Result<(), ValidationError> {
    if s.is_empty() {
        return Err(ErrorKind::EmptyValue.into());
    }
    Ok(())
}

/// Fails with [`ErrorKind::NonEmptyValue`] unless `s` is the empty string.
///
/// Used for elements that only carry attributes, like `<cloud>` and
/// `<enclosure>`.
pub fn must_be_empty(s: &str) -> Result<(), ValidationError> {
    if !s.is_empty() {
        return Err(ErrorKind::NonEmptyValue.into());
    }
    Ok(())
}

/// Fails with [`ErrorKind::InvalidValue`] unless `s` is exactly one of `allowed`.
///
/// Matching is case-sensitive.
///
/// # Examples
///
/// ```
/// use rss_validate::util::valid_enum;
///
/// assert!(valid_enum("soap", &["xml-rpc", "soap", "http-post"]).is_ok());
/// assert!(valid_enum("SOAP", &["xml-rpc", "soap", "http-post"]).is_err());
/// ```
pub fn valid_enum(s: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&s) {
        return Ok(());
    }
    let expected = allowed
        .iter()
        .map(|a| format!("\"{}\"", a))
        .collect::<Vec<_>>()
        .join(", ");
    Err(ValidationError::with_reason(
        ErrorKind::InvalidValue,
        format!("must be one of {}", expected),
    ))
}

/// Fails with [`ErrorKind::InvalidValue`] unless `s` is a decimal integer
/// within `bounds`.
///
/// Only ASCII digits are accepted: no sign, no whitespace, no separators.
///
/// # Examples
///
/// ```
/// use rss_validate::util::bounded_uint;
///
/// assert!(bounded_uint("144", 0..=144).is_ok());
/// assert!(bounded_uint("145", 0..=144).is_err());
/// assert!(bounded_uint("+1", 0..=144).is_err());
/// ```
pub fn bounded_uint(s: &str, bounds: RangeInclusive<u64>) -> Result<(), ValidationError> {
    let out_of_range = || {
        if *bounds.end() == u64::MAX {
            ValidationError::with_reason(ErrorKind::InvalidValue, "must be a non-negative integer")
        } else {
            ValidationError::with_reason(
                ErrorKind::InvalidValue,
                format!(
                    "must be an integer between {} and {}",
                    bounds.start(),
                    bounds.end()
                ),
            )
        }
    };

    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(out_of_range());
    }
    match s.parse::<u64>() {
        Ok(n) if bounds.contains(&n) => Ok(()),
        _ => Err(out_of_range()),
    }
}

/// [`bounded_uint`] without an upper bound.
pub fn non_negative_int(s: &str) -> Result<(), ValidationError> {
    bounded_uint(s, 0..=u64::MAX)
}

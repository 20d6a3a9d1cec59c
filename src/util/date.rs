//! RFC 822 / RFC 1123 date-time parsing.
//!
//! RSS 2.0 dates follow RFC 822 with the exception that the year may have two
//! or four digits. The accepted grammar is:
//!
//! ```text
//! [ day-name "," ] day month year hh ":" mm [ ":" ss ] zone
//! ```
//!
//! The day name must be a real weekday but is not cross-checked against the
//! date.

use chrono::{DateTime, FixedOffset, Month, NaiveDate, NaiveTime, Weekday};

use crate::error::{ErrorKind, ValidationError};

/// Validates an RFC 822 / RFC 1123 date.
///
/// # Examples
///
/// ```
/// use rss_validate::util::valid_date;
///
/// assert!(valid_date("01 Jan 70 00:00 GMT").is_ok());
/// assert!(valid_date("Thu, 01 Jan 1970 00:00:00 GMT").is_ok());
/// assert!(valid_date("bad date").is_err());
/// ```
pub fn valid_date(s: &str) -> Result<(), ValidationError> {
    parse_date(s).map(|_| ())
}

/// Parses an RFC 822 / RFC 1123 date into a timestamp with offset.
///
/// Zone abbreviations outside RFC 822's list are accepted and read as UTC.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidDate`] naming the first component that failed.
pub fn parse_date(s: &str) -> Result<DateTime<FixedOffset>, ValidationError> {
    let invalid = |reason: &str| ValidationError::with_reason(ErrorKind::InvalidDate, reason);

    let rest = match s.split_once(',') {
        Some((day_name, rest)) => {
            parse_weekday(day_name.trim()).ok_or_else(|| invalid("unknown day name"))?;
            rest
        }
        None => s,
    };

    let mut parts = rest.split_whitespace();
    let day = parts.next().ok_or_else(|| invalid("missing day"))?;
    let month = parts.next().ok_or_else(|| invalid("missing month"))?;
    let year = parts.next().ok_or_else(|| invalid("missing year"))?;
    let time = parts.next().ok_or_else(|| invalid("missing time"))?;
    let zone = parts.next().ok_or_else(|| invalid("missing zone"))?;
    if parts.next().is_some() {
        return Err(invalid("trailing characters"));
    }

    let day = parse_digits(day, 1..=2).ok_or_else(|| invalid("day must be one or two digits"))?;
    let month = parse_month(month).ok_or_else(|| invalid("unknown month name"))?;
    let year = parse_year(year).ok_or_else(|| invalid("year must be two or four digits"))?;
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid("day out of range for month"))?;
    let time = parse_time(time).ok_or_else(|| invalid("time must be hh:mm or hh:mm:ss"))?;
    let offset = parse_zone(zone).ok_or_else(|| invalid("unknown time zone"))?;

    date.and_time(time)
        .and_local_timezone(offset)
        .single()
        .ok_or_else(|| invalid("ambiguous local time"))
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    if s.len() != 3 {
        return None;
    }
    s.parse().ok()
}

fn parse_month(s: &str) -> Option<u32> {
    if s.len() != 3 {
        return None;
    }
    s.parse::<Month>().ok().map(|m| m.number_from_month())
}

fn parse_digits(s: &str, width: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !width.contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_year(s: &str) -> Option<i32> {
    let digits = parse_digits(s, 2..=4)?;
    let year = i32::try_from(digits).ok()?;
    match s.len() {
        // Same pivot as Go and POSIX strptime: 69-99 → 1900s, 00-68 → 2000s.
        2 if year >= 69 => Some(1900 + year),
        2 => Some(2000 + year),
        4 => Some(year),
        _ => None,
    }
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let mut fields = s.split(':');
    let hour = parse_digits(fields.next()?, 2..=2)?;
    let minute = parse_digits(fields.next()?, 2..=2)?;
    let second = match fields.next() {
        Some(sec) => parse_digits(sec, 2..=2)?,
        None => 0,
    };
    if fields.next().is_some() {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, second)
}

fn parse_zone(s: &str) -> Option<FixedOffset> {
    const HOUR: i32 = 3600;

    if let Some(sign) = s.strip_prefix('+').map(|_| 1).or(s.strip_prefix('-').map(|_| -1)) {
        let digits = &s[1..];
        let value = parse_digits(digits, 4..=4)?;
        let hours = i32::try_from(value / 100).ok()?;
        let minutes = i32::try_from(value % 100).ok()?;
        if minutes >= 60 {
            return None;
        }
        return FixedOffset::east_opt(sign * (hours * HOUR + minutes * 60));
    }

    let offset_hours = match s {
        "UT" | "UTC" | "GMT" | "Z" => 0,
        "EST" => -5,
        "EDT" => -4,
        "CST" => -6,
        "CDT" => -5,
        "MST" => -7,
        "MDT" => -6,
        "PST" => -8,
        "PDT" => -7,
        // RFC 822 military zones; their signs are unreliable in practice and
        // RFC 1123 says to read them as UTC.
        military if military.len() == 1 && military.bytes().all(|b| b.is_ascii_uppercase()) => {
            if military == "J" {
                return None;
            }
            0
        }
        other if (3..=5).contains(&other.len()) && other.bytes().all(|b| b.is_ascii_uppercase()) => {
            tracing::debug!(zone = %other, "Unrecognised zone abbreviation, reading as UTC");
            0
        }
        _ => return None,
    };
    FixedOffset::east_opt(offset_hours * HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc822_two_digit_year() {
        assert!(valid_date("01 Jan 70 00:00 GMT").is_ok());
        let dt = parse_date("02 Jan 06 15:04 MST").unwrap();
        assert_eq!(dt.to_rfc3339(), "2006-01-02T15:04:00-07:00");
    }

    #[test]
    fn test_rfc1123() {
        assert!(valid_date("Thu, 01 Jan 1970 00:00:00 GMT").is_ok());
        assert!(valid_date("Sat, 07 Sep 2002 09:42:31 GMT").is_ok());
    }

    #[test]
    fn test_numeric_offset() {
        let dt = parse_date("Tue, 10 Jun 2003 04:00:00 +0130").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 5400);
        let dt = parse_date("Tue, 10 Jun 2003 04:00:00 -0500").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_weekday_not_cross_checked() {
        // 1970-01-01 was a Thursday.
        assert!(valid_date("Mon, 01 Jan 1970 00:00:00 GMT").is_ok());
    }

    #[test]
    fn test_unknown_weekday_rejected() {
        let err = valid_date("Foo, 01 Jan 1970 00:00:00 GMT").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidDate);
    }

    #[test]
    fn test_single_digit_day() {
        assert!(valid_date("1 Jan 2024 10:00 GMT").is_ok());
    }

    #[test]
    fn test_calendar_checked() {
        assert!(valid_date("30 Feb 2024 10:00 GMT").is_err());
        assert!(valid_date("29 Feb 2024 10:00 GMT").is_ok());
        assert!(valid_date("01 Jan 2024 24:00 GMT").is_err());
        assert!(valid_date("01 Jan 2024 10:60 GMT").is_err());
    }

    #[test]
    fn test_malformed_rejected() {
        assert!(valid_date("").is_err());
        assert!(valid_date("bad date").is_err());
        assert!(valid_date("2024-01-01T00:00:00Z").is_err());
        assert!(valid_date("01 January 2024 10:00 GMT").is_err());
        assert!(valid_date("01 Jan 024 10:00 GMT").is_err());
        assert!(valid_date("01 Jan 2024 10:00").is_err());
        assert!(valid_date("01 Jan 2024 10:00 GMT extra").is_err());
        assert!(valid_date("01 Jan 2024 10:00 +05").is_err());
    }

    #[test]
    fn test_zone_abbreviations() {
        assert!(valid_date("01 Jan 2024 10:00 CET").is_ok());
        assert!(valid_date("01 Jan 2024 10:00 Z").is_ok());
        assert!(valid_date("01 Jan 2024 10:00 J").is_err());
        assert!(valid_date("01 Jan 2024 10:00 gmt").is_err());
    }
}

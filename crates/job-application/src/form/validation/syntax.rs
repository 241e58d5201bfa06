use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime};
use regex::Regex;
use url::Url;

const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

const LOCAL_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
        )
        .expect("email pattern compiles")
    })
}

pub(crate) fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Matched as typed; surrounding whitespace is not an address.
pub(crate) fn is_email(raw: &str) -> bool {
    !raw.contains("..") && email_pattern().is_match(raw)
}

pub(crate) fn is_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit())
}

/// Coerces text-input content into a number. Non-finite values are not numbers here.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub(crate) fn is_url(raw: &str) -> bool {
    match Url::parse(raw.trim()) {
        Ok(url) => {
            URL_SCHEMES.contains(&url.scheme())
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Accepts `datetime-local` values and RFC 3339 timestamps.
pub(crate) fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.naive_local());
    }
    LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

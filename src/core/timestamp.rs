//! Timestamp formatting utilities
//!
//! The `{time}` token of a transport template is rendered through a
//! [`TimestampFormat`]. Timestamps are rendered in the local time zone.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Time pattern used by a transport for its `{time}` token
///
/// # Examples
///
/// ```
/// use transport_logger::TimestampFormat;
/// use chrono::Local;
///
/// let format = TimestampFormat::Custom("%Y-%m-%d".to_string());
/// let rendered = format.format(&Local::now());
/// assert_eq!(rendered.len(), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Short numeric date followed by 24-hour time: `1/8/2025 10:30:45`
    #[default]
    Short,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45.123456789+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Any strftime-compatible pattern
    ///
    /// A pattern chrono cannot interpret is rendered verbatim instead of
    /// failing the log call.
    Custom(String),
}

impl TimestampFormat {
    pub const SHORT_PATTERN: &'static str = "%-m/%-d/%Y %H:%M:%S";

    /// Build a custom strftime format
    pub fn custom(pattern: impl Into<String>) -> Self {
        TimestampFormat::Custom(pattern.into())
    }

    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Short => strftime(datetime, Self::SHORT_PATTERN),
            TimestampFormat::Iso8601 => strftime(datetime, "%Y-%m-%dT%H:%M:%S%.3f%:z"),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => strftime(datetime, pattern),
        }
    }
}

impl From<&str> for TimestampFormat {
    fn from(pattern: &str) -> Self {
        TimestampFormat::Custom(pattern.to_string())
    }
}

// chrono reports bad specifiers through fmt::Error; `to_string()` would panic.
fn strftime(datetime: &DateTime<Local>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    match write!(out, "{}", datetime.format(pattern)) {
        Ok(()) => out,
        Err(_) => pattern.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_short_format() {
        assert_eq!(TimestampFormat::Short.format(&fixed_datetime()), "1/8/2025 10:30:45");
    }

    #[test]
    fn test_iso8601_format() {
        let out = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert!(out.starts_with("2025-01-08T10:30:45.000"));
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::custom("%Y-%m-%d");
        assert_eq!(format.format(&fixed_datetime()), "2025-01-08");
    }

    #[test]
    fn test_invalid_custom_pattern_renders_verbatim() {
        let format = TimestampFormat::custom("%Q oops");
        assert_eq!(format.format(&fixed_datetime()), "%Q oops");
    }

    #[test]
    fn test_unix_format() {
        let dt = fixed_datetime();
        assert_eq!(TimestampFormat::Unix.format(&dt), dt.timestamp().to_string());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&TimestampFormat::custom("%H")).unwrap();
        assert_eq!(json, r#"{"custom":"%H"}"#);
        let back: TimestampFormat = serde_json::from_str("\"short\"").unwrap();
        assert_eq!(back, TimestampFormat::Short);
    }
}

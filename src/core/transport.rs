//! Transport trait for log output destinations

use super::{
    error::Result, log_level::LoggerLevel, log_record::LogRecord, template,
    timestamp::TimestampFormat,
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Configuration every transport carries
///
/// Replace or edit it at any time; only later log calls see the change.
///
/// # Example
///
/// ```
/// use transport_logger::{LoggerLevel, TransportConfig};
///
/// let config = TransportConfig::new()
///     .with_log_format("{level} {content}")
///     .with_custom_time("%H:%M")
///     .with_minimum_level(LoggerLevel::Debug);
/// assert_eq!(config.minimum_level, LoggerLevel::Debug);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Line template, see [`crate::core::template`]
    pub log_format: String,
    /// Pattern for the `{time}` token
    pub time_format: TimestampFormat,
    /// Records below this level are skipped
    pub minimum_level: LoggerLevel,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            log_format: template::DEFAULT_LOG_FORMAT.to_string(),
            time_format: TimestampFormat::default(),
            minimum_level: LoggerLevel::Info,
        }
    }
}

impl TransportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_log_format(mut self, format: impl Into<String>) -> Self {
        self.log_format = format.into();
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_time_format(mut self, format: TimestampFormat) -> Self {
        self.time_format = format;
        self
    }

    /// Use a strftime-compatible pattern for `{time}`
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_custom_time(mut self, pattern: &str) -> Self {
        self.time_format = TimestampFormat::custom(pattern);
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_minimum_level(mut self, level: LoggerLevel) -> Self {
        self.minimum_level = level;
        self
    }
}

/// A destination for log records.
///
/// The logger reads [`TransportConfig`] to decide whether a record reaches the
/// transport and how the line is laid out; the transport only writes the
/// finished record and renders timestamps.
pub trait Transport: Send + Sync {
    /// Write one accepted record.
    fn log(&mut self, record: &LogRecord) -> Result<()>;

    /// Render the `{time}` token.
    fn time(&self, time: &DateTime<Local>) -> String {
        self.config().time_format.format(time)
    }

    fn config(&self) -> &TransportConfig;

    fn config_mut(&mut self) -> &mut TransportConfig;

    fn name(&self) -> &str;

    fn minimum_level(&self) -> LoggerLevel {
        self.config().minimum_level
    }

    fn set_minimum_level(&mut self, level: LoggerLevel) {
        self.config_mut().minimum_level = level;
    }

    fn set_log_format(&mut self, format: &str) {
        self.config_mut().log_format = format.to_string();
    }

    fn set_time_format(&mut self, format: TimestampFormat) {
        self.config_mut().time_format = format;
    }

    /// Push buffered output to its destination.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransportConfig::default();
        assert_eq!(config.log_format, "{time} | {level} | {name} | {content}");
        assert_eq!(config.time_format, TimestampFormat::Short);
        assert_eq!(config.minimum_level, LoggerLevel::Info);
    }

    #[test]
    fn test_partial_json() {
        let config: TransportConfig =
            serde_json::from_str(r#"{"minimum_level":"debug"}"#).unwrap();
        assert_eq!(config.minimum_level, LoggerLevel::Debug);
        assert_eq!(config.log_format, template::DEFAULT_LOG_FORMAT);
    }
}

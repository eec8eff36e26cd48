//! Per-call log record handed to transports

use super::log_level::LoggerLevel;
use chrono::{DateTime, Local};

/// One fully rendered line for one transport.
///
/// Records are built by the logger for every transport that accepts the call
/// and are dropped once the transport returns; nothing retains or replays
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Name of the logger that produced the record
    pub name: String,
    pub level: LoggerLevel,
    /// Instant of the log call, shared by every transport of that call
    pub time: DateTime<Local>,
    /// Line with the plain level label, for files and other plain sinks
    pub raw: String,
    /// Line with the colour-wrapped level label, for terminals
    pub formatted: String,
}

impl LogRecord {
    pub fn new(
        name: impl Into<String>,
        level: LoggerLevel,
        time: DateTime<Local>,
        raw: String,
        formatted: String,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            time,
            raw,
            formatted,
        }
    }
}

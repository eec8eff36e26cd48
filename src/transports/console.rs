//! Console transport implementation

use crate::core::{LogRecord, LoggerError, LoggerLevel, Result, TimestampFormat, Transport, TransportConfig};
use std::io::{self, Write};

/// Writes the colour-formatted line to the terminal.
///
/// Warning and Error go to stderr, everything else to stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleTransport {
    config: TransportConfig,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Set the line template for this transport
    ///
    /// # Example
    ///
    /// ```
    /// use transport_logger::ConsoleTransport;
    ///
    /// let transport = ConsoleTransport::new()
    ///     .with_log_format("{time} {level} {fileName}:{lineNumber} {content}");
    /// ```
    #[must_use]
    pub fn with_log_format(mut self, format: impl Into<String>) -> Self {
        self.config.log_format = format.into();
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, format: TimestampFormat) -> Self {
        self.config.time_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    #[must_use]
    pub fn with_custom_time(mut self, format_str: &str) -> Self {
        self.config.time_format = TimestampFormat::custom(format_str);
        self
    }

    #[must_use]
    pub fn with_minimum_level(mut self, level: LoggerLevel) -> Self {
        self.config.minimum_level = level;
        self
    }
}

impl Transport for ConsoleTransport {
    fn log(&mut self, record: &LogRecord) -> Result<()> {
        let written = if record.level.is_problem() {
            writeln!(io::stderr().lock(), "{}", record.formatted)
        } else {
            writeln!(io::stdout().lock(), "{}", record.formatted)
        };
        written.map_err(|e| LoggerError::io_operation("writing to console", record.level.to_str(), e))
    }

    fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut TransportConfig {
        &mut self.config
    }

    fn name(&self) -> &str {
        "console"
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}

//! Loading a logger setup from a configuration document

use super::{
    error::{LoggerError, Result},
    logger::Logger,
    transport::TransportConfig,
};
use crate::transports::{ConsoleTransport, FileTransportConfig, PlainFileTransport};
use serde::{Deserialize, Serialize};

/// Declarative description of a logger and its built-in transports
///
/// Every field is optional in the document. Omitting `console` and `file`
/// yields a logger without transports.
///
/// # Example
///
/// ```
/// use transport_logger::LoggerConfig;
///
/// let logger = LoggerConfig::from_json(r#"{
///     "name": "api",
///     "console": { "minimum_level": "debug", "time_format": "iso8601" }
/// }"#)
/// .unwrap()
/// .build()
/// .unwrap();
///
/// assert_eq!(logger.name(), "api");
/// assert_eq!(logger.transport_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub name: String,
    pub console: Option<TransportConfig>,
    pub file: Option<FileTransportConfig>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            console: None,
            file: None,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(document: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file {
            if file.log_path.as_os_str().is_empty() {
                return Err(LoggerError::config("file", "log_path must not be empty"));
            }
        }
        Ok(())
    }

    /// Console first, then file
    pub fn build(&self) -> Result<Logger> {
        self.validate()?;

        let mut builder = Logger::builder().name(self.name.clone());
        if let Some(console) = &self.console {
            builder = builder.transport(ConsoleTransport::with_config(console.clone()));
        }
        if let Some(file) = &self.file {
            builder = builder.transport(PlainFileTransport::with_config(file.clone()));
        }
        Ok(builder.build())
    }
}

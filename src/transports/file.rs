//! Plain file transport with daily rollover
//!
//! Each logger writes to `{name}-latest.log` inside the transport's
//! directory. Once that file is 24 hours old (measured from its creation
//! time, so appends do not extend it) it is renamed to
//! `{name}-{YYYY-MM-DD}.log`, named after the day it was created, and a new
//! `{name}-latest.log` is started with the current record. With a retention
//! count set, the oldest archives (by modification time) are deleted until at
//! most that many remain.
//!
//! File handles are opened and closed within each write.

use super::clock::Clock;
use crate::core::{LogRecord, LoggerError, LoggerLevel, Result, TimestampFormat, Transport, TransportConfig};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Age at which `{name}-latest.log` is archived (86 400 000 ms)
pub const ROLLOVER_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Directory used when none is configured, relative to the working directory
pub const DEFAULT_LOG_PATH: &str = "logs";

/// Retention value meaning "keep every archive"
pub const UNLIMITED_RETENTION: i64 = -1;

const LATEST_SUFFIX: &str = "-latest.log";
const ARCHIVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration for [`PlainFileTransport`]
///
/// # Examples
///
/// ```
/// use transport_logger::FileTransportConfig;
///
/// let config: FileTransportConfig = serde_json::from_str(
///     r#"{ "log_path": "/var/log/app", "file_retention": 7, "minimum_level": "debug" }"#,
/// ).unwrap();
/// assert_eq!(config.file_retention, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTransportConfig {
    #[serde(flatten)]
    pub transport: TransportConfig,
    /// Directory holding the log files; created (non-recursively) on demand
    pub log_path: PathBuf,
    /// Archives kept per logger name; negative keeps all of them
    pub file_retention: i64,
}

impl Default for FileTransportConfig {
    fn default() -> Self {
        Self {
            transport: TransportConfig::default(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            file_retention: UNLIMITED_RETENTION,
        }
    }
}

/// File transport writing one rolling file per logger name
///
/// # Examples
///
/// ```no_run
/// use transport_logger::prelude::*;
///
/// let transport = PlainFileTransport::new()
///     .with_log_path("/var/log/myapp")
///     .with_file_retention(7)
///     .with_minimum_level(LoggerLevel::Debug);
///
/// let logger = Logger::new("myapp").with_transport(transport);
/// logger.info(&[&"written to /var/log/myapp/myapp-latest.log"]);
/// ```
#[derive(Debug, Clone)]
pub struct PlainFileTransport {
    config: TransportConfig,
    log_path: PathBuf,
    file_retention: i64,
    clock: Clock,
}

impl Default for PlainFileTransport {
    fn default() -> Self {
        Self::with_config(FileTransportConfig::default())
    }
}

impl PlainFileTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FileTransportConfig) -> Self {
        Self {
            config: config.transport,
            log_path: config.log_path,
            file_retention: config.file_retention,
            clock: Clock::default(),
        }
    }

    #[must_use]
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Keep at most `count` archives per logger; negative keeps all
    #[must_use]
    pub fn with_file_retention(mut self, count: i64) -> Self {
        self.file_retention = count;
        self
    }

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

    /// Replace the source of "now" used for the age check
    #[must_use]
    pub fn with_clock(mut self, clock: impl Into<Clock>) -> Self {
        self.clock = clock.into();
        self
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn set_log_path(&mut self, path: impl Into<PathBuf>) {
        self.log_path = path.into();
    }

    pub fn file_retention(&self) -> i64 {
        self.file_retention
    }

    pub fn set_file_retention(&mut self, count: i64) {
        self.file_retention = count;
    }

    /// Path of the file currently written for logger `name`
    pub fn latest_path(&self, name: &str) -> PathBuf {
        self.log_path.join(format!("{}{}", name, LATEST_SUFFIX))
    }

    /// Path a latest file created at `created` is archived under
    pub fn archive_path(&self, name: &str, created: SystemTime) -> PathBuf {
        let date: DateTime<Local> = created.into();
        self.log_path
            .join(format!("{}-{}.log", name, date.format(ARCHIVE_DATE_FORMAT)))
    }

    fn ensure_directory(&self) -> Result<()> {
        if self.log_path.is_dir() {
            return Ok(());
        }
        match fs::create_dir(&self.log_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(LoggerError::io_operation(
                "create log directory",
                format!("Failed to create directory '{}'", self.log_path.display()),
                e,
            )),
        }
    }

    /// Append to the latest file, archiving it first if it is old enough
    fn append_or_roll(&self, name: &str, latest: &Path, line: &str) -> io::Result<()> {
        let metadata = fs::metadata(latest)?;
        // Not every filesystem records birth time.
        let created = metadata.created().or_else(|_| metadata.modified())?;
        let age = self
            .clock
            .now()
            .duration_since(created)
            .unwrap_or(Duration::ZERO);

        if age >= ROLLOVER_AGE {
            fs::rename(latest, self.archive_path(name, created))?;
            if self.file_retention >= 0 {
                self.enforce_retention(name)?;
            }
            return fs::write(latest, line);
        }

        let mut file = OpenOptions::new().append(true).open(latest)?;
        file.write_all(line.as_bytes())
    }

    /// Delete the oldest archives of `name` beyond the retention count
    fn enforce_retention(&self, name: &str) -> io::Result<()> {
        let keep = usize::try_from(self.file_retention).unwrap_or(0);
        let prefix = format!("{}-", name);

        let mut archives = Vec::new();
        for entry in fs::read_dir(&self.log_path)? {
            let Ok(entry) = entry else {
                continue;
            };
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if !is_archive_of(file_name, &prefix) {
                continue;
            }
            let modified = match fs::metadata(entry.path()).and_then(|m| m.modified()) {
                Ok(modified) => modified,
                Err(e) => {
                    eprintln!("[WARN] Skipping log archive {}: {}", entry.path().display(), e);
                    continue;
                }
            };
            archives.push((modified, entry.path()));
        }

        if archives.len() <= keep {
            return Ok(());
        }

        archives.sort();
        let excess = archives.len() - keep;
        for (_, path) in archives.into_iter().take(excess) {
            if let Err(e) = fs::remove_file(&path) {
                eprintln!("[WARN] Failed to remove old log archive {}: {}", path.display(), e);
            }
        }
        Ok(())
    }
}

/// `{name}-YYYY-MM-DD.log`; other loggers sharing the prefix do not match
fn is_archive_of(file_name: &str, prefix: &str) -> bool {
    let Some(date) = file_name
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(".log"))
    else {
        return false;
    };
    date.len() == "YYYY-MM-DD".len() && NaiveDate::parse_from_str(date, ARCHIVE_DATE_FORMAT).is_ok()
}

impl Transport for PlainFileTransport {
    fn log(&mut self, record: &LogRecord) -> Result<()> {
        self.ensure_directory()?;

        let latest = self.latest_path(&record.name);
        let line = format!("{}\n", record.raw);

        if let Err(e) = self.append_or_roll(&record.name, &latest, &line) {
            if e.kind() != io::ErrorKind::NotFound {
                eprintln!(
                    "[WARN] Could not append to {}: {}. Starting a new file.",
                    latest.display(),
                    e
                );
            }
            fs::write(&latest, &line).map_err(|e| {
                LoggerError::file_transport(
                    latest.display().to_string(),
                    format!("Failed to write log entry: {}", e),
                )
            })?;
        }

        Ok(())
    }

    fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut TransportConfig {
        &mut self.config
    }

    fn name(&self) -> &str {
        "PlainFileTransport"
    }
}

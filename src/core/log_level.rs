//! Log level definitions

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, in ascending order.
///
/// Ordering is what transports compare against their threshold: a record is
/// emitted when `level >= minimum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LoggerLevel {
    Debug = 0,
    Notice = 1,
    #[default]
    Info = 2,
    Success = 3,
    Warning = 4,
    Error = 5,
}

impl LoggerLevel {
    /// Every level, lowest first.
    pub const ALL: [LoggerLevel; 6] = [
        LoggerLevel::Debug,
        LoggerLevel::Notice,
        LoggerLevel::Info,
        LoggerLevel::Success,
        LoggerLevel::Warning,
        LoggerLevel::Error,
    ];

    /// Width shared by every label, so columns line up.
    pub const LABEL_WIDTH: usize = 7;

    /// Fixed-width tag used for the `{level}` token.
    pub fn label(&self) -> &'static str {
        match self {
            LoggerLevel::Debug => " debug ",
            LoggerLevel::Notice => "notice ",
            LoggerLevel::Info => " info  ",
            LoggerLevel::Success => "success",
            LoggerLevel::Warning => "warning",
            LoggerLevel::Error => " error ",
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LoggerLevel::Debug => "debug",
            LoggerLevel::Notice => "notice",
            LoggerLevel::Info => "info",
            LoggerLevel::Success => "success",
            LoggerLevel::Warning => "warning",
            LoggerLevel::Error => "error",
        }
    }

    /// Wrap `text` in this level's display colour.
    pub fn colorize(&self, text: &str) -> ColoredString {
        match self {
            LoggerLevel::Debug => text.bright_black(),
            LoggerLevel::Notice => text.on_bright_red(),
            LoggerLevel::Info => text.blue(),
            LoggerLevel::Success => text.bright_green(),
            LoggerLevel::Warning => text.bright_yellow(),
            LoggerLevel::Error => text.bright_red(),
        }
    }

    /// The label wrapped in the level colour.
    pub fn colored_label(&self) -> String {
        self.colorize(self.label()).to_string()
    }

    /// Whether a record at this level passes a `minimum` threshold.
    #[inline]
    pub fn meets(&self, minimum: LoggerLevel) -> bool {
        *self >= minimum
    }

    /// Records at this level go to stderr on the console.
    #[inline]
    pub fn is_problem(&self) -> bool {
        *self >= LoggerLevel::Warning
    }
}

impl fmt::Display for LoggerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LoggerLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LoggerLevel::Debug),
            "notice" => Ok(LoggerLevel::Notice),
            "info" => Ok(LoggerLevel::Info),
            "success" => Ok(LoggerLevel::Success),
            "warning" | "warn" => Ok(LoggerLevel::Warning),
            "error" => Ok(LoggerLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_share_width() {
        for level in LoggerLevel::ALL {
            assert_eq!(level.label().len(), LoggerLevel::LABEL_WIDTH, "{level}");
        }
    }

    #[test]
    fn test_ordering() {
        assert!(LoggerLevel::Debug < LoggerLevel::Notice);
        assert!(LoggerLevel::Notice < LoggerLevel::Info);
        assert!(LoggerLevel::Info < LoggerLevel::Success);
        assert!(LoggerLevel::Success < LoggerLevel::Warning);
        assert!(LoggerLevel::Warning < LoggerLevel::Error);
    }

    #[test]
    fn test_meets() {
        assert!(LoggerLevel::Error.meets(LoggerLevel::Debug));
        assert!(LoggerLevel::Info.meets(LoggerLevel::Info));
        assert!(!LoggerLevel::Notice.meets(LoggerLevel::Info));
    }

    #[test]
    fn test_parse() {
        assert_eq!("WARN".parse::<LoggerLevel>(), Ok(LoggerLevel::Warning));
        assert_eq!(" success ".parse::<LoggerLevel>(), Ok(LoggerLevel::Success));
        assert!("fatal".parse::<LoggerLevel>().is_err());
    }

    #[test]
    fn test_colorize_keeps_text() {
        colored::control::set_override(true);
        let painted = LoggerLevel::Error.colored_label();
        assert!(painted.contains(" error "));
        assert!(painted.starts_with("\u{1b}["));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LoggerLevel::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let level: LoggerLevel = serde_json::from_str("\"notice\"").unwrap();
        assert_eq!(level, LoggerLevel::Notice);
    }
}

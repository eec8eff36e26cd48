//! Logging macros that also capture the enclosing function name.
//!
//! The logger methods only know the caller's file, line and column. The
//! macros expand at the call site, so they can fill `{functionName}` too.
//!
//! # Examples
//!
//! ```
//! use transport_logger::prelude::*;
//! use transport_logger::info;
//!
//! let logger = Logger::new("server");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // Several values, joined with spaces
//! let port = 8080;
//! info!(logger, "Server listening on port", port);
//!
//! // Formatted content
//! info!(logger, format_args!("User {} performed action: {}", 42, "login"));
//! ```

/// Log values at the given level.
///
/// # Examples
///
/// ```
/// use transport_logger::prelude::*;
/// use transport_logger::log;
///
/// let memory = MemoryTransport::with_config(
///     TransportConfig::new().with_log_format("{functionName}: {content}"),
/// );
/// let logger = Logger::new("app").with_transport(memory.clone());
///
/// fn handle(logger: &Logger) {
///     log!(logger, LoggerLevel::Error, "Error code:", 500);
/// }
/// handle(&logger);
///
/// assert_eq!(memory.raw_lines(), vec!["handle: Error code: 500"]);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.log_at(
            $level,
            &[$(&$value as &dyn $crate::Loggable),+],
            ::std::option::Option::Some($crate::__call_site!()),
        )
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use transport_logger::prelude::*;
/// # let logger = Logger::new("app");
/// # logger.set_minimum_level(LoggerLevel::Debug);
/// use transport_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value:", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LoggerLevel::Debug, $($value),+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LoggerLevel::Notice, $($value),+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use transport_logger::prelude::*;
/// # let logger = Logger::new("app");
/// use transport_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LoggerLevel::Info, $($value),+)
    };
}

/// Log a success-level message.
#[macro_export]
macro_rules! success {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LoggerLevel::Success, $($value),+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use transport_logger::prelude::*;
/// # let logger = Logger::new("app");
/// use transport_logger::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, format_args!("Retry attempt {} of {}", 3, 5));
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LoggerLevel::Warning, $($value),+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use transport_logger::prelude::*;
/// # let logger = Logger::new("app");
/// use transport_logger::{error, inspect};
///
/// #[derive(Debug)]
/// struct Request { id: u32 }
///
/// error!(logger, "Request failed:", inspect(&Request { id: 7 }));
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LoggerLevel::Error, $($value),+)
    };
}

//! # Transport Logger
//!
//! A small leveled logging library built around named loggers that fan each
//! call out to pluggable transports.
//!
//! ## Features
//!
//! - **Six levels**: debug, notice, info, success, warning and error, each
//!   with a fixed-width label and a terminal colour
//! - **Templates**: per-transport line layout with `{time}`, `{level}`,
//!   `{name}`, `{content}` and call-site tokens
//! - **Transports**: console, daily-rolling plain files with retention, and a
//!   non-blocking wrapper for any transport
//! - **Isolation**: a failing or panicking transport never breaks the caller
//!   or the other transports
//!
//! ## Quick start
//!
//! ```no_run
//! use transport_logger::prelude::*;
//!
//! let logger = Logger::new("app")
//!     .with_transport(ConsoleTransport::new())
//!     .with_transport(PlainFileTransport::new().with_log_path("logs").with_file_retention(7));
//!
//! logger.info(&[&"Some info message", &"with", &4, &"arguments"]);
//! logger.warning(&[&"disk usage at", &93.5, &"%"]);
//! ```

pub mod macros;

pub mod core;
pub mod transports;

pub mod prelude {
    pub use crate::core::{
        inspect, CallSite, CallSiteResolver, FailureHandler, LogRecord, Loggable, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerLevel, LoggerMetrics, NoCallSite, Result,
        TimestampFormat, TrackCallerResolver, Transport, TransportConfig, TransportFailure,
    };
    pub use crate::transports::{
        Clock, ConsoleTransport, FileTransportConfig, ManualClock, MemoryTransport,
        NonBlockingTransport, PlainFileTransport, DEFAULT_SHUTDOWN_TIMEOUT,
    };
}

pub use crate::core::{
    default_failure_handler, inspect, CallSite, CallSiteResolver, FailureHandler, Inspect,
    LogRecord, Loggable, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerLevel,
    LoggerMetrics, NoCallSite, Result, TimestampFormat, TrackCallerResolver, Transport,
    TransportConfig, TransportFailure,
};
pub use crate::transports::{
    Clock, ConsoleTransport, FileTransportConfig, ManualClock, MemoryTransport,
    NonBlockingTransport, PlainFileTransport, DEFAULT_SHUTDOWN_TIMEOUT,
};

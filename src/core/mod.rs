//! Core logger types and traits

pub mod call_site;
pub mod config;
pub mod error;
pub mod log_level;
pub mod log_record;
pub mod log_value;
pub mod logger;
pub mod metrics;
pub mod template;
pub mod timestamp;
pub mod transport;

pub use call_site::{CallSite, CallSiteResolver, NoCallSite, TrackCallerResolver};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_level::LoggerLevel;
pub use log_record::LogRecord;
pub use log_value::{inspect, Inspect, Loggable};
pub use logger::{default_failure_handler, FailureHandler, Logger, LoggerBuilder, TransportFailure};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
pub use transport::{Transport, TransportConfig};

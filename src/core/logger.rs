//! Main logger implementation

use super::{
    call_site::{CallSite, CallSiteResolver, TrackCallerResolver},
    error::{LoggerError, Result},
    log_level::LoggerLevel,
    log_record::LogRecord,
    log_value::{render_values, Loggable},
    metrics::LoggerMetrics,
    template::{self, LineParts},
    transport::{Transport, TransportConfig},
};
use chrono::{DateTime, Local};
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// A transport write that failed after the log call had nowhere to return it
#[derive(Debug)]
pub struct TransportFailure {
    /// Name of the logger the record came from
    pub logger: String,
    /// Name reported by the failing transport
    pub transport: String,
    /// Position of the transport in its logger, when known
    pub index: Option<usize>,
    pub error: LoggerError,
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(
                f,
                "Transport #{} ({}) of logger '{}' failed: {}",
                index, self.transport, self.logger, self.error
            ),
            None => write!(
                f,
                "Transport ({}) of logger '{}' failed: {}",
                self.transport, self.logger, self.error
            ),
        }
    }
}

/// Callback receiving transport failures that no caller can observe
pub type FailureHandler = Arc<dyn Fn(&TransportFailure) + Send + Sync>;

/// Failure handler printing to stderr, used unless one is configured
pub fn default_failure_handler() -> FailureHandler {
    Arc::new(|failure: &TransportFailure| {
        eprintln!("[LOGGER ERROR] {}", failure);
    })
}

pub(crate) fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// A named logger fanning records out to its transports
///
/// # Example
///
/// ```
/// use transport_logger::prelude::*;
///
/// let logger = Logger::new("api")
///     .with_transport(ConsoleTransport::new().with_minimum_level(LoggerLevel::Debug));
///
/// logger.info(&[&"listening on port", &8080]);
/// ```
pub struct Logger {
    name: String,
    transports: RwLock<Vec<Box<dyn Transport>>>,
    resolver: Box<dyn CallSiteResolver>,
    on_failure: FailureHandler,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transports: RwLock::new(Vec::new()),
            resolver: Box::new(TrackCallerResolver),
            on_failure: default_failure_handler(),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Same as [`Logger::new`]
    #[must_use]
    pub fn create_instance(name: impl Into<String>) -> Self {
        Self::new(name)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach a transport, consuming and returning the logger
    #[must_use]
    pub fn with_transport<T: Transport + 'static>(self, transport: T) -> Self {
        self.transports.write().push(Box::new(transport));
        self
    }

    /// Attach a transport after construction
    pub fn add_transport(&self, transport: Box<dyn Transport>) -> &Self {
        self.transports.write().push(transport);
        self
    }

    pub fn transport_count(&self) -> usize {
        self.transports.read().len()
    }

    /// Set the threshold of every attached transport
    pub fn set_minimum_level(&self, level: LoggerLevel) -> &Self {
        for transport in self.transports.write().iter_mut() {
            transport.set_minimum_level(level);
        }
        self
    }

    /// Edit the configuration of the transport at `index`
    ///
    /// Returns `false` if there is no such transport.
    pub fn configure_transport<F>(&self, index: usize, f: F) -> bool
    where
        F: FnOnce(&mut TransportConfig),
    {
        match self.transports.write().get_mut(index) {
            Some(transport) => {
                f(transport.config_mut());
                true
            }
            None => false,
        }
    }

    /// Snapshot of the configuration of the transport at `index`
    pub fn transport_config(&self, index: usize) -> Option<TransportConfig> {
        self.transports
            .read()
            .get(index)
            .map(|transport| transport.config().clone())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let mut transports = self.transports.write();
        for transport in transports.iter_mut() {
            transport.flush()?;
        }
        Ok(())
    }

    #[track_caller]
    pub fn debug(&self, values: &[&dyn Loggable]) {
        self.log_at(LoggerLevel::Debug, values, self.caller_site(Location::caller()));
    }

    #[track_caller]
    pub fn notice(&self, values: &[&dyn Loggable]) {
        self.log_at(LoggerLevel::Notice, values, self.caller_site(Location::caller()));
    }

    #[track_caller]
    pub fn info(&self, values: &[&dyn Loggable]) {
        self.log_at(LoggerLevel::Info, values, self.caller_site(Location::caller()));
    }

    #[track_caller]
    pub fn success(&self, values: &[&dyn Loggable]) {
        self.log_at(LoggerLevel::Success, values, self.caller_site(Location::caller()));
    }

    #[track_caller]
    pub fn warning(&self, values: &[&dyn Loggable]) {
        self.log_at(LoggerLevel::Warning, values, self.caller_site(Location::caller()));
    }

    #[track_caller]
    pub fn error(&self, values: &[&dyn Loggable]) {
        self.log_at(LoggerLevel::Error, values, self.caller_site(Location::caller()));
    }

    /// Log at `level`; transport failures go to the failure handler
    #[track_caller]
    pub fn log(&self, level: LoggerLevel, values: &[&dyn Loggable]) {
        self.log_at(level, values, self.caller_site(Location::caller()));
    }

    /// Log with an explicit call site (used by the logging macros)
    pub fn log_at(&self, level: LoggerLevel, values: &[&dyn Loggable], call_site: Option<CallSite>) {
        // Failures were already handed to `on_failure`.
        let _ = self.dispatch(level, values, call_site.as_ref(), false);
    }

    /// Log at `level`, returning the first transport error
    ///
    /// Transports after the failing one do not receive the record.
    #[track_caller]
    pub fn try_log(&self, level: LoggerLevel, values: &[&dyn Loggable]) -> Result<()> {
        let site = self.caller_site(Location::caller());
        self.dispatch(level, values, site.as_ref(), true)
    }

    fn caller_site(&self, caller: &'static Location<'static>) -> Option<CallSite> {
        self.resolver.resolve(caller)
    }

    fn dispatch(
        &self,
        level: LoggerLevel,
        values: &[&dyn Loggable],
        call_site: Option<&CallSite>,
        propagate: bool,
    ) -> Result<()> {
        self.metrics.record_dispatched();

        let content = render_values(values);
        let time = Local::now();

        let mut transports = self.transports.write();
        for (index, transport) in transports.iter_mut().enumerate() {
            if !level.meets(transport.minimum_level()) {
                self.metrics.record_suppressed();
                continue;
            }

            let record = self.build_record(&**transport, level, &content, &time, call_site);

            // One panicking transport must not take the others down with it.
            let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                transport.log(&record)
            }));
            let result = match outcome {
                Ok(result) => result,
                Err(panic) => Err(LoggerError::TransportPanicked {
                    transport: transport.name().to_string(),
                    message: panic_message(&*panic),
                }),
            };

            match result {
                Ok(()) => {
                    self.metrics.record_delivered();
                }
                Err(error) => {
                    self.metrics.record_failed_write();
                    if propagate {
                        return Err(error);
                    }
                    (self.on_failure)(&TransportFailure {
                        logger: self.name.clone(),
                        transport: transport.name().to_string(),
                        index: Some(index),
                        error,
                    });
                }
            }
        }

        Ok(())
    }

    fn build_record(
        &self,
        transport: &dyn Transport,
        level: LoggerLevel,
        content: &str,
        time: &DateTime<Local>,
        call_site: Option<&CallSite>,
    ) -> LogRecord {
        let rendered_time = transport.time(time);
        let line = template::render(
            &transport.config().log_format,
            &LineParts {
                time: &rendered_time,
                level,
                name: &self.name,
                content,
                call_site,
            },
        );
        LogRecord::new(self.name.clone(), level, *time, line.raw, line.formatted)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("transports", &self.transport_count())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use transport_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .name("worker")
///     .transport(ConsoleTransport::new())
///     .minimum_level(LoggerLevel::Debug)
///     .call_site_resolver(NoCallSite)
///     .on_failure(Arc::new(|failure: &TransportFailure| eprintln!("ALERT: {}", failure)))
///     .build();
///
/// assert_eq!(logger.name(), "worker");
/// ```
pub struct LoggerBuilder {
    name: String,
    transports: Vec<Box<dyn Transport>>,
    minimum_level: Option<LoggerLevel>,
    resolver: Box<dyn CallSiteResolver>,
    on_failure: Option<FailureHandler>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: String::new(),
            transports: Vec::new(),
            minimum_level: None,
            resolver: Box::new(TrackCallerResolver),
            on_failure: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transports.push(Box::new(transport));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transports.push(transport);
        self
    }

    /// Override the threshold of every transport given to this builder
    #[must_use = "builder methods return a new value"]
    pub fn minimum_level(mut self, level: LoggerLevel) -> Self {
        self.minimum_level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn call_site_resolver<R: CallSiteResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn on_failure(mut self, handler: FailureHandler) -> Self {
        self.on_failure = Some(handler);
        self
    }

    pub fn build(self) -> Logger {
        let mut transports = self.transports;
        if let Some(level) = self.minimum_level {
            for transport in transports.iter_mut() {
                transport.set_minimum_level(level);
            }
        }

        Logger {
            name: self.name,
            transports: RwLock::new(transports),
            resolver: self.resolver,
            on_failure: self.on_failure.unwrap_or_else(default_failure_handler),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

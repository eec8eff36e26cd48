//! Fire-and-forget wrapper around another transport
//!
//! The logger formats the record on the calling thread and hands it to a
//! worker thread that owns the wrapped transport. The log call returns as
//! soon as the record is queued; write failures on the worker are reported
//! through a [`FailureHandler`] because no caller is left to receive them.

use crate::core::logger::{default_failure_handler, panic_message};
use crate::core::{FailureHandler, LogRecord, LoggerError, Result, Transport, TransportConfig, TransportFailure};
use crossbeam_channel::{bounded, unbounded, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Default shutdown timeout for draining non-blocking transports (5 seconds)
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

enum Message {
    Record(LogRecord),
    Flush(Sender<()>),
}

/// Runs another transport on a background thread
///
/// The wrapper keeps its own [`TransportConfig`], seeded from the wrapped
/// transport; later changes to it are what the logger uses for filtering and
/// layout. The queue is unbounded, so logging never waits on the worker.
/// If the wrapped transport writes slower than records arrive, queued records
/// pile up in memory without limit until the worker catches up.
///
/// # Example
///
/// ```
/// use transport_logger::prelude::*;
///
/// let memory = MemoryTransport::with_config(TransportConfig::new().with_log_format("{content}"));
/// let logger = Logger::new("bg")
///     .with_transport(NonBlockingTransport::new(memory.clone()));
///
/// logger.info(&[&"queued"]);
/// logger.flush().unwrap();
/// assert_eq!(memory.raw_lines(), vec!["queued"]);
/// ```
pub struct NonBlockingTransport {
    config: TransportConfig,
    name: String,
    sender: Option<Sender<Message>>,
    worker: Option<JoinHandle<()>>,
}

impl NonBlockingTransport {
    pub fn new<T: Transport + 'static>(inner: T) -> Self {
        Self::with_failure_handler(inner, default_failure_handler())
    }

    pub fn with_failure_handler<T: Transport + 'static>(mut inner: T, on_failure: FailureHandler) -> Self {
        let config = inner.config().clone();
        let inner_name = inner.name().to_string();
        let name = format!("non-blocking {}", inner_name);
        let (sender, receiver) = unbounded::<Message>();

        let worker = thread::spawn(move || {
            let report = |logger: &str, error: LoggerError| {
                on_failure(&TransportFailure {
                    logger: logger.to_string(),
                    transport: inner_name.clone(),
                    index: None,
                    error,
                });
            };

            for message in receiver.iter() {
                match message {
                    Message::Record(record) => {
                        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                            inner.log(&record)
                        }));
                        match outcome {
                            Ok(Ok(())) => {}
                            Ok(Err(e)) => report(&record.name, e),
                            Err(panic) => report(
                                &record.name,
                                LoggerError::TransportPanicked {
                                    transport: inner_name.clone(),
                                    message: panic_message(&*panic),
                                },
                            ),
                        }
                    }
                    Message::Flush(ack) => {
                        if let Err(e) = inner.flush() {
                            report("", e);
                        }
                        let _ = ack.send(());
                    }
                }
            }

            // Channel closed: drain is complete
            if let Err(e) = inner.flush() {
                report("", e);
            }
        });

        Self {
            config,
            name,
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Stop accepting records and wait for the worker to drain the queue
    ///
    /// Returns `false` if the worker did not finish within `timeout` or
    /// panicked.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        drop(self.sender.take());

        let Some(handle) = self.worker.take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[LOGGER ERROR] Transport worker panicked during shutdown: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Transport worker did not finish within {:?}. \
                     Some logs may be lost.",
                    timeout
                );
                return false;
            }

            // Small sleep to avoid busy-waiting
            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Transport for NonBlockingTransport {
    fn log(&mut self, record: &LogRecord) -> Result<()> {
        let sender = self.sender.as_ref().ok_or(LoggerError::TransportClosed)?;
        sender
            .send(Message::Record(record.clone()))
            .map_err(|_| LoggerError::TransportClosed)
    }

    fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut TransportConfig {
        &mut self.config
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Wait until every record queued so far has been written
    fn flush(&mut self) -> Result<()> {
        let Some(sender) = self.sender.as_ref() else {
            return Ok(());
        };
        let (ack_tx, ack_rx) = bounded(1);
        sender
            .send(Message::Flush(ack_tx))
            .map_err(|_| LoggerError::TransportClosed)?;
        ack_rx
            .recv_timeout(DEFAULT_SHUTDOWN_TIMEOUT)
            .map_err(|_| LoggerError::other(format!("{} did not flush within {:?}", self.name, DEFAULT_SHUTDOWN_TIMEOUT)))
    }
}

impl Drop for NonBlockingTransport {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}

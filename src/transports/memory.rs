//! In-memory transport, mostly useful in tests

use crate::core::{LogRecord, Result, Transport, TransportConfig};
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps every accepted record. Clones share the same record list, so keep a
/// clone around to inspect what the logger wrote.
///
/// # Example
///
/// ```
/// use transport_logger::prelude::*;
///
/// let memory = MemoryTransport::with_config(TransportConfig::new().with_log_format("{content}"));
/// let logger = Logger::new("test").with_transport(memory.clone());
///
/// logger.info(&[&"hello", &42]);
/// assert_eq!(memory.raw_lines(), vec!["hello 42"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    config: TransportConfig,
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TransportConfig) -> Self {
        Self {
            config,
            records: Arc::default(),
        }
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn raw_lines(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.raw.clone()).collect()
    }

    pub fn formatted_lines(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.formatted.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Transport for MemoryTransport {
    fn log(&mut self, record: &LogRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut TransportConfig {
        &mut self.config
    }

    fn name(&self) -> &str {
        "memory"
    }
}

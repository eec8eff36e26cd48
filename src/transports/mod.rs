//! Transport implementations

pub mod clock;
pub mod console;
pub mod file;
pub mod memory;
pub mod non_blocking;

pub use crate::core::Transport;
pub use clock::{Clock, ManualClock};
pub use console::ConsoleTransport;
pub use file::{
    FileTransportConfig, PlainFileTransport, DEFAULT_LOG_PATH, ROLLOVER_AGE, UNLIMITED_RETENTION,
};
pub use memory::MemoryTransport;
pub use non_blocking::{NonBlockingTransport, DEFAULT_SHUTDOWN_TIMEOUT};

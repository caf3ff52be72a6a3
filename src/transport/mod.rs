//! Device link: one wire request in, one raw response line out.

pub mod serial;

use thiserror::Error;

pub use serial::SerialTransport;

/// Transport-level failures.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The device answered with an error payload instead of data. The
    /// payload is carried raw; the console maps it through the sentinel
    /// table.
    #[error("{0}")]
    Device(String),
    /// No complete response before the port timeout.
    #[error("no response from device")]
    Timeout,
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A request/response channel to the PMU.
///
/// Implementations must answer requests in the order issued; multi-read
/// commands assemble their value from consecutive responses.
pub trait Transport {
    fn transact(&mut self, request: &str) -> Result<String, TransportError>;
}

//! Serial transport over an FTDI-style USB adapter.

use std::io::{Read, Write};
use std::time::Duration;

use tracing::debug;

use super::{Transport, TransportError};

/// Serial link to the PMU. Requests go out CR-terminated; responses are
/// accumulated up to the first line terminator within the port timeout.
pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialTransport {
    /// Open `port_name` at `baud`; `timeout` bounds each response read.
    pub fn open(port_name: &str, baud: u32, timeout: Duration) -> Result<Self, TransportError> {
        let port = serialport::new(port_name, baud).timeout(timeout).open()?;
        Ok(Self { port })
    }
}

impl Transport for SerialTransport {
    fn transact(&mut self, request: &str) -> Result<String, TransportError> {
        self.port.write_all(request.as_bytes())?;
        self.port.write_all(b"\r")?;
        self.port.flush()?;

        let mut line = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            match self.port.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    if byte[0] == b'\r' || byte[0] == b'\n' {
                        if line.is_empty() {
                            // stray terminator left over from the previous
                            // exchange
                            continue;
                        }
                        break;
                    }
                    line.push(byte[0]);
                }
                Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                    if line.is_empty() {
                        return Err(TransportError::Timeout);
                    }
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let response = String::from_utf8_lossy(&line).trim().to_string();
        debug!(%request, %response, "serial exchange");

        if response.starts_with("ERROR:") {
            return Err(TransportError::Device(response));
        }
        Ok(response)
    }
}

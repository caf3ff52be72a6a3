//! Console state machine and command execution.
//!
//! [`Console`] owns the edited line, the scroll-back history and the
//! completion cycler; the binary feeds key events in and repaints from the
//! returned line contents. [`run_command`] is the execution pipeline: pure
//! apart from the transport handed to it.

use tracing::debug;

use super::{commands, parser, Completer, ConsoleError, History, LineBuffer};
use crate::protocol::errors;
use crate::transport::{Transport, TransportError};

/// Interactive console state.
pub struct Console {
    line: LineBuffer,
    history: History,
    completer: Completer,
    /// Prefix the completer is cycling on; survives the line being replaced
    /// by a completion.
    prefix: String,
}

impl Console {
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
            history: History::new(),
            completer: Completer::new(),
            prefix: String::new(),
        }
    }

    /// Current line content.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// Append a typed character.
    pub fn insert(&mut self, c: char) {
        self.line.push(c);
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.line.backspace();
    }

    /// Clear the line.
    pub fn clear_line(&mut self) {
        self.line.clear();
        self.completer.reset();
    }

    /// Cycle inline completion.
    ///
    /// A line still equal to the last completion advances the cycle;
    /// anything else starts a new cycle on the typed text. The completion
    /// replaces the line and is also returned for repainting.
    pub fn complete(&mut self) -> Option<&str> {
        if self.completer.current_len() == 0 || self.line.as_str() != self.completer.current() {
            self.prefix.clear();
            self.prefix.push_str(self.line.as_str());
        }
        match self.completer.advance(&self.prefix, commands::command_names()) {
            Some(completed) => {
                self.line.set(completed);
                Some(self.line.as_str())
            }
            None => None,
        }
    }

    /// History scroll toward the oldest entry; returns the new line.
    pub fn scroll_back(&mut self) -> &str {
        let text = self.history.scroll_back();
        self.line.set(text);
        self.line.as_str()
    }

    /// History scroll toward the newest entry; empty clears the line.
    pub fn scroll_forward(&mut self) -> &str {
        let text = self.history.scroll_forward();
        self.line.set(text);
        self.line.as_str()
    }

    /// Submit the edited line: normalize, record in history, clear the
    /// editor. `None` for blank input.
    pub fn take_line(&mut self) -> Option<String> {
        let cmd = parser::normalize(self.line.as_str());
        self.line.clear();
        self.completer.reset();
        if cmd.is_empty() {
            return None;
        }
        self.history.append(&cmd);
        Some(cmd)
    }
}

/// Execute one normalized command against the transport.
///
/// Registered names go through the codec: build the request(s), send each in
/// order, then decode the ordered responses (or join the raw ones).
/// Unregistered input is forwarded to the device verbatim. A
/// device-signalled failure is mapped through the sentinel error table;
/// payloads outside it pass through untouched.
pub fn run_command(cmd: &str, transport: &mut dyn Transport) -> Result<String, ConsoleError> {
    let (name, args) = parser::split_command(cmd);
    let Some(entry) = commands::lookup(name) else {
        debug!(request = %cmd, "raw passthrough");
        return match transport.transact(cmd) {
            Ok(response) => Ok(response),
            Err(TransportError::Device(payload)) => Ok(map_device_error(payload)),
            Err(e) => Err(e.into()),
        };
    };

    let requests = entry.request.build(&args)?;
    let mut responses = Vec::with_capacity(requests.len());
    for request in &requests {
        debug!(%request, "pmu transaction");
        match transport.transact(request) {
            Ok(response) => responses.push(response),
            Err(TransportError::Device(payload)) => return Ok(map_device_error(payload)),
            Err(e) => return Err(e.into()),
        }
    }

    match entry.decode {
        Some(decode) => Ok(decode(&responses)?),
        None => Ok(responses.join("\n")),
    }
}

fn map_device_error(payload: String) -> String {
    errors::lookup(&payload)
        .map(str::to_string)
        .unwrap_or(payload)
}

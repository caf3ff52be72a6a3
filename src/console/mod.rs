//! Interactive console for PMU commissioning.
//!
//! Pure state machines — no I/O happens in this module tree. The binary
//! feeds key events in and carries wire requests to the transport.

pub mod commands;
pub mod completion;
pub mod console;
pub mod error;
pub mod history;
pub mod line_buffer;
pub mod parser;

pub use commands::{command_names, lookup, CommandEntry, COMMANDS};
pub use completion::Completer;
pub use console::{run_command, Console};
pub use error::ConsoleError;
pub use history::History;
pub use line_buffer::LineBuffer;
pub use parser::{normalize, split_command};

//! # PMU Console
//!
//! Interactive commissioning and debugging console for lighting-fixture
//! Power Management Units (PMUs) over a serial/USB link.
//!
//! ## Architecture
//!
//! The core is pure and does no I/O. Components are isolated:
//! - [`console::commands`] — immutable registry mapping command names to
//!   wire requests and response decoders
//! - [`protocol`] — register wire grammar, packed-field decoders, sentinel
//!   error map
//! - [`console`] — session state (line buffer, history, completion cycler)
//!   and the command execution pipeline
//! - [`transport`] — the only place bytes move; everything above it talks
//!   through the [`Transport`] trait
//!
//! The binary (`pmucon`) wires key events and a serial port around this.

pub mod console;
pub mod protocol;
pub mod transport;

pub use console::{run_command, Console, ConsoleError};
pub use protocol::{CodecError, Request};
pub use transport::{SerialTransport, Transport, TransportError};

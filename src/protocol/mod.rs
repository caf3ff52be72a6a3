//! PMU register protocol: wire-request grammar and builders.
//!
//! The PMU speaks a fixed-width, ASCII, line-oriented protocol:
//!
//! - `G` + 4 hex digits — read a register
//! - `S` + 4 hex digits + space + value — write a register; the value token
//!   travels verbatim, the device does its own parsing
//! - `R` + bar index + 2 hex digits — read a lightbar sub-register; some
//!   logical values span two consecutive sub-registers
//! - `!` + letter (+ optional digit) — immediate action (reset, reboot,
//!   reload)
//!
//! Builders are pure string templates. Decoding of packed reply fields lives
//! in [`decode`]; the sentinel error table in [`errors`].

pub mod decode;
pub mod errors;

use thiserror::Error;

/// Caller contract violations at the codec boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A value-taking command was invoked without its argument.
    #[error("missing value argument")]
    MissingArgument,
    /// A decoder was handed the wrong number of responses.
    #[error("expected {expected} response(s), got {got}")]
    ResponseArity { expected: usize, got: usize },
    /// A decoder was handed a field that does not parse as hexadecimal.
    #[error("malformed response field: {0:?}")]
    MalformedResponse(String),
}

/// Response decoder: ordered raw responses in, display text out.
pub type Decoder = fn(&[String]) -> Result<String, CodecError>;

/// Wire request families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// `G<addr>` — read a PMU register.
    Get(u16),
    /// `S<addr> <value>` — write a PMU register.
    Set(u16),
    /// `R<bar><offset>`, one read per listed sub-register offset. The bar
    /// index is the caller's first argument, substituted verbatim.
    LightbarRead(&'static [u8]),
    /// A complete immediate-action string, e.g. `!R`.
    Action(&'static str),
}

impl Request {
    /// Number of wire requests issued; responses arrive with the same arity.
    pub fn arity(&self) -> usize {
        match self {
            Request::LightbarRead(offsets) => offsets.len(),
            _ => 1,
        }
    }

    /// Whether this request consumes an argument.
    pub fn takes_argument(&self) -> bool {
        matches!(self, Request::Set(_) | Request::LightbarRead(_))
    }

    /// Build the wire request string(s) for `args`.
    pub fn build(&self, args: &[&str]) -> Result<Vec<String>, CodecError> {
        match self {
            Request::Get(addr) => Ok(vec![format!("G{:04X}", addr)]),
            Request::Set(addr) => {
                let value = args.first().ok_or(CodecError::MissingArgument)?;
                Ok(vec![format!("S{:04X} {}", addr, value)])
            }
            Request::LightbarRead(offsets) => {
                let bar = args.first().ok_or(CodecError::MissingArgument)?;
                Ok(offsets
                    .iter()
                    .map(|offset| format!("R{}{:02X}", bar, offset))
                    .collect())
            }
            Request::Action(wire) => Ok(vec![(*wire).to_string()]),
        }
    }
}

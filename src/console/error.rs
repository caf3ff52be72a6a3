//! Console error type.

use thiserror::Error;

use crate::protocol::CodecError;
use crate::transport::TransportError;

/// Failures surfaced to the operator by the console loop.
///
/// Device-signalled error payloads are not in here: those are display text,
/// mapped through the sentinel table.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

//! Sentinel error responses.
//!
//! On a protocol-level fault the device answers with a reserved high-value
//! code instead of data. The table maps each code to its diagnostic; codes
//! outside it are shown to the operator untouched.

/// Error payload → diagnostic, exact match.
pub static ERROR_RESPONSES: &[(&str, &str)] = &[
    ("ERROR: FFFF", "ERROR: Invalid opcode"),
    ("ERROR: FFFE", "ERROR: Syntax error"),
    ("ERROR: FFFD", "ERROR: Invalid register"),
    ("ERROR: FFFC", "ERROR: Register is read only"),
    ("ERROR: FFFB", "ERROR: Invalid register length"),
    ("ERROR: FFFA", "ERROR: ARP not addressed"),
    ("ERROR: FFF9", "ERROR: Flash error"),
    ("ERROR: FFF8", "ERROR: Storage out of bounds"),
    ("ERROR: FFF7", "ERROR: Storage unaligned"),
    ("ERROR: FFF6", "ERROR: Message queue full"),
    ("ERROR: FFF5", "ERROR: I2C error"),
    ("ERROR: FFF4", "ERROR: Internal error"),
    ("ERROR: FFF3", "ERROR: Insufficient free buffers"),
    ("ERROR: FFF2", "ERROR: Bad image"),
    ("ERROR: FFF1", "ERROR: Remote install fail"),
    ("ERROR: FFF0", "ERROR: Bus error"),
    ("ERROR: FFEF", "ERROR: Bus busy"),
    ("ERROR: FFEE", "ERROR: Resource busy"),
];

/// Look up the diagnostic for a raw error payload.
pub fn lookup(code: &str) -> Option<&'static str> {
    ERROR_RESPONSES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, message)| *message)
}

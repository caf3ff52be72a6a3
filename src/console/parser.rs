//! Line normalization and command/argument splitting.

use super::commands;

/// Collapse whitespace runs to single spaces and strip both ends.
pub fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a normalized line into a registered command name and its
/// arguments.
///
/// Command names span more than one token ("get zone", "reset usage"), so
/// the longest token prefix naming a registered command wins and the rest
/// are arguments. A line matching nothing comes back whole, to be forwarded
/// verbatim.
pub fn split_command(line: &str) -> (&str, Vec<&str>) {
    let mut end = line.len();
    loop {
        let head = &line[..end];
        if commands::lookup(head).is_some() {
            return (head, line[end..].split_whitespace().collect());
        }
        match head.rfind(' ') {
            Some(i) => end = i,
            None => break,
        }
    }
    (line, Vec::new())
}

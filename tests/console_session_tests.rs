//! Console session tests: the execution pipeline against a scripted
//! transport, and the line/history/completion state machine.

use std::collections::VecDeque;

use pmu_console::console::{run_command, Console};
use pmu_console::transport::{Transport, TransportError};

/// Scripted transport: records every request, answers from a queue.
struct MockTransport {
    sent: Vec<String>,
    replies: VecDeque<Result<String, TransportError>>,
}

impl MockTransport {
    fn new() -> Self {
        Self {
            sent: Vec::new(),
            replies: VecDeque::new(),
        }
    }

    fn reply(mut self, response: &str) -> Self {
        self.replies.push_back(Ok(response.to_string()));
        self
    }

    fn reply_device_error(mut self, payload: &str) -> Self {
        self.replies
            .push_back(Err(TransportError::Device(payload.to_string())));
        self
    }
}

impl Transport for MockTransport {
    fn transact(&mut self, request: &str) -> Result<String, TransportError> {
        self.sent.push(request.to_string());
        self.replies
            .pop_front()
            .unwrap_or(Err(TransportError::Timeout))
    }
}

// --- execution pipeline ---

#[test]
fn test_get_without_decoder_passes_raw_response_through() {
    let mut transport = MockTransport::new().reply("00000080");

    let display = run_command("get lightManualLevel", &mut transport).unwrap();
    assert_eq!(transport.sent, vec!["G0005"]);
    assert_eq!(display, "00000080");
}

#[test]
fn test_get_with_decoder_renders_decoded_text() {
    let mut transport = MockTransport::new().reply("010203040506");

    let display = run_command("get firmwareVersion", &mut transport).unwrap();
    assert_eq!(transport.sent, vec!["G0000"]);
    assert_eq!(display, "1.2.3 (4/5/6)");
}

#[test]
fn test_set_sends_value_and_echoes_reply() {
    let mut transport = MockTransport::new().reply("OK");

    let display = run_command("set lightManualLevel 128", &mut transport).unwrap();
    assert_eq!(transport.sent, vec!["S0005 128"]);
    assert_eq!(display, "OK");
}

#[test]
fn test_two_read_command_decodes_in_request_order() {
    let mut transport = MockTransport::new().reply("0102").reply("0300");

    let display = run_command("get lbFirmwareVersion 3", &mut transport).unwrap();
    assert_eq!(transport.sent, vec!["R303", "R304"]);
    assert_eq!(display, "1.2.3");
}

#[test]
fn test_two_read_command_without_decoder_joins_lines() {
    let mut transport = MockTransport::new().reply("00AB").reply("00CD");

    let display = run_command("get lbFirmwareCode 1", &mut transport).unwrap();
    assert_eq!(transport.sent, vec!["R101", "R102"]);
    assert_eq!(display, "00AB\n00CD");
}

#[test]
fn test_unknown_command_forwarded_verbatim() {
    let mut transport = MockTransport::new().reply("1234");

    let display = run_command("G00FF", &mut transport).unwrap();
    assert_eq!(transport.sent, vec!["G00FF"]);
    assert_eq!(display, "1234");
}

#[test]
fn test_device_error_mapped_through_sentinel_table() {
    let mut transport = MockTransport::new().reply_device_error("ERROR: FFFD");

    let display = run_command("get zone", &mut transport).unwrap();
    assert_eq!(display, "ERROR: Invalid register");
}

#[test]
fn test_unknown_device_error_passes_through() {
    let mut transport = MockTransport::new().reply_device_error("ERROR: 1234");

    let display = run_command("get zone", &mut transport).unwrap();
    assert_eq!(display, "ERROR: 1234");
}

#[test]
fn test_device_error_stops_multi_read() {
    let mut transport = MockTransport::new().reply_device_error("ERROR: FFEE");

    let display = run_command("get lbFirmwareVersion 0", &mut transport).unwrap();
    assert_eq!(display, "ERROR: Resource busy");
    // the second sub-register read is never issued
    assert_eq!(transport.sent, vec!["R003"]);
}

#[test]
fn test_set_without_value_is_an_error() {
    let mut transport = MockTransport::new();

    let result = run_command("set zone", &mut transport);
    assert!(result.is_err());
    // nothing reaches the device
    assert!(transport.sent.is_empty());
}

#[test]
fn test_transport_timeout_propagates() {
    let mut transport = MockTransport::new();

    let result = run_command("get zone", &mut transport);
    assert!(result.is_err());
}

#[test]
fn test_reboot_action_sends_bang_command() {
    let mut transport = MockTransport::new().reply("");

    run_command("reboot pmu", &mut transport).unwrap();
    assert_eq!(transport.sent, vec!["!R"]);
}

// --- console state machine ---

#[test]
fn test_take_line_normalizes_and_records_history() {
    let mut console = Console::new();

    for c in "  get   zone ".chars() {
        console.insert(c);
    }
    assert_eq!(console.take_line(), Some("get zone".to_string()));
    assert_eq!(console.line(), "");

    // the recorded entry scrolls back normalized
    assert_eq!(console.scroll_back(), "get zone");
}

#[test]
fn test_take_line_ignores_blank_input() {
    let mut console = Console::new();

    console.insert(' ');
    assert_eq!(console.take_line(), None);
    assert_eq!(console.scroll_back(), "");
}

#[test]
fn test_tab_cycles_without_retyping() {
    let mut console = Console::new();

    for c in "get lb".chars() {
        console.insert(c);
    }
    assert_eq!(console.complete(), Some("get lbProtocolVersion"));

    // the line now holds the completion; the cycle continues on the
    // original prefix
    assert_eq!(console.complete(), Some("get lbFirmwareCode"));
    assert_eq!(console.complete(), Some("get lbFirmwareVersion"));
    assert_eq!(console.complete(), Some("get lbProtocolVersion"));
}

#[test]
fn test_tab_restarts_after_editing() {
    let mut console = Console::new();

    for c in "get lb".chars() {
        console.insert(c);
    }
    console.complete();

    // editing the line starts a fresh cycle on the new text
    console.backspace();
    let completed = console.complete().map(str::to_string);
    assert_eq!(completed, Some("get lbProtocolVersion".to_string()));
}

#[test]
fn test_tab_with_no_match_leaves_line_alone() {
    let mut console = Console::new();

    for c in "xyz".chars() {
        console.insert(c);
    }
    assert_eq!(console.complete(), None);
    assert_eq!(console.line(), "xyz");
}

#[test]
fn test_history_keys_replace_line() {
    let mut console = Console::new();

    for c in "get zone".chars() {
        console.insert(c);
    }
    console.take_line();
    for c in "reboot pmu".chars() {
        console.insert(c);
    }
    console.take_line();

    assert_eq!(console.scroll_back(), "reboot pmu");
    assert_eq!(console.scroll_back(), "get zone");
    assert_eq!(console.scroll_forward(), "reboot pmu");

    // past the newest entry the line goes blank
    assert_eq!(console.scroll_forward(), "");
    assert_eq!(console.line(), "");
}

#[test]
fn test_clear_line() {
    let mut console = Console::new();

    for c in "get zo".chars() {
        console.insert(c);
    }
    console.clear_line();
    assert_eq!(console.line(), "");
}

//! pmucon — interactive PMU commissioning console.
//!
//! Raw-mode line editor on top of the pure console core: Tab cycles
//! completion, Up/Down scroll history, Shift+Left clears the line, Ctrl+C
//! exits. Submitted commands run against the serial transport and the
//! command plus its (decoded) response are echoed below the prompt.

use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::info;

use pmu_console::console::{run_command, Console};
use pmu_console::transport::{SerialTransport, Transport};

const PROMPT: &str = "pmu> ";

#[derive(Parser)]
#[command(
    name = "pmucon",
    version,
    about = "Interactive commissioning console for lighting-fixture PMUs"
)]
struct Args {
    /// Serial port of the PMU adapter; omit to list available ports
    #[arg(short, long)]
    port: Option<String>,

    /// Baud rate
    #[arg(short, long, default_value_t = 115_200)]
    baud: u32,

    /// Response timeout in milliseconds
    #[arg(long, default_value_t = 1000)]
    timeout_ms: u64,

    /// Prefix echoed commands with a timestamp
    #[arg(short = 't', long)]
    timestamp: bool,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let Some(port_name) = args.port else {
        return list_ports();
    };

    let timeout = Duration::from_millis(args.timeout_ms);
    let mut transport = match SerialTransport::open(&port_name, args.baud, timeout) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("failed to open {}: {}", port_name, e);
            std::process::exit(1);
        }
    };

    info!(port = %port_name, baud = args.baud, "connected");
    println!("PMU console on {} at {} baud. Ctrl+C exits.", port_name, args.baud);

    let mut console = Console::new();
    terminal::enable_raw_mode()?;
    let result = session_loop(&mut console, &mut transport, args.timestamp);
    terminal::disable_raw_mode()?;
    result
}

fn list_ports() -> io::Result<()> {
    let ports = serialport::available_ports().unwrap_or_default();
    if ports.is_empty() {
        println!("No serial ports found.");
        return Ok(());
    }
    println!("Available serial ports:");
    for port in ports {
        println!("  {}", port.port_name);
    }
    Ok(())
}

fn session_loop(
    console: &mut Console,
    transport: &mut dyn Transport,
    timestamp: bool,
) -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                write!(out, "\r\n")?;
                return Ok(());
            }
            KeyCode::Enter => {
                write!(out, "\r\n")?;
                if let Some(cmd) = console.take_line() {
                    echo_command(&mut out, &cmd, timestamp)?;
                    let display = match run_command(&cmd, transport) {
                        Ok(response) => response,
                        Err(e) => e.to_string(),
                    };
                    for line in display.lines() {
                        write!(out, "{}\r\n", line)?;
                    }
                }
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }
            KeyCode::Tab => {
                if console.complete().is_some() {
                    redraw(&mut out, console.line())?;
                }
            }
            KeyCode::Up => {
                let line = console.scroll_back().to_string();
                redraw(&mut out, &line)?;
            }
            KeyCode::Down => {
                let line = console.scroll_forward().to_string();
                redraw(&mut out, &line)?;
            }
            KeyCode::Left if key.modifiers.contains(KeyModifiers::SHIFT) => {
                console.clear_line();
                redraw(&mut out, "")?;
            }
            KeyCode::Backspace => {
                console.backspace();
                redraw(&mut out, console.line())?;
            }
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                console.insert(c);
                write!(out, "{}", c)?;
                out.flush()?;
            }
            _ => {}
        }
    }
}

fn echo_command(out: &mut impl Write, cmd: &str, timestamp: bool) -> io::Result<()> {
    if timestamp {
        let now = chrono::Local::now();
        write!(out, "{} > {}\r\n", now.format("%Y-%m-%d %H:%M:%S"), cmd)
    } else {
        write!(out, " > {}\r\n", cmd)
    }
}

/// Clear the row and repaint prompt plus line.
fn redraw(out: &mut impl Write, line: &str) -> io::Result<()> {
    write!(out, "\r\x1b[K{}{}", PROMPT, line)?;
    out.flush()
}

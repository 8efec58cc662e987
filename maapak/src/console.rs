//! Line-oriented console front end
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `capture`, `c` | Capture the live tilt |
//! | `distance <n>`, `d <n>` | Select standoff distance (1..=10 m) |
//! | `aim <deg>` | Point the simulated device (mock sensor only) |
//! | `status`, `s` | Print the current state |
//! | `quit`, `q` | End the session |
//!
//! End of input ends the session like `quit`.

use crate::error::{Error, Result};
use crate::events::{DisplaySink, SessionEvent};
use crate::sensors::AimHandle;
use crate::session::DisplaySnapshot;
use crate::types::StandoffDistance;
use crossbeam_channel::Sender;
use std::io::{BufRead, Write};
use std::thread::{self, JoinHandle};

/// Parsed console command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleCommand {
    Capture,
    Distance(StandoffDistance),
    Aim(f64),
    Status,
    Quit,
}

impl ConsoleCommand {
    /// Parse one input line; blank lines yield `Ok(None)`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(Error::InvalidCommand(format!("too many arguments: {}", line.trim())));
        }

        let command = match (verb.to_ascii_lowercase().as_str(), arg) {
            ("capture" | "c", None) => ConsoleCommand::Capture,
            ("status" | "s", None) => ConsoleCommand::Status,
            ("quit" | "q" | "exit", None) => ConsoleCommand::Quit,
            ("distance" | "d", Some(value)) => {
                let meters: i64 = value.parse().map_err(|_| {
                    Error::InvalidCommand(format!("distance must be a whole number: {}", value))
                })?;
                ConsoleCommand::Distance(StandoffDistance::new(meters)?)
            }
            ("aim", Some(value)) => {
                let degrees: f64 = value
                    .parse()
                    .ok()
                    .filter(|d: &f64| d.is_finite())
                    .ok_or_else(|| {
                        Error::InvalidCommand(format!("aim must be an angle in degrees: {}", value))
                    })?;
                ConsoleCommand::Aim(degrees)
            }
            _ => return Err(Error::InvalidCommand(line.trim().to_string())),
        };
        Ok(Some(command))
    }
}

/// Read commands from `input` on a background thread
///
/// `aim` is applied directly to the simulated device; everything else is
/// forwarded to the session. Sends [`SessionEvent::Shutdown`] on `quit` or
/// end of input.
pub fn spawn_reader<R>(
    input: R,
    events: Sender<SessionEvent>,
    aim: Option<AimHandle>,
) -> Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("console-reader".to_string())
        .spawn(move || {
            for line in input.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::error!("Console read error: {}", e);
                        break;
                    }
                };

                let event = match ConsoleCommand::parse(&line) {
                    Ok(None) => continue,
                    Ok(Some(ConsoleCommand::Aim(degrees))) => {
                        match &aim {
                            Some(handle) => {
                                handle.set(degrees);
                                log::debug!("Simulated device aimed at {:.1}°", degrees);
                            }
                            None => log::warn!("aim is only available with the mock sensor"),
                        }
                        continue;
                    }
                    Ok(Some(ConsoleCommand::Capture)) => SessionEvent::Capture,
                    Ok(Some(ConsoleCommand::Distance(d))) => SessionEvent::SelectDistance(d),
                    Ok(Some(ConsoleCommand::Status)) => SessionEvent::Refresh,
                    Ok(Some(ConsoleCommand::Quit)) => break,
                    Err(e) => {
                        log::warn!("{}", e);
                        continue;
                    }
                };

                if events.send(event).is_err() {
                    return;
                }
            }
            let _ = events.send(SessionEvent::Shutdown);
        })
        .map_err(|e| Error::Other(format!("Failed to spawn console reader: {}", e)))
}

/// Writes each display update as one line
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for ConsoleSink<W> {
    fn render(&mut self, snapshot: &DisplaySnapshot) {
        if let Err(e) = writeln!(self.out, "{}", snapshot) {
            log::error!("Display write failed: {}", e);
        }
    }
}

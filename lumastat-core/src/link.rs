//! Host link line protocol
//!
//! When the display runs on its own MCU, the LED controller pushes its live
//! state over a serial line, one update per line:
//!
//! ```text
//! ap <identity>                   running own access point
//! sta <a.b.c.d> <identity>        joined a network as a station
//! host <name>                     name announced on the network
//! out <brightness> <mode> <palette>
//! rt <mode> <a.b.c.d>             real-time source (raw mode byte) and sender
//! ma <milliamps>                  estimated current draw
//! ```
//!
//! Lines end in `\n`; a trailing `\r` and blank lines are ignored.
//! Identities longer than 32 bytes are clipped.

use core::net::Ipv4Addr;
use core::str::FromStr;

use heapless::{String, Vec};

use crate::live::{RealtimeMode, MAX_IDENTITY_LEN};
use crate::snapshot::bounded;

/// Longest accepted line, excluding the terminator
pub const MAX_LINE_LEN: usize = 64;

/// Host link errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// First word is not a known command
    UnknownCommand,
    /// A required field is absent
    MissingField,
    /// A field does not parse, or there are extra fields
    InvalidValue,
    /// Line exceeded [`MAX_LINE_LEN`]; it was discarded
    LineTooLong,
    /// Line is not valid UTF-8
    InvalidUtf8,
}

/// One decoded state update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostUpdate {
    /// Controller runs its own access point
    AccessPoint(String<MAX_IDENTITY_LEN>),
    /// Controller joined a network
    Station {
        identity: String<MAX_IDENTITY_LEN>,
        address: Ipv4Addr,
    },
    /// Announced host name
    HostName(String<MAX_IDENTITY_LEN>),
    /// Master brightness and main segment
    Output { brightness: u8, mode: u8, palette: u8 },
    /// Real-time input source
    Realtime { mode: RealtimeMode, sender: Ipv4Addr },
    /// Estimated current draw
    Milliamps(u16),
}

/// Decode a single line (without terminator)
pub fn parse_line(line: &str) -> Result<HostUpdate, LinkError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "ap" => Ok(HostUpdate::AccessPoint(identity(rest)?)),
        "sta" => {
            let (address, name) = rest.split_once(' ').ok_or(LinkError::MissingField)?;
            Ok(HostUpdate::Station {
                address: field(Some(address))?,
                identity: identity(name.trim())?,
            })
        }
        "host" => Ok(HostUpdate::HostName(identity(rest)?)),
        "out" => {
            let mut fields = rest.split_whitespace();
            let update = HostUpdate::Output {
                brightness: field(fields.next())?,
                mode: field(fields.next())?,
                palette: field(fields.next())?,
            };
            no_more(fields)?;
            Ok(update)
        }
        "rt" => {
            let mut fields = rest.split_whitespace();
            let update = HostUpdate::Realtime {
                mode: RealtimeMode::from_raw(field(fields.next())?),
                sender: field(fields.next())?,
            };
            no_more(fields)?;
            Ok(update)
        }
        "ma" => {
            let mut fields = rest.split_whitespace();
            let update = HostUpdate::Milliamps(field(fields.next())?);
            no_more(fields)?;
            Ok(update)
        }
        _ => Err(LinkError::UnknownCommand),
    }
}

fn field<T: FromStr>(value: Option<&str>) -> Result<T, LinkError> {
    value
        .ok_or(LinkError::MissingField)?
        .parse()
        .map_err(|_| LinkError::InvalidValue)
}

fn no_more<'a>(mut fields: impl Iterator<Item = &'a str>) -> Result<(), LinkError> {
    match fields.next() {
        Some(_) => Err(LinkError::InvalidValue),
        None => Ok(()),
    }
}

fn identity(text: &str) -> Result<String<MAX_IDENTITY_LEN>, LinkError> {
    if text.is_empty() {
        return Err(LinkError::MissingField);
    }
    let mut out = String::new();
    // Cannot fail: bounded() never exceeds the capacity
    let _ = out.push_str(bounded(text));
    Ok(out)
}

/// Byte-at-a-time line assembler for the host link
#[derive(Debug, Clone, Default)]
pub struct LineReader {
    buffer: Vec<u8, MAX_LINE_LEN>,
    overflowed: bool,
}

impl LineReader {
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            overflowed: false,
        }
    }

    /// Feed one received byte
    ///
    /// Returns `Ok(Some(update))` when a line completes, `Ok(None)` while a
    /// line is still being assembled, and an error for a completed line
    /// that was rejected. The reader is ready for the next line either way.
    pub fn feed(&mut self, byte: u8) -> Result<Option<HostUpdate>, LinkError> {
        match byte {
            b'\r' => Ok(None),
            b'\n' => {
                let result = if self.overflowed {
                    Err(LinkError::LineTooLong)
                } else {
                    match core::str::from_utf8(&self.buffer) {
                        Ok(line) if line.trim().is_empty() => Ok(None),
                        Ok(line) => parse_line(line).map(Some),
                        Err(_) => Err(LinkError::InvalidUtf8),
                    }
                };
                self.buffer.clear();
                self.overflowed = false;
                result
            }
            _ => {
                if !self.overflowed && self.buffer.push(byte).is_err() {
                    self.overflowed = true;
                }
                Ok(None)
            }
        }
    }
}

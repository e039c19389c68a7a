//! Transport abstraction: any byte-oriented sink the cloud listens on.
//!
//! Concrete implementations live in [`crate::adapters::sink`]:
//! - stdout (piped into a serial bridge)
//! - a serial device node or plain file
//! - a TCP socket
//!
//! The service is generic over `Transport`, so adding a new sink requires
//! zero changes to the decision logic.

use core::convert::Infallible;
use core::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::protocol::Command;

/// Byte-oriented output channel.
pub trait Transport {
    /// Error type for this transport.
    type Error: fmt::Debug + fmt::Display;

    /// Write `data` to the transport.
    /// Returns the number of bytes actually written.
    fn write(&mut self, data: &[u8]) -> core::result::Result<usize, Self::Error>;

    /// Flush any buffered output.
    fn flush(&mut self) -> core::result::Result<(), Self::Error>;
}

/// Write one command word: high byte, then low byte, then flush.
///
/// A short write is a transport failure; the device must never see half a
/// command followed by the next cycle's bytes.
pub fn send_command<T: Transport>(transport: &mut T, command: Command) -> Result<()> {
    let bytes = command.to_bytes();
    debug!("send_command: {command} -> {bytes:02x?}");

    let written = transport
        .write(&bytes)
        .map_err(|e| Error::Transport(format!("write failed: {e}")))?;
    if written != bytes.len() {
        return Err(Error::Transport(format!(
            "short write: {written} of {} bytes",
            bytes.len()
        )));
    }
    transport
        .flush()
        .map_err(|e| Error::Transport(format!("flush failed: {e}")))
}

/// A null transport that discards all writes.
/// Useful for dry runs against the live feed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTransport;

impl Transport for NullTransport {
    type Error = Infallible;

    fn write(&mut self, data: &[u8]) -> core::result::Result<usize, Infallible> {
        Ok(data.len())
    }

    fn flush(&mut self) -> core::result::Result<(), Infallible> {
        Ok(())
    }
}

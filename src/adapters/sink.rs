//! Byte sink adapters.
//!
//! Implements [`Transport`] over the sinks the cloud can listen on and
//! [`TransportFactory`] for [`SinkSpec`], so the runner opens the chosen
//! sink once per cycle.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::net::TcpStream;

use log::debug;

use crate::app::ports::TransportFactory;
use crate::config::SinkSpec;
use crate::error::{Error, Result};
use crate::transport::Transport;

/// An open byte sink.
pub enum SinkTransport {
    Stdout(io::Stdout),
    /// Serial device node or file, opened for writing.
    Device(File),
    Tcp(TcpStream),
    Null,
}

impl SinkTransport {
    pub fn open(spec: &SinkSpec) -> Result<Self> {
        let transport = match spec {
            SinkSpec::Stdout => Self::Stdout(io::stdout()),
            SinkSpec::Null => Self::Null,
            SinkSpec::Device(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        Error::Transport(format!("open {}: {e}", path.display()))
                    })?;
                Self::Device(file)
            }
            SinkSpec::Tcp(addr) => {
                let stream = TcpStream::connect(addr.as_str())
                    .map_err(|e| Error::Transport(format!("connect {addr}: {e}")))?;
                stream
                    .set_nodelay(true)
                    .map_err(|e| Error::Transport(format!("nodelay {addr}: {e}")))?;
                Self::Tcp(stream)
            }
        };
        debug!("sink opened: {spec}");
        Ok(transport)
    }

    fn writer(&mut self) -> Option<&mut dyn Write> {
        match self {
            Self::Stdout(out) => Some(out),
            Self::Device(file) => Some(file),
            Self::Tcp(stream) => Some(stream),
            Self::Null => None,
        }
    }
}

impl Transport for SinkTransport {
    type Error = io::Error;

    /// Writes the whole buffer or fails; partial progress is retried
    /// internally by `write_all`.
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if let Some(w) = self.writer() {
            w.write_all(data)?;
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer() {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}

impl TransportFactory for SinkSpec {
    type Transport = SinkTransport;

    fn open(&mut self) -> Result<SinkTransport> {
        SinkTransport::open(self)
    }
}

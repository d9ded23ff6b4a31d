//! # Printer Transport Layer
//!
//! Byte sinks for printer command streams.
//!
//! A transport is ordered and write-only: the driver never reads back.
//! The [`Printer`](crate::printer::Printer) holds its transport as an
//! `Option`, and a printer constructed without one turns every write into
//! a silent no-op — the explicit "disconnected" branch rather than a
//! scattered null check.
//!
//! ## Available Transports
//!
//! - [`serial`]: raw-TTY serial device (Linux)
//! - [`MemoryTransport`]: in-memory capture, for tests and for callers
//!   that want the raw byte stream

use std::io;

pub mod serial;

pub use serial::SerialTransport;

/// An ordered, write-only byte sink.
///
/// Implementations either accept bytes or fail with an `io::Error`; the
/// printer swallows failures, so a transport must not rely on the caller
/// reacting to them.
pub trait Transport {
    fn send(&mut self, data: &[u8]) -> io::Result<()>;
}

/// A transport that captures everything written to it.
///
/// ## Example
///
/// ```
/// use boleta::transport::{MemoryTransport, Transport};
///
/// let mut sink = MemoryTransport::new();
/// sink.send(&[0x1B, 0x40]).unwrap();
/// assert_eq!(sink.bytes(), &[0x1B, 0x40]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryTransport {
    buffer: Vec<u8>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, in order.
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the transport, returning the captured stream.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Discard the captured stream.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Transport for MemoryTransport {
    fn send(&mut self, data: &[u8]) -> io::Result<()> {
        self.buffer.extend_from_slice(data);
        Ok(())
    }
}

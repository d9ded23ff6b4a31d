//! # Boleta - Thermal Receipt Printer Driver
//!
//! Boleta drives ESC/POS-style thermal printers over a serial line and
//! formats application content — short messages, node announcements,
//! label/value pairs, raster images, QR codes — into the printer's
//! command byte stream.
//!
//! ## Quick Start
//!
//! ```no_run
//! use boleta::{
//!     printer::{Printer, PrinterSettings},
//!     receipt,
//!     transport::SerialTransport,
//! };
//!
//! let transport = SerialTransport::open("/dev/ttyUSB0")?;
//! let mut printer = Printer::new(transport);
//! let settings = PrinterSettings::default();
//!
//! printer.init();
//! receipt::print_message(&mut printer, &settings, "hola ☺".as_bytes(), "node-42", 1700000000);
//! # Ok::<(), boleta::error::BoletaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders and Latin-1 transcoding |
//! | [`printer`] | Stateful driver and settings snapshot |
//! | [`receipt`] | Complete print jobs |
//! | [`wrap`] | Width-aware line wrapping |
//! | [`raster`] | Packed rasters and 180° rotation |
//! | [`transport`] | Serial and in-memory byte sinks |
//! | [`error`] | Setup-boundary error types |
//!
//! ## Design Posture
//!
//! Past the setup boundary nothing returns an error: a missing transport
//! is a silent no-op, malformed text degrades to placeholders, oversize
//! parameters clamp. Receipts come out degraded before they don't come
//! out at all.

pub mod error;
pub mod printer;
pub mod protocol;
pub mod raster;
pub mod receipt;
pub mod transport;
pub mod wrap;

// Re-exports for convenience
pub use error::BoletaError;
pub use printer::{Printer, PrinterSettings};
pub use raster::RasterImage;
pub use transport::{MemoryTransport, SerialTransport};

//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for ESC/POS-style thermal printers. Every
//! builder is a pure function returning the exact wire bytes; the stateful
//! [`Printer`](crate::printer::Printer) threads them to the transport.
//!
//! ## Module Structure
//!
//! - [`commands`]: control bytes, init, paper motion, status queries
//! - [`text`]: style mask and text styling
//! - [`graphics`]: bit image and raster transmission
//! - [`barcode`]: 1D barcodes and the QR command family
//! - [`nv_graphics`]: non-volatile bitmap store/recall
//! - [`glyphs`]: user-defined characters
//! - [`latin1`]: UTF-8 to Latin-1 transcoding
//!
//! ## Framing
//!
//! Three frame shapes, all of which must be byte-exact or the device
//! desynchronizes and misreads every following command:
//!
//! - fixed-size immediates (2-4 bytes);
//! - count- or terminator-framed variable blocks (tab stops, barcodes,
//!   NV store, glyph definitions);
//! - `GS ( k` extended frames with a little-endian 2-byte length, where
//!   the QR data store nests a second independent length field.

pub mod barcode;
pub mod commands;
pub mod glyphs;
pub mod graphics;
pub mod latin1;
pub mod nv_graphics;
pub mod text;

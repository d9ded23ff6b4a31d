//! # NV Bitmap Commands
//!
//! Non-volatile bitmap storage. NV bitmaps live in the printer's flash,
//! persist across power cycles, and are recalled by slot index — the usual
//! home for a startup logo.
//!
//! Flash writes are slow and rated for a limited number of cycles; store
//! once at provisioning time, recall freely.

use super::commands::FS;

/// # Store NV Bitmaps (FS q n d1...dk)
///
/// Writes `n` bitmaps into flash in one transaction, replacing all
/// previously stored bitmaps. Each bitmap payload carries its own
/// dimension header as the device expects it; the driver passes the block
/// through verbatim.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1C 71 n d1...dk |
pub fn store(n: u8, data: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(3 + data.len());
    cmd.extend_from_slice(&[FS, b'q', n]);
    cmd.extend_from_slice(data);
    cmd
}

/// # Print NV Bitmap (FS p n m)
///
/// Recalls bitmap `n` (1-based slot) in mode `m` (0 normal, 1 double
/// width, 2 double height, 3 quadruple).
#[inline]
pub fn recall(n: u8, m: u8) -> Vec<u8> {
    vec![FS, b'p', n, m]
}

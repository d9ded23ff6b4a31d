//! # User-Defined Character Commands
//!
//! RAM-resident replacement glyphs for the code range 0x20-0x7E. Unlike
//! NV bitmaps these are lost on power-down and must be re-defined after
//! every reset.

use super::commands::ESC;

/// # Enable/Disable User-Defined Characters (ESC % n)
///
/// While enabled, defined code positions render the custom glyph instead
/// of the ROM font; undefined positions fall back to ROM.
#[inline]
pub fn set_enabled(enabled: bool) -> Vec<u8> {
    vec![ESC, b'%', enabled as u8]
}

/// # Define User-Defined Characters (ESC & y c1 c2 d1...dk)
///
/// Defines glyphs for the consecutive code range `c1..=c2`, `y` bytes
/// tall per column. The data block holds each character's column count
/// and column data back to back, exactly as the device consumes it.
pub fn define(y: u8, c1: u8, c2: u8, data: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(5 + data.len());
    cmd.extend_from_slice(&[ESC, b'&', y, c1, c2]);
    cmd.extend_from_slice(data);
    cmd
}

/// # Delete User-Defined Character (ESC ? n)
///
/// Reverts code position `n` to the ROM glyph.
#[inline]
pub fn delete(n: u8) -> Vec<u8> {
    vec![ESC, b'?', n]
}

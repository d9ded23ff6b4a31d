//! # Line Wrapping
//!
//! Splits transcoded text into physical lines sized to the active font
//! and width configuration. Wrapping operates on Latin-1 bytes (one byte
//! per column), after transcoding.
//!
//! Normal-orientation jobs don't need this at all — the printer wraps
//! by itself. It matters for upside-down printing, where the host must
//! know the physical lines in order to emit them in reverse.

use crate::printer::settings::{PrinterSettings, Size};

/// Text columns available per line under the given settings.
///
/// Font A fits 32 columns, font B 42. Large size and the double-width
/// decoration both double the glyph width, halving the budget.
pub fn line_budget(settings: &PrinterSettings) -> usize {
    let columns = settings.font.columns();
    if settings.size == Size::Large || settings.decorations.double_width {
        columns / 2
    } else {
        columns
    }
}

/// Wrap text to `max` columns.
///
/// Logical lines are split on `\n` first; a trailing `\r` is stripped
/// from each and empty lines survive as empty entries. A logical line
/// over budget breaks at the last space at or before the boundary (the
/// space is consumed), or hard-breaks mid-word at the boundary when no
/// usable space exists.
///
/// ## Example
///
/// ```
/// use boleta::wrap::wrap;
///
/// let lines = wrap(b"hello world foo", 11);
/// assert_eq!(lines, vec![b"hello world".to_vec(), b"foo".to_vec()]);
/// ```
pub fn wrap(text: &[u8], max: usize) -> Vec<Vec<u8>> {
    let max = max.max(1);
    let mut lines = Vec::new();
    for logical in text.split(|&b| b == b'\n') {
        let mut rest = match logical.last() {
            Some(b'\r') => &logical[..logical.len() - 1],
            _ => logical,
        };
        while rest.len() > max {
            // Index max itself counts: a space just past the last
            // fitting column still separates the segments.
            let boundary = &rest[..=max];
            match boundary.iter().rposition(|&b| b == b' ') {
                Some(at) if at > 0 => {
                    lines.push(rest[..at].to_vec());
                    rest = &rest[at + 1..];
                }
                _ => {
                    lines.push(rest[..max].to_vec());
                    rest = &rest[max..];
                }
            }
        }
        lines.push(rest.to_vec());
    }
    lines
}

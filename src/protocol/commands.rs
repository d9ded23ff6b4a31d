//! # ESC/POS Control Commands
//!
//! This module implements the control-byte constants and fixed-format
//! commands for ESC/POS-style thermal printers (the cheap serial TTL
//! modules: CSN-A2, QR204, GOOJPRT and friends).
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `HT`, `LF`, `SO`, `DC4`
//! - Two bytes: `ESC @`, `ESC 2`, `DC2 T`
//! - Multi-byte with parameters: `ESC d n`, `ESC D n1...nk NUL`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// CONTROL BYTE CONSTANTS
// ============================================================================

/// HT (Horizontal Tab) - advance to next tab position
pub const HT: u8 = 0x09;

/// LF (Line Feed) - print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// SO (Shift Out) - legacy double-width-on byte
pub const SO: u8 = 0x0E;

/// DC2 (Device Control 2) - prefix for density/test-page commands
pub const DC2: u8 = 0x12;

/// DC4 (Device Control 4) - legacy double-width-off byte
pub const DC4: u8 = 0x14;

/// ESC (Escape) - primary command prefix
pub const ESC: u8 = 0x1B;

/// FS (File Separator) - prefix for kanji and NV bitmap commands
pub const FS: u8 = 0x1C;

/// GS (Group Separator) - prefix for barcode/raster/extended commands
pub const GS: u8 = 0x1D;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the print buffer and all formatting to power-on defaults.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// Does not clear user-defined characters or NV bitmaps.
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Heater Configuration (ESC 7 n1 n2 n3)
///
/// Tunes the thermal head: `dots` selects how many head elements fire at
/// once, `time` is the heating time (x10us), `interval` the cool-down
/// between groups (x10us). Higher time prints darker but slower.
#[inline]
pub fn heat_config(dots: u8, time: u8, interval: u8) -> Vec<u8> {
    vec![ESC, b'7', dots, time, interval]
}

/// # Print Density (DC2 # n)
///
/// Packs density (upper 3 bits) and break time (lower 5 bits) into one
/// byte: `n = (density << 5) | break_time`.
#[inline]
pub fn print_density(density: u8, break_time: u8) -> Vec<u8> {
    vec![DC2, b'#', (density << 5) | break_time]
}

// ============================================================================
// PAPER MOTION
// ============================================================================

/// # Feed Lines (ESC d n)
///
/// Prints the line buffer and feeds `n` text lines.
#[inline]
pub fn feed(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Feed Dot Rows (ESC J n)
///
/// Prints the line buffer and feeds `n` dot rows (finer than [`feed`]).
#[inline]
pub fn feed_rows(n: u8) -> Vec<u8> {
    vec![ESC, b'J', n]
}

/// Advance to the next horizontal tab position.
#[inline]
pub fn tab() -> Vec<u8> {
    vec![HT]
}

/// # Set Tab Stops (ESC D n1...nk NUL)
///
/// Replaces the tab stop table with the given column positions. The NUL
/// terminator ends the list; an empty list clears all stops.
pub fn tab_stops(stops: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(3 + stops.len());
    cmd.push(ESC);
    cmd.push(b'D');
    cmd.extend_from_slice(stops);
    cmd.push(0x00);
    cmd
}

/// # Absolute Print Position (ESC $ nL nH)
///
/// Moves the print position to `pos` dots from the left margin.
#[inline]
pub fn absolute_position(pos: u16) -> Vec<u8> {
    let [lo, hi] = u16_le(pos);
    vec![ESC, b'$', lo, hi]
}

/// # Left Margin (GS L nL nH)
#[inline]
pub fn left_margin(margin: u16) -> Vec<u8> {
    let [lo, hi] = u16_le(margin);
    vec![GS, b'L', lo, hi]
}

/// # Default Line Spacing (ESC 2)
#[inline]
pub fn default_line_spacing() -> Vec<u8> {
    vec![ESC, b'2']
}

/// # Line Height (ESC 3 n)
///
/// Sets line spacing to `n` dot rows. The power-on default is 30.
#[inline]
pub fn line_height(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

// ============================================================================
// DEVICE CONTROL
// ============================================================================

/// # Panel Buttons (ESC c 5 n)
///
/// Enables (1) or disables (0) the paper-feed button on the front panel.
#[inline]
pub fn panel_buttons(enabled: bool) -> Vec<u8> {
    vec![ESC, b'c', b'5', enabled as u8]
}

/// # Self-Test Page (DC2 T)
#[inline]
pub fn test_page() -> Vec<u8> {
    vec![DC2, b'T']
}

/// # Sleep Timeout (ESC 8 nL nH)
///
/// Seconds of idle time before the controller sleeps. 0 disables sleep.
#[inline]
pub fn sleep_timeout(seconds: u16) -> Vec<u8> {
    let [lo, hi] = u16_le(seconds);
    vec![ESC, b'8', lo, hi]
}

// ============================================================================
// STATUS QUERIES
// ============================================================================

/// # Basic Status Query (ESC v n)
///
/// Requests a one-byte paper status report. The reply arrives on the
/// serial RX line, which this driver never reads; hosts that care wire up
/// their own reader.
#[inline]
pub fn status_query(n: u8) -> Vec<u8> {
    vec![ESC, b'v', n]
}

/// # Transmit Sensor State (GS r n)
#[inline]
pub fn sensor_request(n: u8) -> Vec<u8> {
    vec![GS, b'r', n]
}

/// # Auto Status Back (GS a n)
///
/// Selects which status changes the printer reports unsolicited.
#[inline]
pub fn auto_status_back(n: u8) -> Vec<u8> {
    vec![GS, b'a', n]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high].
///
/// ## Example
///
/// ```
/// use boleta::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(384), [0x80, 0x01]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================

//! # ESC/POS Barcode Commands
//!
//! 1D barcode configuration/emission and the 2D QR command family.
//!
//! ## 1D Barcodes
//!
//! Configure height/module width/HRI first, then emit with `GS k`:
//!
//! ```
//! use boleta::protocol::barcode::{self, Symbology};
//!
//! let mut data = Vec::new();
//! data.extend(barcode::height(80));
//! data.extend(barcode::module_width(2));
//! data.extend(barcode::emit(Symbology::Code39, b"HELLO123", true));
//! ```
//!
//! ## QR Codes
//!
//! The QR family rides on the `GS ( k` extended frame: a 2-byte
//! little-endian length, then the function selector, then the function
//! payload. The data-store function nests a *second* little-endian length
//! inside its payload; both lengths must independently equal the byte
//! count that follows them or the device desynchronizes.
//!
//! ```
//! use boleta::protocol::barcode::qr;
//!
//! let mut data = Vec::new();
//! data.extend(qr::select_model(2));
//! data.extend(qr::module_size(4));
//! data.extend(qr::error_correction(48));
//! data.extend(qr::store_data(b"https://example.com"));
//! data.extend(qr::print());
//! ```

use super::commands::{GS, u16_le};

// ============================================================================
// 1D BARCODE CONFIGURATION
// ============================================================================

/// # Barcode Height (GS h n)
///
/// Height in dots of subsequent 1D barcodes.
#[inline]
pub fn height(n: u8) -> Vec<u8> {
    vec![GS, b'h', n]
}

/// # Barcode Module Width (GS w n)
///
/// Width in dots of the narrowest bar.
#[inline]
pub fn module_width(n: u8) -> Vec<u8> {
    vec![GS, b'w', n]
}

/// # HRI Position (GS H n)
///
/// Where the human-readable text prints: 0 none, 1 above, 2 below, 3 both.
#[inline]
pub fn hri_position(n: u8) -> Vec<u8> {
    vec![GS, b'H', n]
}

/// # Barcode Left Margin (GS x n)
#[inline]
pub fn barcode_left_margin(n: u8) -> Vec<u8> {
    vec![GS, b'x', n]
}

// ============================================================================
// 1D BARCODE EMISSION
// ============================================================================

/// 1D symbology codes for `GS k m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Symbology {
    /// UPC-A (12 digits)
    UpcA = 0,
    /// UPC-E (compressed UPC-A)
    UpcE = 1,
    /// EAN-13 / JAN-13
    Ean13 = 2,
    /// EAN-8 / JAN-8
    Ean8 = 3,
    /// Code39 (A-Z, 0-9, space, `-.$/%+`)
    Code39 = 4,
    /// Interleaved 2 of 5 (numeric pairs)
    Itf = 5,
    /// Codabar / NW-7
    Codabar = 6,
}

/// # Print 1D Barcode (GS k m d1...dk NUL)
///
/// Emits the barcode immediately. For the classic symbology set the data
/// is NUL-terminated; pass `terminate = false` for firmwares that take a
/// bare payload.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1D 6B m d1...dk [00] |
pub fn emit(symbology: Symbology, data: &[u8], terminate: bool) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(4 + data.len());
    cmd.extend_from_slice(&[GS, b'k', symbology as u8]);
    cmd.extend_from_slice(data);
    if terminate {
        cmd.push(0x00);
    }
    cmd
}

// ============================================================================
// QR COMMAND FAMILY (GS ( k)
// ============================================================================

/// QR command builders.
///
/// All parameters stay raw `u8` pass-throughs: deployed firmwares accept
/// values outside the documented enums (error correction 48-51 as ASCII
/// digits, model numbers both raw and ASCII) and the driver must be able
/// to reproduce whichever dialect the device speaks.
pub mod qr {
    use super::{GS, u16_le};

    /// Build a `GS ( k` frame: `GS ( k pL pH cn fn payload`, where the
    /// little-endian `p` counts `cn`, `fn` and the payload.
    pub fn frame(cn: u8, function: u8, payload: &[u8]) -> Vec<u8> {
        let [p_lo, p_hi] = u16_le(payload.len() as u16 + 2);
        let mut cmd = Vec::with_capacity(7 + payload.len());
        cmd.extend_from_slice(&[GS, b'(', b'k', p_lo, p_hi, cn, function]);
        cmd.extend_from_slice(payload);
        cmd
    }

    /// # Select QR Model (function 0x65)
    #[inline]
    pub fn select_model(model: u8) -> Vec<u8> {
        frame(0x31, 0x65, &[0x31, model, 0x00])
    }

    /// # Module Size (function 0x67)
    ///
    /// Dot width of one QR module.
    #[inline]
    pub fn module_size(n: u8) -> Vec<u8> {
        frame(0x31, 0x67, &[0x31, n])
    }

    /// # Error Correction Level (function 0x69)
    #[inline]
    pub fn error_correction(n: u8) -> Vec<u8> {
        frame(0x31, 0x69, &[0x31, n])
    }

    /// # Store QR Data (function 0x80)
    ///
    /// The payload carries its own nested header `0x31 lenL lenH` ahead
    /// of the data, so the frame ends up with two independent length
    /// fields: the outer `p` covering everything after `pH`, and the
    /// inner one covering just the stored data.
    pub fn store_data(data: &[u8]) -> Vec<u8> {
        let [len_lo, len_hi] = u16_le(data.len() as u16);
        let mut payload = Vec::with_capacity(3 + data.len());
        payload.extend_from_slice(&[0x31, len_lo, len_hi]);
        payload.extend_from_slice(data);
        frame(0x31, 0x80, &payload)
    }

    /// # Print Stored QR (function 0x81)
    #[inline]
    pub fn print() -> Vec<u8> {
        frame(0x31, 0x81, &[0x30])
    }

    /// # Select Data Type (function 0x82)
    #[inline]
    pub fn data_type(n: u8) -> Vec<u8> {
        frame(0x31, 0x82, &[0x31, n])
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! # Stateful Printer Driver
//!
//! [`Printer`] is the stateful face of the protocol: it owns the
//! transport and the combined style mask, clamps parameters, and streams
//! command bytes. One `Printer` per physical device, constructed once and
//! passed to whoever prints.
//!
//! Every operation is a bounded sequence of synchronous writes and
//! returns `()`. There is no failure channel by design: a missing
//! transport makes every write a no-op, and transport errors are
//! swallowed (logged at debug level). A print job must never abort the
//! host.
//!
//! The driver assumes a single logical thread of control and does no
//! internal locking; hosts that print from multiple contexts serialize
//! access themselves.

use crate::protocol::barcode::{self, Symbology, qr};
use crate::protocol::commands::{self, DC4, LF, SO};
use crate::protocol::text::{
    self, Alignment, STYLE_DOUBLE_HEIGHT, STYLE_DOUBLE_WIDTH, STYLE_FONT_B,
};
use crate::protocol::{glyphs, graphics, nv_graphics};
use crate::transport::Transport;

pub mod settings;

pub use settings::{Decorations, Font, PrinterSettings, Size};

/// Default heater configuration (ESC 7): dot groups, heat time, interval.
pub const DEFAULT_HEAT: (u8, u8, u8) = (11, 120, 40);

/// Default line spacing in dot rows.
pub const DEFAULT_LINE_HEIGHT: u8 = 30;

/// # Thermal Printer Driver
///
/// ## Example
///
/// ```
/// use boleta::printer::Printer;
/// use boleta::transport::MemoryTransport;
///
/// let mut printer = Printer::new(MemoryTransport::new());
/// printer.init();
/// printer.write_line(b"hello");
/// printer.feed(2);
///
/// let stream = printer.into_sink().unwrap().into_bytes();
/// assert!(!stream.is_empty());
/// ```
pub struct Printer<T: Transport> {
    sink: Option<T>,
    style: u8,
}

impl<T: Transport> Printer<T> {
    /// Construct a driver bound to a transport.
    pub fn new(sink: T) -> Self {
        Self {
            sink: Some(sink),
            style: 0,
        }
    }

    /// Construct a driver with no transport: every operation becomes a
    /// silent no-op. Useful when the device is absent or unplugged.
    pub fn disconnected() -> Self {
        Self {
            sink: None,
            style: 0,
        }
    }

    /// Whether a transport is attached.
    pub fn is_connected(&self) -> bool {
        self.sink.is_some()
    }

    /// The current combined style mask.
    pub fn style_mask(&self) -> u8 {
        self.style
    }

    /// Take the transport back out of the driver.
    pub fn into_sink(self) -> Option<T> {
        self.sink
    }

    /// Write raw bytes to the sink. Without a sink this is a no-op;
    /// transport errors are swallowed.
    fn write(&mut self, bytes: &[u8]) {
        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.send(bytes) {
                log::debug!("transport write of {} bytes failed: {}", bytes.len(), e);
            }
        }
    }

    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Full power-up sequence: [`reset`](Self::reset) plus the default
    /// heater configuration.
    pub fn init(&mut self) {
        self.reset();
        let (dots, time, interval) = DEFAULT_HEAT;
        self.heat_config(dots, time, interval);
    }

    /// Reset the device and the driver's style state to a known baseline.
    pub fn reset(&mut self) {
        self.write(&commands::init());
        self.style = 0;
        self.update_style();
        self.set_inverse(false);
        self.set_upside_down(false);
        self.set_underline(0);
        self.set_double_strike(false);
        self.set_line_height(DEFAULT_LINE_HEIGHT);
    }

    /// Restore every adjustable mode to its default without resetting
    /// the device.
    pub fn restore_defaults(&mut self) {
        self.justify(Alignment::Left);
        self.set_inverse(false);
        self.set_upside_down(false);
        self.set_bold(false);
        self.set_underline(0);
        self.set_double_strike(false);
        self.double_width_off();
        self.set_line_height(DEFAULT_LINE_HEIGHT);
        self.set_font(Font::A);
        self.set_charset(0);
        self.set_code_page(0);
    }

    /// Tune the thermal head (dot groups, heat time, cool-down interval).
    pub fn heat_config(&mut self, dots: u8, time: u8, interval: u8) {
        self.write(&commands::heat_config(dots, time, interval));
    }

    /// Set print density and break time.
    pub fn print_density(&mut self, density: u8, break_time: u8) {
        self.write(&commands::print_density(density, break_time));
    }

    // ========================================================================
    // TEXT OUTPUT
    // ========================================================================

    /// Write text bytes, dropping carriage returns. The payload is
    /// expected to already be in the printer's single-byte alphabet (see
    /// [`latin1::transcode`](crate::protocol::latin1::transcode)).
    pub fn write_text(&mut self, data: &[u8]) {
        if data.contains(&b'\r') {
            let filtered: Vec<u8> = data.iter().copied().filter(|&b| b != b'\r').collect();
            self.write(&filtered);
        } else {
            self.write(data);
        }
    }

    /// Write text followed by a line feed.
    pub fn write_line(&mut self, data: &[u8]) {
        self.write_text(data);
        self.write(&[LF]);
    }

    // ========================================================================
    // PAPER MOTION AND LAYOUT
    // ========================================================================

    /// Feed `n` text lines.
    pub fn feed(&mut self, n: u8) {
        self.write(&commands::feed(n));
    }

    /// Feed `n` dot rows.
    pub fn feed_rows(&mut self, n: u8) {
        self.write(&commands::feed_rows(n));
    }

    /// Advance to the next tab stop.
    pub fn tab(&mut self) {
        self.write(&commands::tab());
    }

    /// Replace the tab stop table.
    pub fn set_tab_stops(&mut self, stops: &[u8]) {
        self.write(&commands::tab_stops(stops));
    }

    /// Move the print position to `pos` dots from the left margin.
    pub fn set_absolute_position(&mut self, pos: u16) {
        self.write(&commands::absolute_position(pos));
    }

    /// Set the left margin in dots.
    pub fn set_left_margin(&mut self, margin: u16) {
        self.write(&commands::left_margin(margin));
    }

    /// Restore the default line spacing.
    pub fn set_default_line_spacing(&mut self) {
        self.write(&commands::default_line_spacing());
    }

    /// Set line spacing in dot rows.
    pub fn set_line_height(&mut self, n: u8) {
        self.write(&commands::line_height(n));
    }

    /// Set text alignment.
    pub fn justify(&mut self, alignment: Alignment) {
        self.write(&text::justify(alignment));
    }

    // ========================================================================
    // STYLE
    // ========================================================================

    /// Replace the combined style mask outright and re-emit it.
    pub fn set_style(&mut self, mask: u8) {
        self.style = mask;
        self.update_style();
    }

    /// Select the character font. Recomputes and re-emits the full style
    /// byte.
    pub fn set_font(&mut self, font: Font) {
        self.style &= !STYLE_FONT_B;
        self.style |= font.style_bits();
        self.update_style();
    }

    /// Select the character size. Recomputes and re-emits the full style
    /// byte.
    pub fn set_size(&mut self, size: Size) {
        self.style &= !(STYLE_DOUBLE_HEIGHT | STYLE_DOUBLE_WIDTH);
        self.style |= size.style_bits();
        self.update_style();
    }

    /// Set width/height multipliers (each clamped to 1-8).
    pub fn set_scale(&mut self, width_mul: u8, height_mul: u8) {
        self.write(&text::scale(width_mul, height_mul));
    }

    pub fn set_bold(&mut self, enabled: bool) {
        self.write(&text::bold(enabled));
    }

    pub fn set_double_strike(&mut self, enabled: bool) {
        self.write(&text::double_strike(enabled));
    }

    /// Set underline weight in dots (clamped to 0-2; 0 disables).
    pub fn set_underline(&mut self, weight: u8) {
        self.write(&text::underline(weight));
    }

    pub fn set_char_spacing(&mut self, n: u8) {
        self.write(&text::char_spacing(n));
    }

    pub fn set_upside_down(&mut self, enabled: bool) {
        self.write(&text::upside_down(enabled));
    }

    pub fn rotate_90(&mut self, n: u8) {
        self.write(&text::rotate_90(n));
    }

    pub fn set_inverse(&mut self, enabled: bool) {
        self.write(&text::inverse(enabled));
    }

    /// Double width via the style mask, plus the legacy SO byte some
    /// firmwares still require.
    pub fn double_width_on(&mut self) {
        self.style |= STYLE_DOUBLE_WIDTH;
        self.update_style();
        self.write(&[SO]);
    }

    /// Counterpart of [`double_width_on`](Self::double_width_on); emits
    /// the legacy DC4 byte.
    pub fn double_width_off(&mut self) {
        self.style &= !STYLE_DOUBLE_WIDTH;
        self.update_style();
        self.write(&[DC4]);
    }

    /// Select the international charset (clamped to 0-15).
    pub fn set_charset(&mut self, n: u8) {
        self.write(&text::charset(n));
    }

    /// Select the code page for bytes 0x80-0xFF (clamped to 0-47).
    pub fn set_code_page(&mut self, n: u8) {
        self.write(&text::code_page(n));
    }

    pub fn set_kanji(&mut self, enabled: bool) {
        self.write(&if enabled {
            text::kanji_on()
        } else {
            text::kanji_off()
        });
    }

    pub fn set_kanji_font_mode(&mut self, n: u8) {
        self.write(&text::kanji_font_mode(n));
    }

    /// Re-emit the current combined style byte.
    fn update_style(&mut self) {
        let cmd = text::style(self.style);
        self.write(&cmd);
    }

    // ========================================================================
    // DEVICE CONTROL AND STATUS
    // ========================================================================

    pub fn set_panel_buttons(&mut self, enabled: bool) {
        self.write(&commands::panel_buttons(enabled));
    }

    pub fn print_test_page(&mut self) {
        self.write(&commands::test_page());
    }

    pub fn set_sleep_timeout(&mut self, seconds: u16) {
        self.write(&commands::sleep_timeout(seconds));
    }

    pub fn query_status(&mut self, n: u8) {
        self.write(&commands::status_query(n));
    }

    pub fn request_sensor_state(&mut self, n: u8) {
        self.write(&commands::sensor_request(n));
    }

    pub fn set_auto_status_back(&mut self, n: u8) {
        self.write(&commands::auto_status_back(n));
    }

    // ========================================================================
    // BARCODES
    // ========================================================================

    pub fn set_barcode_height(&mut self, n: u8) {
        self.write(&barcode::height(n));
    }

    pub fn set_barcode_module_width(&mut self, n: u8) {
        self.write(&barcode::module_width(n));
    }

    pub fn set_barcode_hri(&mut self, n: u8) {
        self.write(&barcode::hri_position(n));
    }

    pub fn set_barcode_left_margin(&mut self, n: u8) {
        self.write(&barcode::barcode_left_margin(n));
    }

    /// Emit a 1D barcode.
    pub fn print_barcode(&mut self, symbology: Symbology, data: &[u8], terminate: bool) {
        self.write(&barcode::emit(symbology, data, terminate));
    }

    // ========================================================================
    // QR SEQUENCE
    // ========================================================================

    pub fn qr_select_model(&mut self, model: u8) {
        self.write(&qr::select_model(model));
    }

    pub fn qr_module_size(&mut self, n: u8) {
        self.write(&qr::module_size(n));
    }

    pub fn qr_error_correction(&mut self, n: u8) {
        self.write(&qr::error_correction(n));
    }

    pub fn qr_store_data(&mut self, data: &[u8]) {
        self.write(&qr::store_data(data));
    }

    pub fn qr_print(&mut self) {
        self.write(&qr::print());
    }

    pub fn qr_data_type(&mut self, n: u8) {
        self.write(&qr::data_type(n));
    }

    // ========================================================================
    // GRAPHICS
    // ========================================================================

    /// Print one band of column-format image data.
    pub fn print_bit_image(&mut self, m: u8, n_dots: u16, data: &[u8]) {
        self.write(&graphics::bit_image(m, n_dots, data));
    }

    /// Store a downloaded bit image in printer RAM.
    pub fn define_downloaded_image(&mut self, x: u8, y: u8, data: &[u8]) {
        self.write(&graphics::define_downloaded(x, y, data));
    }

    /// Print the stored downloaded bit image.
    pub fn print_downloaded_image(&mut self, m: u8) {
        self.write(&graphics::print_downloaded(m));
    }

    /// Stream a raster image (`width_bytes` byte-columns, `height` rows).
    pub fn print_raster(&mut self, m: u8, width_bytes: u16, height: u16, data: &[u8]) {
        self.write(&graphics::raster(m, width_bytes, height, data));
    }

    // ========================================================================
    // NV BITMAPS AND USER GLYPHS
    // ========================================================================

    pub fn store_nv_bitmaps(&mut self, n: u8, data: &[u8]) {
        self.write(&nv_graphics::store(n, data));
    }

    pub fn print_nv_bitmap(&mut self, n: u8, m: u8) {
        self.write(&nv_graphics::recall(n, m));
    }

    pub fn set_user_glyphs_enabled(&mut self, enabled: bool) {
        self.write(&glyphs::set_enabled(enabled));
    }

    pub fn define_user_glyphs(&mut self, y: u8, c1: u8, c2: u8, data: &[u8]) {
        self.write(&glyphs::define(y, c1, c2, data));
    }

    pub fn delete_user_glyph(&mut self, n: u8) {
        self.write(&glyphs::delete(n));
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;

    fn captured(printer: Printer<MemoryTransport>) -> Vec<u8> {
        printer.into_sink().unwrap().into_bytes()
    }

    #[test]
    fn test_disconnected_printer_is_a_silent_noop() {
        let mut p = Printer::<MemoryTransport>::disconnected();
        assert!(!p.is_connected());
        p.init();
        p.write_line(b"into the void");
        p.set_scale(200, 0);
        p.qr_store_data(b"data");
        p.feed(2);
        // Style state still tracks even without a sink
        p.set_font(Font::B);
        assert_eq!(p.style_mask(), 0x01);
        assert!(p.into_sink().is_none());
    }

    #[test]
    fn test_style_mask_is_or_of_active_flags() {
        let mut p = Printer::new(MemoryTransport::new());
        p.set_font(Font::B);
        assert_eq!(p.style_mask(), STYLE_FONT_B);
        p.set_size(Size::Large);
        assert_eq!(
            p.style_mask(),
            STYLE_FONT_B | STYLE_DOUBLE_HEIGHT | STYLE_DOUBLE_WIDTH
        );
        p.set_size(Size::Small);
        assert_eq!(p.style_mask(), STYLE_FONT_B);
        p.set_font(Font::A);
        assert_eq!(p.style_mask(), 0);
    }

    #[test]
    fn test_font_change_reemits_full_style_byte() {
        let mut p = Printer::new(MemoryTransport::new());
        p.set_size(Size::Medium);
        p.set_font(Font::B);
        assert_eq!(
            captured(p),
            vec![0x1B, 0x21, 0x10, 0x1B, 0x21, 0x11]
        );
    }

    #[test]
    fn test_repeated_toggle_is_idempotent_on_the_wire() {
        let mut p = Printer::new(MemoryTransport::new());
        p.set_font(Font::B);
        p.set_font(Font::B);
        assert_eq!(captured(p), vec![0x1B, 0x21, 0x01, 0x1B, 0x21, 0x01]);
    }

    #[test]
    fn test_double_width_emits_style_and_legacy_bytes() {
        let mut p = Printer::new(MemoryTransport::new());
        p.double_width_on();
        p.double_width_off();
        assert_eq!(
            captured(p),
            vec![0x1B, 0x21, 0x20, 0x0E, 0x1B, 0x21, 0x00, 0x14]
        );
    }

    #[test]
    fn test_reset_sequence() {
        let mut p = Printer::new(MemoryTransport::new());
        p.set_font(Font::B);
        p.reset();
        assert_eq!(p.style_mask(), 0);
        let bytes = captured(p);
        // After the font change: ESC @, style 0, inverse off, upside off,
        // underline off, double strike off, line height 30
        let expected: Vec<u8> = [
            vec![0x1B, 0x21, 0x01],
            vec![0x1B, 0x40],
            vec![0x1B, 0x21, 0x00],
            vec![0x1D, 0x42, 0x00],
            vec![0x1B, 0x7B, 0x00],
            vec![0x1B, 0x2D, 0x00],
            vec![0x1B, 0x47, 0x00],
            vec![0x1B, 0x33, 30],
        ]
        .concat();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_write_text_drops_carriage_returns() {
        let mut p = Printer::new(MemoryTransport::new());
        p.write_text(b"a\rb\r\nc");
        assert_eq!(captured(p), b"ab\nc");
    }

    #[test]
    fn test_write_line_appends_lf() {
        let mut p = Printer::new(MemoryTransport::new());
        p.write_line(b"hi");
        assert_eq!(captured(p), b"hi\n");
    }

    #[test]
    fn test_clamped_parameters_stay_in_range() {
        let mut p = Printer::new(MemoryTransport::new());
        p.set_underline(99);
        p.set_charset(99);
        p.set_code_page(99);
        p.set_scale(0, 99);
        assert_eq!(
            captured(p),
            vec![
                0x1B, 0x2D, 2, // underline weight clamps to 2
                0x1B, 0x52, 15, // charset clamps to 15
                0x1B, 0x74, 47, // code page clamps to 47
                0x1D, 0x21, 0x07, // scale clamps to 1x width, 8x height
            ]
        );
    }

    #[test]
    fn test_barcode_emission_passthrough() {
        let mut p = Printer::new(MemoryTransport::new());
        p.set_barcode_height(80);
        p.print_barcode(Symbology::Code39, b"X1", true);
        assert_eq!(
            captured(p),
            vec![0x1D, 0x68, 80, 0x1D, 0x6B, 4, b'X', b'1', 0x00]
        );
    }

    #[test]
    fn test_qr_sequence_streams_in_order() {
        let mut p = Printer::new(MemoryTransport::new());
        p.qr_select_model(2);
        p.qr_module_size(4);
        p.qr_error_correction(48);
        p.qr_store_data(b"Q");
        p.qr_print();
        let bytes = captured(p);
        let expected: Vec<u8> = [
            qr::select_model(2),
            qr::module_size(4),
            qr::error_correction(48),
            qr::store_data(b"Q"),
            qr::print(),
        ]
        .concat();
        assert_eq!(bytes, expected);
    }
}

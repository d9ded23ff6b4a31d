//! # Print Jobs
//!
//! Assembles complete print jobs out of the transcoding, wrapping and
//! rotation building blocks, reading one [`PrinterSettings`] snapshot per
//! call.
//!
//! Free-form message bodies go through the full transform pipeline
//! (transcode, wrap, optional reversal). Structured fields — node lines
//! and label/value pairs — are written as raw bytes; keeping them inside
//! the printable alphabet is the producer's contract.
//!
//! Nothing here returns an error. A job that hits a missing transport
//! simply prints nothing.

use chrono::{Local, TimeZone};

use crate::printer::{Printer, PrinterSettings, Size};
use crate::protocol::latin1;
use crate::protocol::text::Alignment;
use crate::raster::RasterImage;
use crate::transport::Transport;
use crate::wrap;

/// Separator line opening every message job.
pub const MESSAGE_SEPARATOR: &[u8] = b"----------------";

/// QR defaults: model 2, 4-dot modules, error correction level '0'.
const QR_MODEL: u8 = 2;
const QR_MODULE_SIZE: u8 = 4;
const QR_ERROR_CORRECTION: u8 = 48;

/// Push the settings snapshot into the device: font, size, decorations.
///
/// Called at job start and after any job step that deviates from the
/// configured state (e.g. the inverse sender line).
pub fn apply_settings<T: Transport>(printer: &mut Printer<T>, settings: &PrinterSettings) {
    printer.set_font(settings.font);
    printer.set_size(settings.size);
    if settings.decorations.double_width {
        printer.double_width_on();
    } else if settings.size != Size::Large {
        // Large already carries the width bit; forcing it off here would
        // undo the size that was just applied.
        printer.double_width_off();
    }
    printer.set_upside_down(settings.decorations.upside_down);
    printer.set_inverse(false);
}

/// Print a text message with header, timestamp and transformed body.
///
/// The sender line prints in inverse video unless the `plain_sender`
/// decoration is set. The body is transcoded to Latin-1; under normal
/// orientation it goes out as one multi-line write (the printer wraps by
/// itself), under upside-down orientation it is wrapped to the active
/// line budget and emitted in reverse line order so the detached receipt
/// reads top to bottom.
pub fn print_message<T: Transport>(
    printer: &mut Printer<T>,
    settings: &PrinterSettings,
    body: &[u8],
    sender: &str,
    timestamp: u32,
) {
    log::info!("message job: {} bytes from {}", body.len(), sender);

    printer.write_line(MESSAGE_SEPARATOR);
    printer.write_text(b"From: ");
    printer.set_inverse(!settings.decorations.plain_sender);
    printer.write_line(sender.as_bytes());
    apply_settings(printer, settings);
    printer.write_text(b"Time: ");
    printer.write_line(format_timestamp(timestamp).as_bytes());

    let body = latin1::transcode(body);
    if settings.decorations.upside_down {
        let budget = wrap::line_budget(settings);
        for line in wrap::wrap(&body, budget).iter().rev() {
            printer.write_line(line);
        }
    } else {
        printer.write_line(&body);
    }
    printer.feed(2);
}

/// Render a Unix epoch as local time, `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(epoch: u32) -> String {
    match Local.timestamp_opt(i64::from(epoch), 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::from("????-??-?? ??:??:??"),
    }
}

/// Print a node announcement: `NODE <num> <name>`. Raw bytes, no
/// transform pipeline.
pub fn print_node_info<T: Transport>(printer: &mut Printer<T>, num: u32, name: &str) {
    log::info!("node job: {} {}", num, name);
    printer.write_line(format!("NODE {} {}", num, name).as_bytes());
}

/// Print a label/value pair: `<label>: <value>`. Raw bytes, no transform
/// pipeline.
pub fn print_field<T: Transport>(printer: &mut Printer<T>, label: &str, value: &str) {
    log::info!("{}: {}", label, value);
    printer.write_line(format!("{}: {}", label, value).as_bytes());
}

/// Position reports are logged but not printed.
pub fn report_position(lat: f64, lon: f64, alt: i32) {
    log::info!("position lat={:.7} lon={:.7} alt={}", lat, lon, alt);
}

/// Opaque binary payloads are logged but not printed.
pub fn report_binary_payload(size: usize) {
    log::info!("binary payload: {} bytes", size);
}

/// Print a raster image, rotating it 180° in software when the
/// upside-down decoration is active (hardware upside-down mode only
/// rotates text).
pub fn print_raster<T: Transport>(
    printer: &mut Printer<T>,
    settings: &PrinterSettings,
    image: &RasterImage,
) {
    log::info!(
        "raster job: {}x{} ({} bytes)",
        image.width_bytes,
        image.height,
        image.data.len()
    );
    if settings.decorations.upside_down {
        let rotated = image.rotated_180();
        printer.print_raster(0, rotated.width_bytes, rotated.height, &rotated.data);
    } else {
        printer.print_raster(0, image.width_bytes, image.height, &image.data);
    }
}

/// Print a centered QR code and restore the configured state.
pub fn print_qr<T: Transport>(
    printer: &mut Printer<T>,
    settings: &PrinterSettings,
    content: &str,
) {
    log::info!("qr job: {} bytes", content.len());
    printer.justify(Alignment::Center);
    printer.qr_select_model(QR_MODEL);
    printer.qr_module_size(QR_MODULE_SIZE);
    printer.qr_error_correction(QR_ERROR_CORRECTION);
    printer.qr_store_data(content.as_bytes());
    printer.qr_print();
    printer.feed(2);
    printer.justify(Alignment::Left);
    apply_settings(printer, settings);
}

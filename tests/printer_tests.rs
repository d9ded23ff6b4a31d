//! # End-to-End Byte Stream Tests
//!
//! These tests drive complete print jobs into a [`MemoryTransport`] and
//! compare the captured stream against command sequences composed from
//! the protocol builders. They pin down job structure and ordering — the
//! per-command wire bytes are pinned by the unit tests next to each
//! builder.

use pretty_assertions::assert_eq;

use boleta::printer::settings::{Decorations, Font, PrinterSettings, Size};
use boleta::printer::Printer;
use boleta::protocol::{barcode::qr, commands, text};
use boleta::raster::RasterImage;
use boleta::receipt;
use boleta::transport::MemoryTransport;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn new_printer() -> Printer<MemoryTransport> {
    Printer::new(MemoryTransport::new())
}

fn captured(printer: Printer<MemoryTransport>) -> Vec<u8> {
    printer.into_sink().unwrap().into_bytes()
}

fn upside_down_settings() -> PrinterSettings {
    PrinterSettings {
        decorations: Decorations {
            upside_down: true,
            ..Decorations::default()
        },
        ..PrinterSettings::default()
    }
}

/// The stream `receipt::apply_settings` produces from a given style
/// starting state.
fn apply_settings_bytes(settings: &PrinterSettings) -> Vec<u8> {
    let mut expected = Vec::new();
    let font_bits = settings.font.style_bits();
    let size_bits = settings.size.style_bits();
    expected.extend(text::style(font_bits));
    expected.extend(text::style(font_bits | size_bits));
    if settings.decorations.double_width {
        expected.extend(text::style(font_bits | size_bits | text::STYLE_DOUBLE_WIDTH));
        expected.push(commands::SO);
    } else if settings.size != Size::Large {
        expected.extend(text::style(font_bits | size_bits));
        expected.push(commands::DC4);
    }
    expected.extend(text::upside_down(settings.decorations.upside_down));
    expected.extend(text::inverse(false));
    expected
}

fn line(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    out.push(commands::LF);
    out
}

// ============================================================================
// MESSAGE JOBS
// ============================================================================

#[test]
fn message_job_normal_orientation() {
    let settings = PrinterSettings::default();
    let mut printer = new_printer();
    receipt::print_message(&mut printer, &settings, b"hola", "node-1", 1_700_000_000);

    let mut expected = Vec::new();
    expected.extend(line(b"----------------"));
    expected.extend(b"From: ");
    expected.extend(text::inverse(true));
    expected.extend(line(b"node-1"));
    expected.extend(apply_settings_bytes(&settings));
    expected.extend(b"Time: ");
    expected.extend(line(receipt::format_timestamp(1_700_000_000).as_bytes()));
    expected.extend(line(b"hola"));
    expected.extend(commands::feed(2));

    assert_eq!(captured(printer), expected);
}

#[test]
fn message_job_plain_sender_disables_inverse() {
    let settings = PrinterSettings {
        decorations: Decorations {
            plain_sender: true,
            ..Decorations::default()
        },
        ..PrinterSettings::default()
    };
    let mut printer = new_printer();
    receipt::print_message(&mut printer, &settings, b"x", "who", 0);

    let stream = captured(printer);
    let inverse_on: Vec<u8> = text::inverse(true);
    let prefix_end = stream
        .windows(inverse_on.len())
        .position(|w| w == inverse_on);
    assert_eq!(prefix_end, None, "sender line must not switch to inverse");
}

#[test]
fn message_job_transcodes_the_body() {
    let settings = PrinterSettings::default();
    let mut printer = new_printer();
    receipt::print_message(&mut printer, &settings, "café ❤".as_bytes(), "s", 0);

    let stream = captured(printer);
    let body: &[u8] = &[b'c', b'a', b'f', 0xE9, b' ', b'<', b'3', commands::LF];
    assert!(
        stream.windows(body.len()).any(|w| w == body),
        "transcoded body not found in stream"
    );
}

#[test]
fn message_job_upside_down_reverses_line_order() {
    let settings = upside_down_settings();
    let mut printer = new_printer();
    receipt::print_message(&mut printer, &settings, b"first\nsecond", "s", 0);

    let stream = captured(printer);
    let second = line(b"second");
    let first = line(b"first");
    let pos_second = stream
        .windows(second.len())
        .position(|w| w == second)
        .expect("second line missing");
    let pos_first = stream
        .windows(first.len())
        .position(|w| w == first)
        .expect("first line missing");
    assert!(
        pos_second < pos_first,
        "upside-down body must emit lines in reverse order"
    );
    // Header still precedes both
    let header = line(b"----------------");
    let pos_header = stream.windows(header.len()).position(|w| w == header).unwrap();
    assert!(pos_header < pos_second);
}

#[test]
fn message_job_upside_down_wraps_to_the_budget() {
    let settings = upside_down_settings(); // font A: 32 columns
    let long_word = [b'a'; 40];
    let mut printer = new_printer();
    receipt::print_message(&mut printer, &settings, &long_word, "s", 0);

    let stream = captured(printer);
    // Hard break at 32: the 8-char tail prints before the 32-char head
    let tail = line(&[b'a'; 8]);
    let head = line(&[b'a'; 32]);
    let pos_tail = stream.windows(tail.len()).position(|w| w == tail).unwrap();
    let pos_head = stream.windows(head.len()).position(|w| w == head).unwrap();
    assert!(pos_tail < pos_head);
}

// ============================================================================
// STRUCTURED FIELDS
// ============================================================================

#[test]
fn node_info_bypasses_the_transform_pipeline() {
    let mut printer = new_printer();
    receipt::print_node_info(&mut printer, 3735928559, "garden");
    assert_eq!(captured(printer), line(b"NODE 3735928559 garden"));
}

#[test]
fn field_job_writes_label_and_value_raw() {
    let mut printer = new_printer();
    receipt::print_field(&mut printer, "TEMP", "200");
    assert_eq!(captured(printer), line(b"TEMP: 200"));
}

// ============================================================================
// RASTER JOBS
// ============================================================================

#[test]
fn raster_job_normal_orientation_passes_data_through() {
    let image = RasterImage::new(2, 2, vec![0b1000_0000, 0b0000_0001, 0b0000_0010, 0b0100_0000]);
    let mut printer = new_printer();
    receipt::print_raster(&mut printer, &PrinterSettings::default(), &image);

    let mut expected = vec![0x1D, 0x76, 0x30, 0, 2, 0, 2, 0];
    expected.extend(&image.data);
    assert_eq!(captured(printer), expected);
}

#[test]
fn raster_job_upside_down_rotates_before_transmission() {
    let image = RasterImage::new(2, 2, vec![0b1000_0000, 0b0000_0001, 0b0000_0010, 0b0100_0000]);
    let mut printer = new_printer();
    receipt::print_raster(&mut printer, &upside_down_settings(), &image);

    let mut expected = vec![0x1D, 0x76, 0x30, 0, 2, 0, 2, 0];
    expected.extend(&[0b0000_0010, 0b0100_0000, 0b1000_0000, 0b0000_0001]);
    assert_eq!(captured(printer), expected);
}

#[test]
fn raster_job_size_mismatch_falls_back_to_original_buffer() {
    // 3 bytes can't be a 2x2 raster; upside-down must not scramble it
    let image = RasterImage::new(2, 2, vec![0xAA, 0xBB, 0xCC]);
    let mut printer = new_printer();
    receipt::print_raster(&mut printer, &upside_down_settings(), &image);

    let stream = captured(printer);
    assert_eq!(&stream[8..], &[0xAA, 0xBB, 0xCC]);
}

// ============================================================================
// QR JOBS
// ============================================================================

#[test]
fn qr_job_streams_the_full_sequence() {
    let settings = PrinterSettings::default();
    let mut printer = new_printer();
    receipt::print_qr(&mut printer, &settings, "tALaJ2r35y");

    let mut expected = Vec::new();
    expected.extend(text::justify(text::Alignment::Center));
    expected.extend(qr::select_model(2));
    expected.extend(qr::module_size(4));
    expected.extend(qr::error_correction(48));
    expected.extend(qr::store_data(b"tALaJ2r35y"));
    expected.extend(qr::print());
    expected.extend(commands::feed(2));
    expected.extend(text::justify(text::Alignment::Left));
    expected.extend(apply_settings_bytes(&settings));

    assert_eq!(captured(printer), expected);
}

// ============================================================================
// SINKLESS OPERATION
// ============================================================================

#[test]
fn every_job_is_a_silent_noop_without_a_transport() {
    let settings = upside_down_settings();
    let mut printer = Printer::<MemoryTransport>::disconnected();
    printer.init();
    receipt::apply_settings(&mut printer, &settings);
    receipt::print_message(&mut printer, &settings, b"msg", "s", 1_700_000_000);
    receipt::print_node_info(&mut printer, 1, "n");
    receipt::print_field(&mut printer, "A", "B");
    receipt::print_qr(&mut printer, &settings, "Q");
    let image = RasterImage::new(1, 1, vec![0xFF]);
    receipt::print_raster(&mut printer, &settings, &image);
    assert!(printer.into_sink().is_none());
}

// ============================================================================
// SETTINGS APPLICATION
// ============================================================================

#[test]
fn apply_settings_pushes_the_whole_snapshot() {
    let settings = PrinterSettings {
        font: Font::B,
        size: Size::Large,
        decorations: Decorations {
            plain_sender: false,
            double_width: true,
            upside_down: true,
        },
    };
    let mut printer = new_printer();
    receipt::apply_settings(&mut printer, &settings);
    assert_eq!(captured(printer), apply_settings_bytes(&settings));
}

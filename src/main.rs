//! # Boleta CLI
//!
//! Command-line utility for driving a thermal printer on a serial port.
//!
//! ## Usage
//!
//! ```bash
//! # Print a message (header, timestamp, wrapped body)
//! boleta message --sender garden-node "Tomatoes need water 🌱"
//!
//! # Print a QR code
//! boleta qr "https://example.com"
//!
//! # Print a raw packed bitmap (48 byte-columns wide)
//! boleta image --width-bytes 48 logo.raw
//!
//! # Fire the built-in self test
//! boleta test-page
//!
//! # Use a different device or a settings file
//! boleta --device /dev/ttyAMA0 --settings settings.json message "hi"
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use boleta::{
    BoletaError, Printer, PrinterSettings, RasterImage, SerialTransport, receipt,
    transport::serial::DEFAULT_DEVICE,
};

/// Boleta - thermal receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "boleta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Printer serial device path
    #[arg(long, default_value = DEFAULT_DEVICE, global = true)]
    device: String,

    /// Baud rate
    #[arg(long, default_value = "9600", global = true)]
    baud: u32,

    /// Settings snapshot file (JSON); defaults apply when omitted
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a text message with header and timestamp
    Message {
        /// Message body (UTF-8; emoji become text labels)
        text: String,

        /// Sender identifier for the header line
        #[arg(long, default_value = "boleta")]
        sender: String,
    },

    /// Print a QR code
    Qr {
        /// Content to encode
        content: String,
    },

    /// Print a raw packed monochrome bitmap
    Image {
        /// Path to the packed bitmap (1 bit per dot, MSB first)
        path: PathBuf,

        /// Row width in byte-columns (dots / 8)
        #[arg(long)]
        width_bytes: u16,
    },

    /// Print the printer's built-in self-test page
    TestPage,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BoletaError> {
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => PrinterSettings::load(path)?,
        None => PrinterSettings::default(),
    };

    let transport = SerialTransport::open_with_baud(&cli.device, cli.baud)?;
    let mut printer = Printer::new(transport);
    printer.init();
    receipt::apply_settings(&mut printer, &settings);

    match cli.command {
        Commands::Message { text, sender } => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as u32)
                .unwrap_or(0);
            receipt::print_message(&mut printer, &settings, text.as_bytes(), &sender, timestamp);
        }
        Commands::Qr { content } => {
            receipt::print_qr(&mut printer, &settings, &content);
        }
        Commands::Image { path, width_bytes } => {
            let mut data = fs::read(&path)?;
            let width_bytes = width_bytes.max(1);
            let width = usize::from(width_bytes);
            let height = (data.len() / width) as u16;
            if data.len() % width != 0 {
                log::warn!(
                    "bitmap length {} is not a multiple of {} byte-columns; dropping the partial row",
                    data.len(),
                    width
                );
                data.truncate(width * usize::from(height));
            }
            let image = RasterImage::new(width_bytes, height, data);
            receipt::print_raster(&mut printer, &settings, &image);
            printer.feed(2);
        }
        Commands::TestPage => {
            printer.print_test_page();
        }
    }

    Ok(())
}

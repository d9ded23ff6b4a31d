//! # Error Types
//!
//! Errors exist only at the setup boundary: opening a serial device,
//! loading a settings file. Once a printer is constructed, the encode and
//! print paths never return errors — anomalies degrade silently so a
//! print job can never abort the host.

use thiserror::Error;

/// Main error type for boleta setup operations
#[derive(Debug, Error)]
pub enum BoletaError {
    /// Transport-level errors (device open, TTY configuration)
    #[error("transport error: {0}")]
    Transport(String),

    /// Settings file could not be read or parsed
    #[error("settings error: {0}")]
    Settings(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

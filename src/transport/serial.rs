//! # Serial TTY Transport
//!
//! Communicates with a thermal printer over a serial TTY device
//! (USB-serial adapter or an on-board UART exposed as `/dev/ttyS*` /
//! `/dev/ttyUSB*` / `/dev/ttyAMA*`).
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary command data passes through
//! unmodified:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, etc. disabled
//! - **No output processing**: OPOST disabled (no CR/LF translation)
//! - **8-bit characters**: CS8, no parity (8N1)
//! - **No echo, non-canonical**: ECHO, ECHONL, ICANON disabled
//!
//! IXON/IXOFF/IXANY are disabled because 0x11 (XON) and 0x13 (XOFF) can
//! appear inside raster data.
//!
//! ## Chunked Writes
//!
//! These printer modules have small receive buffers and no flow control
//! at 9600 baud. Large blocks (rasters, NV stores) are written in chunks
//! with a short delay between them.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::BoletaError;
use crate::transport::Transport;

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// Default baud rate (the usual factory setting for these modules)
pub const DEFAULT_BAUD: u32 = 9600;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 256;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Serial Printer Transport
///
/// Owns an open raw-mode TTY and writes command streams to it.
///
/// ## Example
///
/// ```no_run
/// use boleta::transport::{SerialTransport, Transport};
/// use boleta::protocol::commands;
///
/// let mut transport = SerialTransport::open("/dev/ttyUSB0")?;
/// transport.send(&commands::init())?;
/// # Ok::<(), boleta::error::BoletaError>(())
/// ```
pub struct SerialTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl SerialTransport {
    /// Open a serial device at the default 9600 baud.
    ///
    /// ## Errors
    ///
    /// Returns an error if the device doesn't exist, permission is denied
    /// (dialout group membership usually fixes this), or TTY
    /// configuration fails.
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, BoletaError> {
        Self::open_with_baud(device, DEFAULT_BAUD)
    }

    /// Open a serial device at a specific baud rate.
    ///
    /// Supported rates: 9600, 19200, 38400, 57600, 115200.
    pub fn open_with_baud<P: AsRef<Path>>(device: P, baud: u32) -> Result<Self, BoletaError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            BoletaError::Transport(format!("failed to open {}: {}", path.display(), e))
        })?;

        configure_tty_raw(file.as_raw_fd(), baud)?;

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Open with the default device path.
    pub fn open_default() -> Result<Self, BoletaError> {
        Self::open(DEFAULT_DEVICE)
    }

    /// Set the chunk size for large writes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }
}

impl Transport for SerialTransport {
    /// Write data to the printer, chunking large blocks to keep the
    /// module's receive buffer from overflowing.
    fn send(&mut self, data: &[u8]) -> io::Result<()> {
        if data.len() <= self.chunk_size {
            self.file.write_all(data)?;
        } else {
            for chunk in data.chunks(self.chunk_size) {
                self.file.write_all(chunk)?;
                if !self.chunk_delay.is_zero() {
                    thread::sleep(self.chunk_delay);
                }
            }
        }
        self.file.flush()
    }
}

/// Map a numeric baud rate to its termios constant.
#[cfg(unix)]
fn baud_constant(baud: u32) -> Option<libc::speed_t> {
    match baud {
        9600 => Some(libc::B9600),
        19200 => Some(libc::B19200),
        38400 => Some(libc::B38400),
        57600 => Some(libc::B57600),
        115200 => Some(libc::B115200),
        _ => None,
    }
}

/// Configure a file descriptor for raw 8N1 TTY mode at the given baud.
#[cfg(unix)]
fn configure_tty_raw(fd: i32, baud: u32) -> Result<(), BoletaError> {
    use std::mem::MaybeUninit;

    let speed = baud_constant(baud)
        .ok_or_else(|| BoletaError::Transport(format!("unsupported baud rate: {}", baud)))?;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(BoletaError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    // Input flags: no break handling, no CR/LF mangling, no flow control
    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    // Output flags: no post-processing
    termios.c_oflag &= !libc::OPOST;

    // Local flags: no echo, no canonical mode, no signals
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // Control flags: 8 data bits, no parity, one stop bit
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB | libc::CSTOPB);
    termios.c_cflag |= libc::CS8;

    unsafe {
        libc::cfsetispeed(&mut termios, speed);
        libc::cfsetospeed(&mut termios, speed);
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(BoletaError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(not(unix))]
fn configure_tty_raw(_fd: i32, _baud: u32) -> Result<(), BoletaError> {
    Ok(())
}

//! Serial side of the meter link.
//!
//! The UT70B ships an opto-isolated RS-232 adapter that only powers up
//! while the host keeps RTS low. The link parameters are fixed by the
//! meter, so they live here as constants. The stream carries no checksum;
//! the meter repeats every reading, and [`FrameReader::read_confirmed`]
//! only hands out frames it has seen twice in a row.

use log::debug;
use std::io::{self, BufRead, BufReader, Read};
use std::time::Duration;

/// Baud rate fixed by the meter (2400 bps)
pub const BAUD_RATE: u32 = 2400;

/// Seven data bits
pub const DATA_BITS: serialport::DataBits = serialport::DataBits::Seven;

/// Odd parity
pub const PARITY: serialport::Parity = serialport::Parity::Odd;

/// One stop bit
pub const STOP_BITS: serialport::StopBits = serialport::StopBits::One;

/// Read timeout in milliseconds, a few times the meter's send interval
pub const TIMEOUT_MS: u64 = 5000;

/// Default device path of the USB serial adapter
pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";

/// Reads LF-terminated frames from the meter and confirms them by
/// repetition. Generic over [`Read`] so tests can drive it from memory.
pub struct FrameReader<R: Read> {
    inner: BufReader<R>,
}

impl<R: Read> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
        }
    }

    /// Reads one raw frame, terminator included.
    pub fn read_frame(&mut self) -> io::Result<Vec<u8>> {
        let mut frame = Vec::new();
        let n = self.inner.read_until(b'\n', &mut frame)?;
        if n == 0 || !frame.ends_with(b"\n") {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "serial stream ended mid frame",
            ));
        }
        Ok(frame)
    }

    /// Reads frames until two consecutive ones are byte-equal and returns
    /// the confirmed bytes. Each call starts over with a fresh pair, so a
    /// reading is never confirmed against a frame from an earlier call.
    pub fn read_confirmed(&mut self) -> io::Result<Vec<u8>> {
        let mut last = self.read_frame()?;
        loop {
            let next = self.read_frame()?;
            if next == last {
                return Ok(next);
            }
            debug!("Discarding unconfirmed frame {}", hex::encode(&last));
            last = next;
        }
    }
}

/// Opens a serial port with the meter's link settings and wraps it in a
/// [`FrameReader`]. The port closes again when the reader is dropped.
pub fn open(path: &str) -> Result<FrameReader<Box<dyn serialport::SerialPort>>, serialport::Error> {
    let mut port = serialport::new(path, BAUD_RATE)
        .data_bits(DATA_BITS)
        .parity(PARITY)
        .stop_bits(STOP_BITS)
        .timeout(Duration::from_millis(TIMEOUT_MS))
        .open()?;

    // the adapter draws its power from a low RTS line
    port.write_request_to_send(false)?;

    Ok(FrameReader::new(port))
}

//! Fixed-width text rendering of received frames for the host-visible
//! serial stream: `IIIIIIII: LLLLLLLL HHHHHHHH\r\n`, with the identifier and
//! both little-endian payload halves in lowercase hexadecimal.
use core::fmt::Write;

use crate::bridge::frame::CanFrame;

/// Rendered record length: 8 hex id + `": "` + 8 hex + `" "` + 8 hex + `"\r\n"`.
pub const RECORD_LEN: usize = 29;

/// One rendered serial record. Stack-only, no allocation.
pub struct Record {
    buf: [u8; RECORD_LEN],
    len: usize,
}

impl Record {
    /// Render `frame` into its fixed-width text form.
    pub fn render(frame: &CanFrame) -> Self {
        let mut record = Self {
            buf: [0u8; RECORD_LEN],
            len: 0,
        };
        let (lo, hi) = frame.data32();
        // The buffer is sized exactly for this format; the writer truncates
        // rather than panicking if that ever stops being true.
        let _ = write!(record, "{:08x}: {:08x} {:08x}\r\n", frame.id_raw(), lo, hi);
        record
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl Write for Record {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let bytes = s.as_bytes();
        let room = RECORD_LEN - self.len;
        let n = bytes.len().min(room);
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        if n < bytes.len() {
            Err(core::fmt::Error)
        } else {
            Ok(())
        }
    }
}

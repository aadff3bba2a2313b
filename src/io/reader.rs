//! Cursor-based byte reader
//!
//! Reads big-endian fields from an immutable buffer. Every call checks bounds
//! before touching the cursor, so a failed read or seek leaves the reader
//! exactly where it was.

use crate::{ModError, Result};

/// Bounds-checked cursor over a borrowed byte buffer
///
/// Slices returned by [`ByteReader::read_bytes`] borrow the original buffer
/// (lifetime `'a`), not the reader, so they outlive the reader itself.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at offset 0
    pub fn new(data: &'a [u8]) -> Self {
        ByteReader { data, position: 0 }
    }

    /// Total buffer length in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Current cursor position
    pub fn tell(&self) -> usize {
        self.position
    }

    /// Unread bytes from the cursor to the end of the buffer
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Move the cursor to `position`. Seeking to exactly `size()` is allowed.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position > self.data.len() {
            return Err(ModError::OutOfRange {
                op: "seek",
                offset: position,
                len: 0,
                size: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Read one unsigned byte
    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.take("read_u8", 1)?;
        Ok(bytes[0])
    }

    /// Read a big-endian unsigned 16-bit value
    pub fn read_u16_be(&mut self) -> Result<u16> {
        let bytes = self.take("read_u16_be", 2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Read `count` bytes as a view into the original buffer (no copy)
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.take("read_bytes", count)
    }

    /// Read a fixed-width, null-padded ASCII field
    ///
    /// The string stops at the first `0` byte but the cursor always advances
    /// by the full `count`. Bytes above 126 are kept as their raw code point.
    pub fn read_fixed_string(&mut self, count: usize) -> Result<String> {
        let bytes = self.take("read_fixed_string", count)?;
        Ok(decode_fixed_string(bytes))
    }

    fn take(&mut self, op: &'static str, count: usize) -> Result<&'a [u8]> {
        let end = self
            .position
            .checked_add(count)
            .ok_or_else(|| ModError::InvalidArgument {
                op,
                reason: format!(
                    "byte count {} overflows from position {}",
                    count, self.position
                ),
            })?;

        if end > self.data.len() {
            return Err(ModError::OutOfRange {
                op,
                offset: self.position,
                len: count,
                size: self.data.len(),
            });
        }

        let data: &'a [u8] = self.data;
        let bytes = &data[self.position..end];
        self.position = end;
        Ok(bytes)
    }
}

/// Decode a null-padded field, truncating at the first null byte
pub(crate) fn decode_fixed_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

//! # Bounds-Checked Binary Reader
//!
//! Explicit cursor over an opaque byte buffer. Every read is bounds-checked
//! and returns a typed [`ReadError`] on malformed input; metadata parsing
//! must never be able to fault on attacker-controlled bytes.

use crate::errors::ReadError;

/// Cursor over a borrowed byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current cursor position (offset from the start of the buffer).
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Bytes remaining after the cursor.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, wanted: usize) -> Result<&'a [u8], ReadError> {
        if self.remaining() < wanted {
            return Err(ReadError::OutOfBounds {
                offset: self.pos,
                wanted,
                len: self.buf.len(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + wanted];
        self.pos += wanted;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        Ok(self.take(1)?[0])
    }

    /// Big-endian u32, the wire convention for all fixed-width integers.
    pub fn read_u32_be(&mut self) -> Result<u32, ReadError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let slice = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], ReadError> {
        self.take(len)
    }

    /// Consume the rest of the buffer.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let slice = &self.buf[self.pos..];
        self.pos = self.buf.len();
        slice
    }

    /// Require that the whole buffer has been consumed.
    pub fn expect_end(&self) -> Result<(), ReadError> {
        if self.remaining() != 0 {
            return Err(ReadError::TrailingBytes {
                offset: self.pos,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }
}

//! Big-endian binary writer with cursor tracking.

use std::io::Write;

use crate::BufferError;

/// A binary writer over a sequential byte sink.
///
/// All multi-byte quantities are written big-endian. Any sink failure is
/// surfaced as [`BufferError::Io`].
///
/// # Example
///
/// ```
/// use ubf_buffers::Writer;
///
/// let mut writer = Writer::new(Vec::new());
/// writer.u8(0x01).unwrap();
/// writer.i16(0x0203).unwrap();
/// assert_eq!(writer.position(), 3);
/// assert_eq!(writer.into_inner(), [0x01, 0x02, 0x03]);
/// ```
pub struct Writer<W> {
    inner: W,
    /// Number of bytes written so far.
    x: usize,
}

impl<W: Write> Writer<W> {
    /// Creates a new writer over the given sink.
    pub fn new(inner: W) -> Self {
        Self { inner, x: 0 }
    }

    /// Returns the number of bytes written so far.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Unwraps the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> Result<(), BufferError> {
        self.inner.flush().map_err(BufferError::Io)
    }

    /// Writes a raw byte run.
    pub fn buf(&mut self, data: &[u8]) -> Result<(), BufferError> {
        self.inner.write_all(data).map_err(BufferError::Io)?;
        self.x += data.len();
        Ok(())
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) -> Result<(), BufferError> {
        self.buf(&[val])
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self, val: i8) -> Result<(), BufferError> {
        self.buf(&val.to_be_bytes())
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) -> Result<(), BufferError> {
        self.buf(&val.to_be_bytes())
    }

    /// Writes a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self, val: i16) -> Result<(), BufferError> {
        self.buf(&val.to_be_bytes())
    }

    /// Writes a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) -> Result<(), BufferError> {
        self.buf(&val.to_be_bytes())
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) -> Result<(), BufferError> {
        self.buf(&val.to_be_bytes())
    }

    /// Writes a 32-bit IEEE-754 float (big-endian).
    #[inline]
    pub fn f32(&mut self, val: f32) -> Result<(), BufferError> {
        self.buf(&val.to_be_bytes())
    }

    /// Writes a 64-bit IEEE-754 float (big-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) -> Result<(), BufferError> {
        self.buf(&val.to_be_bytes())
    }
}

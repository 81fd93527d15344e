//! Big-endian binary reader with cursor tracking.

use std::io::Read;

use crate::BufferError;

/// Upper bound on the up-front allocation made by [`Reader::buf`].
///
/// Larger reads grow the buffer as bytes actually arrive.
const PREALLOC_LIMIT: usize = 8 * 1024;

/// A binary reader over a sequential byte source.
///
/// The reader counts consumed bytes and provides checked methods for reading
/// big-endian integers, floats, and raw byte runs. Running out of input
/// yields [`BufferError::EndOfBuffer`] instead of panicking.
///
/// # Example
///
/// ```
/// use ubf_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data[..]);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.i16().unwrap(), 0x0203);
/// assert_eq!(reader.position(), 3);
/// assert!(reader.u16().is_err());
/// ```
pub struct Reader<R> {
    inner: R,
    /// Number of bytes consumed so far.
    x: usize,
}

impl<R: Read> Reader<R> {
    /// Creates a new reader over the given source.
    pub fn new(inner: R) -> Self {
        Self { inner, x: 0 }
    }

    /// Returns the number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Returns a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwraps the reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    #[inline]
    fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let mut bytes = [0u8; N];
        self.inner
            .read_exact(&mut bytes)
            .map_err(|err| BufferError::from_io(err, self.x))?;
        self.x += N;
        Ok(bytes)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.array::<1>()?[0])
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self) -> Result<i8, BufferError> {
        Ok(i8::from_be_bytes(self.array()?))
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self) -> Result<u16, BufferError> {
        Ok(u16::from_be_bytes(self.array()?))
    }

    /// Reads a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self) -> Result<i16, BufferError> {
        Ok(i16::from_be_bytes(self.array()?))
    }

    /// Reads a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self) -> Result<i32, BufferError> {
        Ok(i32::from_be_bytes(self.array()?))
    }

    /// Reads a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self) -> Result<i64, BufferError> {
        Ok(i64::from_be_bytes(self.array()?))
    }

    /// Reads a 32-bit floating point number (big-endian).
    #[inline]
    pub fn f32(&mut self) -> Result<f32, BufferError> {
        Ok(f32::from_be_bytes(self.array()?))
    }

    /// Reads a 64-bit floating point number (big-endian).
    #[inline]
    pub fn f64(&mut self) -> Result<f64, BufferError> {
        Ok(f64::from_be_bytes(self.array()?))
    }

    /// Reads exactly `size` bytes.
    ///
    /// The returned buffer grows with the bytes actually received, so a
    /// bogus `size` on a short stream fails without reserving `size` bytes.
    pub fn buf(&mut self, size: usize) -> Result<Vec<u8>, BufferError> {
        let mut out = Vec::with_capacity(size.min(PREALLOC_LIMIT));
        let read = (&mut self.inner)
            .take(size as u64)
            .read_to_end(&mut out)
            .map_err(|err| BufferError::from_io(err, self.x))?;
        self.x += read;
        if read < size {
            return Err(BufferError::EndOfBuffer { position: self.x });
        }
        Ok(out)
    }
}

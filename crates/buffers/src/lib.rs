//! Big-endian binary buffer utilities for UBF.
//!
//! # Overview
//!
//! - [`Reader`] - Reads big-endian values from any [`std::io::Read`] with position tracking
//! - [`Writer`] - Writes big-endian values to any [`std::io::Write`] with position tracking
//! - [`print_octets`] - Hex preview of a byte slice for diagnostics
//!
//! # Example
//!
//! ```
//! use ubf_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::new(Vec::new());
//! writer.u8(0x01).unwrap();
//! writer.i16(0x0203).unwrap();
//! writer.buf(b"hello").unwrap();
//! let data = writer.into_inner();
//!
//! // Read it back
//! let mut reader = Reader::new(&data[..]);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.i16().unwrap(), 0x0203);
//! assert_eq!(reader.buf(5).unwrap(), b"hello");
//! ```

mod print_octets;
mod reader;
mod writer;

pub use print_octets::{print_octets, print_octets_default};
pub use reader::Reader;
pub use writer::Writer;

use std::io;

/// Error type for buffer operations.
#[derive(Debug)]
pub enum BufferError {
    /// Attempted to read past the end of the input.
    EndOfBuffer {
        /// Bytes consumed before the input ran out.
        position: usize,
    },
    /// The underlying byte channel failed.
    Io(io::Error),
}

impl BufferError {
    /// Converts an I/O error raised at `position`, treating EOF as [`BufferError::EndOfBuffer`].
    pub fn from_io(err: io::Error, position: usize) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            BufferError::EndOfBuffer { position }
        } else {
            BufferError::Io(err)
        }
    }
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer { position } => {
                write!(f, "end of buffer at position {position}")
            }
            BufferError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for BufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BufferError::Io(err) => Some(err),
            BufferError::EndOfBuffer { .. } => None,
        }
    }
}

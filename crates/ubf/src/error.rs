//! UBF encoder/decoder error type.

use thiserror::Error;
use ubf_buffers::BufferError;

/// Error type for UBF encoding and decoding operations.
///
/// Every variant is fatal for the conversion that raised it; no partial
/// output or tree is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum UbfError {
    #[error("nesting depth exceeds the maximum of {max}")]
    DepthExceeded { max: usize },
    #[error("unknown type tag 0x{code:02x} at position {position}")]
    UnknownTag { code: u8, position: usize },
    #[error("unexpected end of input at position {position}")]
    TruncatedInput { position: usize },
    #[error("invalid length {length} at position {position}")]
    InvalidLength { length: i64, position: usize },
    #[error("invalid UTF-8 in string at position {position}")]
    InvalidUtf8 { position: usize },
    #[error("duplicate object key `{key}`")]
    DuplicateKey { key: String },
    #[error("{remaining} trailing bytes after the root object")]
    TrailingBytes { remaining: usize },
    #[error("contract violation: {0}")]
    ContractViolation(&'static str),
    #[error("transport failure: {0}")]
    Transport(#[from] std::io::Error),
}

impl From<BufferError> for UbfError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer { position } => UbfError::TruncatedInput { position },
            BufferError::Io(err) => UbfError::Transport(err),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, UbfError>;

//! UBF: a compact binary format for ordered trees of typed values.
//!
//! A document is always a [`UbfObject`] at the root. Values are one of ten
//! kinds ([`UbfType`]): fixed-width big-endian primitives, UTF-8 strings,
//! and the two containers [`UbfArray`] and [`UbfObject`], which nest.
//!
//! # Example
//!
//! ```
//! use ubf::{UbfArray, UbfObject};
//!
//! let mut obj = UbfObject::new();
//! obj.put("n", 42i32);
//! obj.put("s", "héllo");
//! obj.put("arr", [true, false].into_iter().collect::<UbfArray>());
//!
//! let bytes = ubf::encode(&obj).unwrap();
//! let back = ubf::decode(&bytes).unwrap();
//!
//! assert_eq!(back.keys().collect::<Vec<_>>(), ["n", "s", "arr"]);
//! assert_eq!(back.get("n").and_then(|v| v.get_int()), Some(42));
//! assert_eq!(back, obj);
//! ```

mod array;
mod decoder;
mod encoder;
mod error;
mod object;
mod options;
mod types;
mod value;

pub mod json;

pub use array::UbfArray;
pub use decoder::UbfDecoder;
pub use encoder::UbfEncoder;
pub use error::{Result, UbfError};
pub use object::UbfObject;
pub use options::{UbfOptions, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH};
pub use types::UbfType;
pub use value::UbfValue;

use std::io::{Read, Write};

/// Encodes `obj` with default options.
pub fn encode(obj: &UbfObject) -> Result<Vec<u8>> {
    UbfEncoder::new().encode(obj)
}

/// Encodes `obj` into `out` with default options.
pub fn to_writer<W: Write>(out: W, obj: &UbfObject) -> Result<()> {
    UbfEncoder::new().write_to(out, obj)
}

/// Decodes a buffer holding exactly one document, with default options.
pub fn decode(data: &[u8]) -> Result<UbfObject> {
    UbfDecoder::new().decode(data)
}

/// Reads one document from `input` with default options.
pub fn from_reader<R: Read>(input: R) -> Result<UbfObject> {
    UbfDecoder::new().read_from(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_handles_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UbfEncoder>();
        assert_send_sync::<UbfDecoder>();
        assert_send_sync::<UbfObject>();
    }

    #[test]
    fn writer_and_reader_entry_points() {
        let obj: UbfObject = [("k", 1i64)].into_iter().collect();
        let mut out = Vec::new();
        to_writer(&mut out, &obj).unwrap();
        assert_eq!(out, encode(&obj).unwrap());
        assert_eq!(from_reader(&out[..]).unwrap(), obj);
    }
}

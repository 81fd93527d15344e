//! UBF decoder: bytes to [`UbfObject`] tree.
//!
//! Every declared length is validated before anything is allocated for it,
//! and nesting is bounded by the same maximum the encoder enforces.

use std::io::Read;

use log::{debug, trace};
use ubf_buffers::{print_octets, Reader};

use crate::error::{Result, UbfError};
use crate::{UbfArray, UbfObject, UbfOptions, UbfType, UbfValue};

/// Upper bound on container capacity reserved from a declared length.
const CAPACITY_HINT_LIMIT: usize = 1024;

/// UBF decoder.
///
/// Holds only immutable [`UbfOptions`]; nesting depth and stream position
/// are tracked per call.
#[derive(Debug, Clone, Default)]
pub struct UbfDecoder {
    options: UbfOptions,
}

impl UbfDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: UbfOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &UbfOptions {
        &self.options
    }

    /// Decodes a buffer that holds exactly one document.
    ///
    /// Bytes left over after the root object fail with
    /// [`UbfError::TrailingBytes`].
    pub fn decode(&self, data: &[u8]) -> Result<UbfObject> {
        let mut reader = Reader::new(data);
        let obj = match self.read_root(&mut reader) {
            Ok(obj) => obj,
            Err(err) => {
                let at = reader.position().min(data.len());
                debug!("ubf decode: bytes at {at}: {}", print_octets(&data[at..], 16));
                return Err(err);
            }
        };
        let remaining = reader.get_ref().len();
        if remaining > 0 {
            return Err(UbfError::TrailingBytes { remaining });
        }
        Ok(obj)
    }

    /// Reads one document from `input`, leaving anything after it unread.
    pub fn read_from<R: Read>(&self, input: R) -> Result<UbfObject> {
        self.read_root(&mut Reader::new(input))
    }

    fn read_root<R: Read>(&self, reader: &mut Reader<R>) -> Result<UbfObject> {
        match self.read_object(reader, 1) {
            Ok(obj) => {
                trace!(
                    "ubf decode: root object with {} entries from {} bytes",
                    obj.len(),
                    reader.position()
                );
                Ok(obj)
            }
            Err(err) => {
                debug!("ubf decode aborted after {} bytes: {err}", reader.position());
                Err(err)
            }
        }
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(UbfError::DepthExceeded {
                max: self.options.max_depth,
            });
        }
        Ok(())
    }

    fn read_length<R: Read>(&self, reader: &mut Reader<R>) -> Result<usize> {
        let position = reader.position();
        let length = reader.i32()?;
        match usize::try_from(length) {
            Ok(n) if n <= self.options.max_length => Ok(n),
            _ => Err(UbfError::InvalidLength {
                length: i64::from(length),
                position,
            }),
        }
    }

    fn read_tag<R: Read>(&self, reader: &mut Reader<R>) -> Result<UbfType> {
        let position = reader.position();
        let code = reader.u8()?;
        UbfType::from_code(code, position)
    }

    fn read_str<R: Read>(&self, reader: &mut Reader<R>) -> Result<String> {
        let length = self.read_length(reader)?;
        let position = reader.position();
        let bytes = reader.buf(length)?;
        String::from_utf8(bytes).map_err(|_| UbfError::InvalidUtf8 { position })
    }

    fn read_object<R: Read>(&self, reader: &mut Reader<R>, depth: usize) -> Result<UbfObject> {
        self.enter(depth)?;
        let length = self.read_length(reader)?;
        let mut obj = UbfObject::with_capacity(length.min(CAPACITY_HINT_LIMIT));
        for _ in 0..length {
            let tag = self.read_tag(reader)?;
            let key = self.read_str(reader)?;
            if obj.contains_key(&key) {
                return Err(UbfError::DuplicateKey { key });
            }
            let value = self.read_value(reader, tag, depth)?;
            obj.put(key, value);
        }
        Ok(obj)
    }

    fn read_array<R: Read>(&self, reader: &mut Reader<R>, depth: usize) -> Result<UbfArray> {
        self.enter(depth)?;
        let length = self.read_length(reader)?;
        let mut arr = UbfArray::with_capacity(length.min(CAPACITY_HINT_LIMIT));
        for _ in 0..length {
            let tag = self.read_tag(reader)?;
            arr.add(self.read_value(reader, tag, depth)?);
        }
        Ok(arr)
    }

    fn read_value<R: Read>(
        &self,
        reader: &mut Reader<R>,
        tag: UbfType,
        depth: usize,
    ) -> Result<UbfValue> {
        Ok(match tag {
            UbfType::Byte => UbfValue::Byte(reader.i8()?),
            UbfType::Short => UbfValue::Short(reader.i16()?),
            UbfType::Int => UbfValue::Int(reader.i32()?),
            UbfType::Long => UbfValue::Long(reader.i64()?),
            UbfType::Float => UbfValue::Float(reader.f32()?),
            UbfType::Double => UbfValue::Double(reader.f64()?),
            // Any non-zero byte reads as true.
            UbfType::Boolean => UbfValue::Boolean(reader.u8()? != 0),
            UbfType::String => UbfValue::String(self.read_str(reader)?),
            UbfType::Array => UbfValue::Array(self.read_array(reader, depth + 1)?),
            UbfType::Object => UbfValue::Object(self.read_object(reader, depth + 1)?),
        })
    }
}

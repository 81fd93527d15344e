//! UBF encoder: [`UbfObject`] tree to bytes.
//!
//! Layout (all multi-byte quantities big-endian):
//!
//! ```text
//! Object ::= i32(length) { u8(tag) String(key) Value }×length
//! Array  ::= i32(length) { u8(tag) Value }×length
//! String ::= i32(utf8 byte length) utf8
//! ```

use std::io::Write;

use log::{debug, trace};
use ubf_buffers::Writer;

use crate::error::{Result, UbfError};
use crate::{UbfArray, UbfObject, UbfOptions, UbfValue};

/// UBF encoder.
///
/// Holds only immutable [`UbfOptions`]; nesting depth is tracked per call,
/// so one encoder can serve any number of conversions.
#[derive(Debug, Clone, Default)]
pub struct UbfEncoder {
    options: UbfOptions,
}

impl UbfEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: UbfOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &UbfOptions {
        &self.options
    }

    /// Encodes `obj` into a fresh byte vector.
    pub fn encode(&self, obj: &UbfObject) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_to(&mut out, obj)?;
        Ok(out)
    }

    /// Encodes `obj` into `out`.
    ///
    /// On error the sink may hold a prefix of the document; callers must
    /// discard it.
    pub fn write_to<W: Write>(&self, out: W, obj: &UbfObject) -> Result<()> {
        trace!("ubf encode: root object with {} entries", obj.len());
        let mut writer = Writer::new(out);
        let result = self
            .write_object(&mut writer, obj, 1)
            .and_then(|()| writer.flush().map_err(UbfError::from));
        match result {
            Ok(()) => {
                trace!("ubf encode: wrote {} bytes", writer.position());
                Ok(())
            }
            Err(err) => {
                debug!("ubf encode aborted after {} bytes: {err}", writer.position());
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

    fn write_length<W: Write>(&self, w: &mut Writer<W>, length: usize) -> Result<()> {
        if length > self.options.max_length || length > i32::MAX as usize {
            return Err(UbfError::InvalidLength {
                length: i64::try_from(length).unwrap_or(i64::MAX),
                position: w.position(),
            });
        }
        w.i32(length as i32)?;
        Ok(())
    }

    fn write_str<W: Write>(&self, w: &mut Writer<W>, s: &str) -> Result<()> {
        let bytes = s.as_bytes();
        self.write_length(w, bytes.len())?;
        w.buf(bytes)?;
        Ok(())
    }

    fn write_object<W: Write>(&self, w: &mut Writer<W>, obj: &UbfObject, depth: usize) -> Result<()> {
        self.enter(depth)?;
        self.write_length(w, obj.len())?;
        for (key, value) in obj {
            w.u8(value.get_type().code())?;
            self.write_str(w, key)?;
            self.write_value(w, value, depth)?;
        }
        Ok(())
    }

    fn write_array<W: Write>(&self, w: &mut Writer<W>, arr: &UbfArray, depth: usize) -> Result<()> {
        self.enter(depth)?;
        self.write_length(w, arr.len())?;
        for value in arr {
            w.u8(value.get_type().code())?;
            self.write_value(w, value, depth)?;
        }
        Ok(())
    }

    /// Writes the payload of `value`; the tag is the caller's job.
    fn write_value<W: Write>(&self, w: &mut Writer<W>, value: &UbfValue, depth: usize) -> Result<()> {
        match value {
            UbfValue::Byte(v) => w.i8(*v)?,
            UbfValue::Short(v) => w.i16(*v)?,
            UbfValue::Int(v) => w.i32(*v)?,
            UbfValue::Long(v) => w.i64(*v)?,
            UbfValue::Float(v) => w.f32(*v)?,
            UbfValue::Double(v) => w.f64(*v)?,
            UbfValue::Boolean(v) => w.u8(u8::from(*v))?,
            UbfValue::String(v) => self.write_str(w, v)?,
            UbfValue::Array(v) => self.write_array(w, v, depth + 1)?,
            UbfValue::Object(v) => self.write_object(w, v, depth + 1)?,
        }
        Ok(())
    }
}

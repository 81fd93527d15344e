//! Type registry: the closed set of UBF value kinds and their wire codes.
//!
//! The code table is the persisted wire contract. Changing any entry breaks
//! every previously encoded document.

use crate::error::{Result, UbfError};

/// Kind of a [`UbfValue`](crate::UbfValue), bound to a one-byte wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UbfType {
    Byte = 0x01,
    Short = 0x02,
    Int = 0x03,
    Long = 0x04,
    Float = 0x05,
    Double = 0x06,
    Boolean = 0x07,
    String = 0x08,
    Array = 0x09,
    Object = 0x0a,
}

impl UbfType {
    /// Every kind, in wire-code order.
    pub const ALL: [UbfType; 10] = [
        UbfType::Byte,
        UbfType::Short,
        UbfType::Int,
        UbfType::Long,
        UbfType::Float,
        UbfType::Double,
        UbfType::Boolean,
        UbfType::String,
        UbfType::Array,
        UbfType::Object,
    ];

    /// Returns the wire code of this kind.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Resolves a wire code read at `position`.
    ///
    /// Returns [`UbfError::UnknownTag`] for codes outside the table.
    pub fn from_code(code: u8, position: usize) -> Result<UbfType> {
        match code {
            0x01 => Ok(UbfType::Byte),
            0x02 => Ok(UbfType::Short),
            0x03 => Ok(UbfType::Int),
            0x04 => Ok(UbfType::Long),
            0x05 => Ok(UbfType::Float),
            0x06 => Ok(UbfType::Double),
            0x07 => Ok(UbfType::Boolean),
            0x08 => Ok(UbfType::String),
            0x09 => Ok(UbfType::Array),
            0x0a => Ok(UbfType::Object),
            code => Err(UbfError::UnknownTag { code, position }),
        }
    }

    /// Human-readable kind name.
    pub const fn name(self) -> &'static str {
        match self {
            UbfType::Byte => "byte",
            UbfType::Short => "short",
            UbfType::Int => "int",
            UbfType::Long => "long",
            UbfType::Float => "float",
            UbfType::Double => "double",
            UbfType::Boolean => "boolean",
            UbfType::String => "string",
            UbfType::Array => "array",
            UbfType::Object => "object",
        }
    }

    /// Whether values of this kind are containers.
    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(self, UbfType::Array | UbfType::Object)
    }
}

impl From<UbfType> for u8 {
    fn from(t: UbfType) -> u8 {
        t.code()
    }
}

impl TryFrom<u8> for UbfType {
    type Error = UbfError;

    fn try_from(code: u8) -> Result<Self> {
        UbfType::from_code(code, 0)
    }
}

impl std::fmt::Display for UbfType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

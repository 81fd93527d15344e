//! [`UbfValue`]: a tagged container holding exactly one payload.

use crate::{UbfArray, UbfObject, UbfType};

/// A single UBF value.
///
/// The variant is the tag, so tag and payload can never disagree. Setters
/// replace the whole value; getters for any other kind return `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum UbfValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    String(String),
    Array(UbfArray),
    Object(UbfObject),
}

impl UbfValue {
    /// Returns the kind of the current payload.
    pub fn get_type(&self) -> UbfType {
        match self {
            UbfValue::Byte(_) => UbfType::Byte,
            UbfValue::Short(_) => UbfType::Short,
            UbfValue::Int(_) => UbfType::Int,
            UbfValue::Long(_) => UbfType::Long,
            UbfValue::Float(_) => UbfType::Float,
            UbfValue::Double(_) => UbfType::Double,
            UbfValue::Boolean(_) => UbfType::Boolean,
            UbfValue::String(_) => UbfType::String,
            UbfValue::Array(_) => UbfType::Array,
            UbfValue::Object(_) => UbfType::Object,
        }
    }

    pub fn set_byte(&mut self, value: i8) {
        *self = UbfValue::Byte(value);
    }

    pub fn set_short(&mut self, value: i16) {
        *self = UbfValue::Short(value);
    }

    pub fn set_int(&mut self, value: i32) {
        *self = UbfValue::Int(value);
    }

    pub fn set_long(&mut self, value: i64) {
        *self = UbfValue::Long(value);
    }

    pub fn set_float(&mut self, value: f32) {
        *self = UbfValue::Float(value);
    }

    pub fn set_double(&mut self, value: f64) {
        *self = UbfValue::Double(value);
    }

    pub fn set_boolean(&mut self, value: bool) {
        *self = UbfValue::Boolean(value);
    }

    pub fn set_string(&mut self, value: impl Into<String>) {
        *self = UbfValue::String(value.into());
    }

    pub fn set_array(&mut self, value: UbfArray) {
        *self = UbfValue::Array(value);
    }

    pub fn set_object(&mut self, value: UbfObject) {
        *self = UbfValue::Object(value);
    }

    pub fn get_byte(&self) -> Option<i8> {
        match self {
            UbfValue::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_short(&self) -> Option<i16> {
        match self {
            UbfValue::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_int(&self) -> Option<i32> {
        match self {
            UbfValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_long(&self) -> Option<i64> {
        match self {
            UbfValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_float(&self) -> Option<f32> {
        match self {
            UbfValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_double(&self) -> Option<f64> {
        match self {
            UbfValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_boolean(&self) -> Option<bool> {
        match self {
            UbfValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_string(&self) -> Option<&str> {
        match self {
            UbfValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_array(&self) -> Option<&UbfArray> {
        match self {
            UbfValue::Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_object(&self) -> Option<&UbfObject> {
        match self {
            UbfValue::Object(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for UbfValue {
                fn from(v: $ty) -> Self {
                    UbfValue::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Boolean,
    String => String,
    UbfArray => Array,
    UbfObject => Object,
}

impl From<&str> for UbfValue {
    fn from(v: &str) -> Self {
        UbfValue::String(v.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present_getters(v: &UbfValue) -> Vec<UbfType> {
        let mut out = Vec::new();
        if v.get_byte().is_some() {
            out.push(UbfType::Byte);
        }
        if v.get_short().is_some() {
            out.push(UbfType::Short);
        }
        if v.get_int().is_some() {
            out.push(UbfType::Int);
        }
        if v.get_long().is_some() {
            out.push(UbfType::Long);
        }
        if v.get_float().is_some() {
            out.push(UbfType::Float);
        }
        if v.get_double().is_some() {
            out.push(UbfType::Double);
        }
        if v.get_boolean().is_some() {
            out.push(UbfType::Boolean);
        }
        if v.get_string().is_some() {
            out.push(UbfType::String);
        }
        if v.get_array().is_some() {
            out.push(UbfType::Array);
        }
        if v.get_object().is_some() {
            out.push(UbfType::Object);
        }
        out
    }

    #[test]
    fn set_int_isolates_other_getters() {
        let mut v = UbfValue::from("text");
        v.set_int(42);
        assert_eq!(v.get_type(), UbfType::Int);
        assert_eq!(v.get_int(), Some(42));
        assert_eq!(present_getters(&v), [UbfType::Int]);
    }

    #[test]
    fn every_setter_switches_kind() {
        let mut v = UbfValue::Boolean(false);
        let setters: [(UbfType, fn(&mut UbfValue)); 10] = [
            (UbfType::Byte, |v: &mut UbfValue| v.set_byte(-1)),
            (UbfType::Short, |v: &mut UbfValue| v.set_short(300)),
            (UbfType::Int, |v: &mut UbfValue| v.set_int(70_000)),
            (UbfType::Long, |v: &mut UbfValue| v.set_long(1 << 40)),
            (UbfType::Float, |v: &mut UbfValue| v.set_float(1.5)),
            (UbfType::Double, |v: &mut UbfValue| v.set_double(2.25)),
            (UbfType::Boolean, |v: &mut UbfValue| v.set_boolean(true)),
            (UbfType::String, |v: &mut UbfValue| v.set_string("s")),
            (UbfType::Array, |v: &mut UbfValue| v.set_array(UbfArray::new())),
            (UbfType::Object, |v: &mut UbfValue| v.set_object(UbfObject::new())),
        ];
        for (kind, set) in setters {
            set(&mut v);
            assert_eq!(v.get_type(), kind);
            assert_eq!(present_getters(&v), [kind]);
        }
    }

    #[test]
    fn replacing_composite_drops_old_payload() {
        let mut inner = UbfObject::new();
        inner.put("a", 1i32);
        let mut v = UbfValue::from(inner);
        v.set_double(0.5);
        assert!(v.get_object().is_none());
        assert_eq!(v.get_double(), Some(0.5));
    }

    #[test]
    fn from_conversions_pick_matching_kind() {
        assert_eq!(UbfValue::from(1i8).get_type(), UbfType::Byte);
        assert_eq!(UbfValue::from(1i16).get_type(), UbfType::Short);
        assert_eq!(UbfValue::from(1i64).get_type(), UbfType::Long);
        assert_eq!(UbfValue::from(1f32).get_type(), UbfType::Float);
        assert_eq!(UbfValue::from(String::from("x")).get_string(), Some("x"));
    }
}

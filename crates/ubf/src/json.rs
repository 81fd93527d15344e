//! Conversion between UBF trees and `serde_json::Value`.
//!
//! Key order is preserved in both directions (`serde_json` is built with
//! `preserve_order`).

use serde_json::{Map, Number, Value as JsonValue};

use crate::error::{Result, UbfError};
use crate::{UbfArray, UbfObject, UbfValue};

/// Converts a UBF object into a JSON object.
pub fn to_json(obj: &UbfObject) -> JsonValue {
    let map: Map<String, JsonValue> = obj
        .iter()
        .map(|(k, v)| (k.clone(), value_to_json(v)))
        .collect();
    JsonValue::Object(map)
}

/// Converts a single UBF value into JSON.
///
/// All integer kinds become JSON integers. Non-finite floats have no JSON
/// representation and become `null`.
pub fn value_to_json(value: &UbfValue) -> JsonValue {
    match value {
        UbfValue::Byte(v) => JsonValue::from(*v),
        UbfValue::Short(v) => JsonValue::from(*v),
        UbfValue::Int(v) => JsonValue::from(*v),
        UbfValue::Long(v) => JsonValue::from(*v),
        UbfValue::Float(v) => float_to_json(f64::from(*v)),
        UbfValue::Double(v) => float_to_json(*v),
        UbfValue::Boolean(v) => JsonValue::Bool(*v),
        UbfValue::String(v) => JsonValue::String(v.clone()),
        UbfValue::Array(arr) => JsonValue::Array(arr.iter().map(value_to_json).collect()),
        UbfValue::Object(obj) => to_json(obj),
    }
}

fn float_to_json(v: f64) -> JsonValue {
    Number::from_f64(v).map_or(JsonValue::Null, JsonValue::Number)
}

/// Converts a JSON object into a UBF object.
///
/// Integers that fit in 32 bits become `Int`, other integers `Long`, and
/// everything else `Double`. `null` has no UBF kind and is rejected.
pub fn from_json(json: &JsonValue) -> Result<UbfObject> {
    match json {
        JsonValue::Object(map) => object_from_json(map),
        _ => Err(UbfError::ContractViolation("root must be a JSON object")),
    }
}

fn object_from_json(map: &Map<String, JsonValue>) -> Result<UbfObject> {
    let mut obj = UbfObject::with_capacity(map.len());
    for (k, v) in map {
        obj.put(k.as_str(), value_from_json(v)?);
    }
    Ok(obj)
}

/// Converts any JSON value except `null` into a UBF value.
pub fn value_from_json(json: &JsonValue) -> Result<UbfValue> {
    Ok(match json {
        JsonValue::Null => return Err(UbfError::ContractViolation("null has no UBF kind")),
        JsonValue::Bool(b) => UbfValue::Boolean(*b),
        JsonValue::Number(n) => number_from_json(n),
        JsonValue::String(s) => UbfValue::String(s.clone()),
        JsonValue::Array(items) => UbfValue::Array(
            items
                .iter()
                .map(value_from_json)
                .collect::<Result<UbfArray>>()?,
        ),
        JsonValue::Object(map) => UbfValue::Object(object_from_json(map)?),
    })
}

fn number_from_json(n: &Number) -> UbfValue {
    match n.as_i64() {
        Some(i) => match i32::try_from(i) {
            Ok(small) => UbfValue::Int(small),
            Err(_) => UbfValue::Long(i),
        },
        None => UbfValue::Double(n.as_f64().unwrap_or(f64::NAN)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_pick_narrowest_integer_kind() {
        let obj = from_json(&json!({"a": 1, "b": 5_000_000_000i64, "c": 1.5})).unwrap();
        assert_eq!(obj.get("a"), Some(&UbfValue::Int(1)));
        assert_eq!(obj.get("b"), Some(&UbfValue::Long(5_000_000_000)));
        assert_eq!(obj.get("c"), Some(&UbfValue::Double(1.5)));
    }

    #[test]
    fn null_and_non_object_roots_are_rejected() {
        assert!(matches!(
            from_json(&json!([1, 2])),
            Err(UbfError::ContractViolation(_))
        ));
        assert!(matches!(
            from_json(&json!({"x": [1, null]})),
            Err(UbfError::ContractViolation(_))
        ));
    }

    #[test]
    fn key_order_survives_both_directions() {
        let src = json!({"z": 1, "a": [true, "s"], "m": {"q": 2.5}});
        let obj = from_json(&src).unwrap();
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
        assert_eq!(to_json(&obj), src);
    }

    #[test]
    fn non_finite_floats_become_null() {
        assert_eq!(value_to_json(&UbfValue::Double(f64::NAN)), JsonValue::Null);
        assert_eq!(value_to_json(&UbfValue::Float(f32::INFINITY)), JsonValue::Null);
        assert_eq!(value_to_json(&UbfValue::Byte(-3)), json!(-3));
    }
}

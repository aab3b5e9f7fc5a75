//! Structural hashing for values that carry JSON or floating point data
//!
//! `serde_json::Value` and `f64` do not implement `Hash`, yet the options
//! types are used as set members and map keys. These helpers hash them in a
//! way that agrees with the equality used by the corresponding types.

use serde_json::{Number, Value};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Bit pattern used to compare and hash an `f64`.
///
/// NaN is canonicalized so that a value is always equal to itself.
pub(crate) fn f64_key(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

/// Compare optional floats by their canonical bit pattern
pub(crate) fn same_f64(a: Option<f64>, b: Option<f64>) -> bool {
    a.map(f64_key) == b.map(f64_key)
}

/// Hash an optional float consistently with [`same_f64`]
pub(crate) fn hash_f64<H: Hasher>(value: Option<f64>, state: &mut H) {
    value.map(f64_key).hash(state);
}

/// Hash a JSON value consistently with `Value`'s `PartialEq`
pub(crate) fn hash_json<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => 0u8.hash(state),
        Value::Bool(b) => {
            1u8.hash(state);
            b.hash(state);
        }
        Value::Number(n) => {
            2u8.hash(state);
            hash_number(n, state);
        }
        Value::String(s) => {
            3u8.hash(state);
            s.hash(state);
        }
        Value::Array(items) => {
            4u8.hash(state);
            items.len().hash(state);
            for item in items {
                hash_json(item, state);
            }
        }
        Value::Object(map) => {
            5u8.hash(state);
            map.len().hash(state);
            // Entry order is not part of object equality
            let combined = map.iter().fold(0u64, |acc, (key, value)| {
                let mut entry = DefaultHasher::new();
                key.hash(&mut entry);
                hash_json(value, &mut entry);
                acc.wrapping_add(entry.finish())
            });
            combined.hash(state);
        }
    }
}

fn hash_number<H: Hasher>(n: &Number, state: &mut H) {
    if let Some(u) = n.as_u64() {
        0u8.hash(state);
        u.hash(state);
    } else if let Some(i) = n.as_i64() {
        1u8.hash(state);
        i.hash(state);
    } else if let Some(f) = n.as_f64() {
        2u8.hash(state);
        // 0.0 and -0.0 compare equal inside a JSON number
        let f = if f == 0.0 { 0.0 } else { f };
        f.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn digest(value: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_json(value, &mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_objects_hash_equal() {
        let a = json!({"type": "object", "properties": {"city": {"type": "string"}}});
        let b = json!({"properties": {"city": {"type": "string"}}, "type": "object"});
        assert_eq!(a, b);
        assert_eq!(digest(&a), digest(&b));
    }

    #[test]
    fn test_different_values_hash_differently() {
        assert_ne!(digest(&json!([1, 2])), digest(&json!([2, 1])));
        assert_ne!(digest(&json!("1")), digest(&json!(1)));
    }

    #[test]
    fn test_f64_key() {
        assert!(same_f64(Some(f64::NAN), Some(f64::NAN)));
        assert!(!same_f64(Some(0.0), Some(-0.0)));
        assert!(same_f64(None, None));
        assert!(!same_f64(Some(0.0), None));
    }
}

//! Dotted-key walks over nested JSON objects.
//!
//! At every level a key that exists verbatim (dots included) wins over
//! descending into a nested object.

use serde_json::{Map, Value};

use super::{value_type_name, EventError};

pub(super) fn find<'a>(mut map: &'a Map<String, Value>, mut key: &str) -> Result<&'a Value, EventError> {
    loop {
        if let Some(value) = map.get(key) {
            return Ok(value);
        }
        let Some((head, tail)) = key.split_once('.') else {
            return Err(EventError::KeyNotFound);
        };
        match map.get(head) {
            Some(Value::Object(inner)) => {
                map = inner;
                key = tail;
            }
            Some(other) => {
                return Err(EventError::NotAnObject {
                    key: head.to_string(),
                    found: value_type_name(other),
                })
            }
            None => return Err(EventError::KeyNotFound),
        }
    }
}

/// Inserts `value` at `key`, creating missing intermediate objects.
pub(super) fn put(
    mut map: &mut Map<String, Value>,
    mut key: &str,
    value: Value,
) -> Result<Option<Value>, EventError> {
    loop {
        if map.contains_key(key) {
            return Ok(map.insert(key.to_string(), value));
        }
        let Some((head, tail)) = key.split_once('.') else {
            return Ok(map.insert(key.to_string(), value));
        };
        match map
            .entry(head.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
        {
            Value::Object(inner) => {
                map = inner;
                key = tail;
            }
            other => {
                return Err(EventError::NotAnObject {
                    key: head.to_string(),
                    found: value_type_name(other),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn find_prefers_literal_dotted_key() {
        let m = obj(json!({ "a.b": 1, "a": { "b": 2 } }));
        assert_eq!(find(&m, "a.b").unwrap(), &json!(1));
    }

    #[test]
    fn find_through_scalar_is_not_missing() {
        let m = obj(json!({ "a": "text" }));
        assert_eq!(
            find(&m, "a.b").unwrap_err(),
            EventError::NotAnObject {
                key: "a".into(),
                found: "string"
            }
        );
    }

    #[test]
    fn put_replaces_existing_and_returns_old() {
        let mut m = obj(json!({ "a": { "b": 1 } }));
        let old = put(&mut m, "a.b", json!(2)).unwrap();
        assert_eq!(old, Some(json!(1)));
        assert_eq!(Value::Object(m), json!({ "a": { "b": 2 } }));
    }

    #[test]
    fn put_through_array_fails_without_side_effects() {
        let mut m = obj(json!({ "a": [1, 2] }));
        let err = put(&mut m, "a.b.c", json!(true)).unwrap_err();
        assert!(matches!(err, EventError::NotAnObject { found: "array", .. }));
        assert_eq!(Value::Object(m), json!({ "a": [1, 2] }));
    }
}

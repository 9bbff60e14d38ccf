//! Recursive coercion over value trees.
//!
//! The walker dispatches on the shape of each node, first match wins:
//!
//! 1. string: the iteratee is applied and its result returned
//! 2. plain object: rebuilt with the same keys in the same order
//! 3. array: rebuilt with the same length and order
//! 4. anything else (numbers, booleans, null, dates, records): returned as-is
//!
//! Dates and records are opaque. Their contents are never visited, even when a
//! record carries string fields that look numeric.
//!
//! ```rust
//! use numeric_coerce::{value, walk};
//!
//! let coerced = walk(value!({ "a": "1", "b": ["1", { "c": "1" }] }));
//! assert_eq!(coerced, value!({ "a": 1, "b": [1, { "c": 1 }] }));
//! ```
//!
//! `Value` trees are owned, so they cannot contain cycles; recursion depth is
//! bounded by the depth of the input.

use crate::{to_float, Value};

/// Coerces every numeric string in `value` using [`to_float`].
#[must_use]
pub fn walk(value: Value) -> Value {
    walk_with(value, &mut to_float)
}

/// Like [`walk`], but leaves `value` intact and returns a coerced copy.
///
/// # Examples
///
/// ```rust
/// use numeric_coerce::{value, walk_ref};
///
/// let original = value!(["1", "x"]);
/// let coerced = walk_ref(&original);
///
/// assert_eq!(original, value!(["1", "x"]));
/// assert_eq!(coerced, value!([1, "x"]));
/// ```
#[must_use]
pub fn walk_ref(value: &Value) -> Value {
    walk(value.clone())
}

/// Applies `iteratee` to every string leaf of `value`, rebuilding arrays and
/// plain objects around the results.
///
/// The iteratee sees string leaves only and may return any value.
///
/// # Examples
///
/// ```rust
/// use numeric_coerce::{to_integer, value, walk_with, Value};
///
/// let ints = walk_with(value!(["1", "1.5"]), &mut to_integer);
/// assert_eq!(ints, value!([1, "1.5"]));
///
/// let mut seen = 0;
/// let upper = walk_with(value!({ "a": "x", "b": [true, "y"] }), &mut |leaf: Value| {
///     seen += 1;
///     Value::from(leaf.as_str().unwrap_or_default().to_uppercase())
/// });
/// assert_eq!(seen, 2);
/// assert_eq!(upper, value!({ "a": "X", "b": [true, "Y"] }));
/// ```
pub fn walk_with<F>(value: Value, iteratee: &mut F) -> Value
where
    F: FnMut(Value) -> Value,
{
    match value {
        Value::String(_) => iteratee(value),
        Value::Object(map) => Value::Object(map.map_values(|v| walk_with(v, iteratee))),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| walk_with(item, iteratee))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{value, ValueMap};
    use chrono::Utc;

    #[test]
    fn test_string_base_case() {
        assert_eq!(walk(Value::from("1")), Value::from(1));
        assert_eq!(walk(Value::from("  1.01")), Value::from(1.01));
        assert_eq!(walk(Value::from("-1.01  ")), Value::from(-1.01));
        assert_eq!(walk(Value::from("- 1")), Value::from("- 1"));
    }

    #[test]
    fn test_record_fields_not_visited() {
        let mut fields = ValueMap::new();
        fields.insert("message".to_string(), Value::from("1"));
        let error = Value::record("Error", fields);

        assert_eq!(walk(error.clone()), error);
    }

    #[test]
    fn test_iteratee_only_sees_strings() {
        let now = Utc::now();
        let input = Value::Array(vec![
            Value::from(1),
            Value::Null,
            Value::Bool(false),
            Value::Date(now),
            Value::from("s"),
        ]);

        let mut calls = Vec::new();
        let _ = walk_with(input, &mut |leaf: Value| {
            calls.push(leaf.clone());
            leaf
        });
        assert_eq!(calls, vec![Value::from("s")]);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(walk(value!([])), value!([]));
        assert_eq!(walk(value!({})), value!({}));
    }
}

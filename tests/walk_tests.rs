use chrono::Utc;
use numeric_coerce::{
    to_integer, to_value, value, walk, walk_ref, walk_with, Classifier, Coercer, Value, ValueMap,
};
use pretty_assertions::assert_eq;

#[test]
fn test_coerces_numeric_string() {
    assert_eq!(walk(value!("1")), Value::from(1));
    assert_eq!(walk(value!("  1.01")), Value::from(1.01));
    assert_eq!(walk(value!("-1.01  ")), Value::from(-1.01));
}

#[test]
fn test_does_not_coerce_non_numeric_string() {
    assert_eq!(walk(value!("a")), value!("a"));
    assert_eq!(walk(value!("1. 01")), value!("1. 01"));
    assert_eq!(walk(value!("- 1")), value!("- 1"));
}

#[test]
fn test_does_not_coerce_opaque_values() {
    let regexp = Value::record("RegExp", ValueMap::new());
    let error = Value::record("Error", ValueMap::new());
    assert_eq!(walk(regexp.clone()), regexp);
    assert_eq!(walk(error.clone()), error);
}

#[test]
fn test_simple_object() {
    assert_eq!(walk(value!({ "a": "1", "b": "2" })), value!({ "a": 1, "b": 2 }));
}

#[test]
fn test_only_numeric_strings_in_object() {
    let mut fields = ValueMap::new();
    fields.insert("source".to_string(), value!("abc"));
    let regexp = Value::record("RegExp", fields);

    let mut input = ValueMap::new();
    input.insert("a".to_string(), value!("1"));
    input.insert("b".to_string(), value!("2a"));
    input.insert("c".to_string(), regexp.clone());
    input.insert("d".to_string(), value!("10"));

    let mut expected = ValueMap::new();
    expected.insert("a".to_string(), value!(1));
    expected.insert("b".to_string(), value!("2a"));
    expected.insert("c".to_string(), regexp);
    expected.insert("d".to_string(), value!(10));

    assert_eq!(walk(Value::Object(input)), Value::Object(expected));
}

#[test]
fn test_nested_object() {
    let actual = walk(value!({ "a": "1", "b": { "c": "1", "d": { "e": "1" } } }));
    assert_eq!(actual, value!({ "a": 1, "b": { "c": 1, "d": { "e": 1 } } }));
}

#[test]
fn test_simple_array_with_opaque_members() {
    let date = Value::Date(Utc::now());
    let regexp = Value::record("RegExp", ValueMap::new());
    let error = Value::record("Error", ValueMap::new());

    let input = Value::Array(vec![
        value!("1"),
        value!("2"),
        value!(true),
        value!("3a"),
        date.clone(),
        regexp.clone(),
        error.clone(),
    ]);
    let expected = Value::Array(vec![
        value!(1),
        value!(2),
        value!(true),
        value!("3a"),
        date,
        regexp,
        error,
    ]);

    assert_eq!(walk(input), expected);
}

#[test]
fn test_deeply_nested_array() {
    assert_eq!(walk(value!(["1", ["1", ["1"]]])), value!([1, [1, [1]]]));
}

#[test]
fn test_deeply_nested_object_with_arrays() {
    let actual = walk(value!({
        "a": "1",
        "b": ["1", ["1"], { "g": "1" }],
        "c": { "d": ["1"], "e": { "f": "1" } }
    }));
    let expected = value!({
        "a": 1,
        "b": [1, [1], { "g": 1 }],
        "c": { "d": [1], "e": { "f": 1 } }
    });
    assert_eq!(actual, expected);
}

#[test]
fn test_deeply_nested_array_with_objects() {
    let actual = walk(value!(["1", ["1", ["1"], { "a": "1" }], { "c": { "d": ["1"], "e": { "f": "1" } } }]));
    let expected = value!([1, [1, [1], { "a": 1 }], { "c": { "d": [1], "e": { "f": 1 } } }]);
    assert_eq!(actual, expected);
}

#[test]
fn test_arrays_and_objects_stay_distinct() {
    let actual = walk(value!(["1", { "a": "1" }]));
    assert_eq!(actual, value!([1, { "a": 1 }]));
    assert!(actual.is_array());
    assert!(actual.as_array().map(|a| a[1].is_plain_object()).unwrap_or(false));
}

#[test]
fn test_key_order_preserved() {
    let actual = walk(value!({ "z": "1", "a": "2", "m": "x" }));
    let keys: Vec<_> = actual
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_record_inside_object_untouched() {
    let mut fields = ValueMap::new();
    fields.insert("code".to_string(), value!("500"));
    let error = Value::record("Error", fields);

    let mut input = ValueMap::new();
    input.insert("status".to_string(), value!("500"));
    input.insert("cause".to_string(), error.clone());

    let actual = walk(Value::Object(input));
    let object = actual.as_object().cloned().unwrap_or_default();
    assert_eq!(object.get("status"), Some(&value!(500)));
    assert_eq!(object.get("cause"), Some(&error));
}

#[test]
fn test_custom_iteratee() {
    let actual = walk_with(value!({ "a": "1.5", "b": ["2"] }), &mut to_integer);
    assert_eq!(actual, value!({ "a": "1.5", "b": [2] }));

    let coercer = Coercer::new(Classifier::UnsignedDecimal).with_fallback(Value::Null);
    assert_eq!(
        coercer.walk(value!(["1.5", "-1.5", "x", true])),
        value!([1.5, null, null, true])
    );
}

#[test]
fn test_walk_ref_leaves_input() {
    let input = value!({ "a": ["1"] });
    let output = walk_ref(&input);
    assert_eq!(input, value!({ "a": ["1"] }));
    assert_eq!(output, value!({ "a": [1] }));
}

#[test]
fn test_walk_json_document() {
    let json = serde_json::json!({
        "user": { "id": "42", "name": "Ada" },
        "scores": ["10", "9.5", "n/a"],
        "active": true
    });
    let actual = walk(to_value(&json).unwrap());

    // serde_json's default map sorts keys
    let expected = value!({
        "active": true,
        "scores": [10, 9.5, "n/a"],
        "user": { "id": 42, "name": "Ada" }
    });
    assert_eq!(actual, expected);
}

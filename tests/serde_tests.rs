use numeric_coerce::{coerce_into, from_value, to_value, value, walk, Error, Value};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Row {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    id: u64,
    rows: Vec<Row>,
    coupon: Option<String>,
}

#[test]
fn test_csv_like_rows_into_structs() {
    let raw: Vec<BTreeMap<&str, &str>> = vec![
        [("sku", "W-1"), ("price", "9.99"), ("quantity", "2")]
            .into_iter()
            .collect(),
        [("sku", "G-2"), ("price", " 14 "), ("quantity", "01")]
            .into_iter()
            .collect(),
    ];

    let rows: Vec<Row> = coerce_into(&raw).unwrap();
    assert_eq!(
        rows,
        vec![
            Row { sku: "W-1".to_string(), price: 9.99, quantity: 2 },
            Row { sku: "G-2".to_string(), price: 14.0, quantity: 1 },
        ]
    );
}

#[test]
fn test_numeric_sku_becomes_number() {
    // A numeric-looking identifier is coerced too, so it no longer fits a
    // String field.
    let raw = value!({ "sku": "123", "price": "1", "quantity": "1" });
    let result: Result<Row, Error> = from_value(walk(raw));
    assert!(result.is_err());
}

#[test]
fn test_nested_typed_roundtrip() {
    let order = Order {
        id: 7,
        rows: vec![Row { sku: "A".to_string(), price: 1.5, quantity: 3 }],
        coupon: None,
    };

    let as_value = to_value(&order).unwrap();
    let back: Order = from_value(as_value).unwrap();
    assert_eq!(back, order);
}

#[test]
fn test_value_serializes_through_serde_json() {
    let coerced = walk(value!({ "a": "1", "b": ["2.5", "x"] }));
    let json = serde_json::to_string(&coerced).unwrap();
    assert_eq!(json, r#"{"a":1,"b":[2.5,"x"]}"#);
}

#[test]
fn test_value_deserializes_from_json() {
    let parsed: Value = serde_json::from_str(r#"{"n":"3","list":["4",null,true]}"#).unwrap();
    assert_eq!(walk(parsed), value!({ "n": 3, "list": [4, null, true] }));
}

#[test]
fn test_opaque_values_kept_by_coerce_into() {
    use chrono::{TimeZone, Utc};
    use numeric_coerce::ValueMap;

    let mut fields = ValueMap::new();
    fields.insert("code".to_string(), Value::from("500"));
    let error = Value::record("Error", fields);
    let date = Value::Date(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap());

    let mut input = BTreeMap::new();
    input.insert("count", Value::from("12"));
    input.insert("error", error.clone());
    input.insert("when", date.clone());

    let coerced: Value = coerce_into(&input).unwrap();
    assert_eq!(
        coerced,
        Value::from(ValueMap::from_iter([
            ("count".to_string(), Value::from(12)),
            ("error".to_string(), error),
            ("when".to_string(), date),
        ]))
    );
}

#[test]
fn test_opaque_values_in_json() {
    use chrono::{TimeZone, Utc};
    use numeric_coerce::ValueMap;

    let mut fields = ValueMap::new();
    fields.insert("code".to_string(), Value::from("500"));
    let json = serde_json::to_string(&Value::record("Error", fields)).unwrap();
    assert_eq!(json, r#"{"kind":"Error","fields":{"code":"500"}}"#);

    let date = Value::Date(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap());
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, r#""2016-01-01T00:00:00+00:00""#);
}

//! Dynamic value representation.
//!
//! [`Value`] is the universal input and output type of the coercion engine. It
//! distinguishes three kinds of composite data:
//!
//! - [`Value::Array`]: an ordered sequence, always recursed into
//! - [`Value::Object`]: a *plain* key-value mapping, always recursed into
//! - [`Value::Date`] and [`Value::Record`]: opaque objects, never recursed into
//!
//! A [`Value::Record`] stands for any keyed value that is not a plain mapping:
//! an error, a regular-expression literal, an instance of some named type. Its
//! fields are carried along untouched.
//!
//! ## Creating Values
//!
//! ```rust
//! use numeric_coerce::{value, Value};
//!
//! let null = Value::Null;
//! let number = Value::from(42);
//! let text = Value::from("42");
//!
//! let obj = value!({
//!     "name": "Alice",
//!     "age": "30"
//! });
//! assert!(obj.is_plain_object());
//! ```
//!
//! ## Numbers
//!
//! ```rust
//! use numeric_coerce::Number;
//!
//! // Equality is numeric, whatever the representation
//! assert_eq!(Number::Integer(1), Number::Float(1.0));
//! assert_eq!(Number::from_f64(1000.0), Number::Integer(1000));
//! ```

use crate::ValueMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Largest integer an `f64` represents exactly, together with all smaller ones.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

// Names under which dates and records cross the serde boundary, so that
// `ValueSerializer` and `ValueDeserializer` can rebuild the opaque variants.
pub(crate) const DATE_TOKEN: &str = "$numeric_coerce::private::Date";
pub(crate) const RECORD_TOKEN: &str = "$numeric_coerce::private::Record";

/// A dynamically-typed value.
///
/// # Examples
///
/// ```rust
/// use numeric_coerce::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(ValueMap),
    Date(DateTime<Utc>),
    Record {
        kind: String,
        fields: ValueMap,
    },
}

/// A numeric value, either an exact integer or a float.
///
/// Two numbers are equal when their numeric values are equal, so
/// `Integer(1) == Float(1.0)`.
///
/// # Examples
///
/// ```rust
/// use numeric_coerce::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Wraps an `f64`, choosing [`Number::Integer`] when the value is integral
    /// and inside the safe integer range.
    ///
    /// Negative zero, NaN, infinities and large magnitudes stay [`Number::Float`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_coerce::Number;
    ///
    /// assert!(Number::from_f64(666.0).is_integer());
    /// assert!(Number::from_f64(1.01).is_float());
    /// assert!(Number::from_f64(1e20).is_float());
    /// ```
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        let integral = value.fract() == 0.0
            && value.abs() <= MAX_SAFE_INTEGER as f64
            && !(value == 0.0 && value.is_sign_negative());
        if integral {
            Number::Integer(value as i64)
        } else {
            Number::Float(value)
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it has no fractional part and fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_coerce::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                // i64::MAX as f64 rounds up to 2^63, which does not fit
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Integer(i), Number::Float(f)) | (Number::Float(f), Number::Integer(i)) => {
                Number::Float(*f).as_i64() == Some(*i)
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    /// Builds a [`Value::Record`] of the given kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_coerce::{Value, ValueMap};
    ///
    /// let mut fields = ValueMap::new();
    /// fields.insert("message".to_string(), Value::from("404"));
    /// let err = Value::record("Error", fields);
    ///
    /// assert!(err.is_record());
    /// assert!(!err.is_plain_object());
    /// ```
    #[must_use]
    pub fn record(kind: impl Into<String>, fields: ValueMap) -> Self {
        Value::Record {
            kind: kind.into(),
            fields,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the value is a plain key-value mapping.
    ///
    /// Arrays, dates and records are never plain, even though records carry
    /// named fields.
    #[inline]
    #[must_use]
    pub const fn is_plain_object(&self) -> bool {
        self.is_object()
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record { .. })
    }

    /// Returns `true` for objects the walker must leave alone: dates and records.
    #[inline]
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        matches!(self, Value::Date(_) | Value::Record { .. })
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_coerce::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the value is a record, returns its kind and fields.
    #[inline]
    #[must_use]
    pub fn as_record(&self) -> Option<(&str, &ValueMap)> {
        match self {
            Value::Record { kind, fields } => Some((kind, fields)),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Date(_) => "date",
            Value::Record { .. } => "record",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Value::Object(obj) => {
                write!(
                    f,
                    "{{{}}}",
                    obj.iter()
                        .map(|(k, v)| format!("{}:{}", k, v))
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Value::Date(dt) => write!(f, "{}", dt.to_rfc3339()),
            Value::Record { kind, .. } => write!(f, "[{}]", kind),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => Fields(obj).serialize(serializer),
            Value::Record { kind, fields } => {
                use serde::ser::SerializeStruct;
                let mut record = serializer.serialize_struct(RECORD_TOKEN, 2)?;
                record.serialize_field("kind", kind)?;
                record.serialize_field("fields", &Fields(fields))?;
                record.end()
            }
            Value::Date(dt) => serializer.serialize_newtype_struct(DATE_TOKEN, &dt.to_rfc3339()),
        }
    }
}

struct Fields<'a>(&'a ValueMap);

impl Serialize for Fields<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in self.0.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Parses the RFC 3339 form a [`Value::Date`] is written as.
pub(crate) fn parse_date(s: &str) -> Option<Value> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| Value::Date(dt.with_timezone(&Utc)))
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Number(Number::Integer(value as i64)))
                } else {
                    Ok(Value::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let first = match map.next_key::<String>()? {
                    Some(key) => key,
                    None => return Ok(Value::Object(ValueMap::new())),
                };

                if first == DATE_TOKEN {
                    let text: String = map.next_value()?;
                    return parse_date(&text).ok_or_else(|| {
                        de::Error::invalid_value(de::Unexpected::Str(&text), &"an RFC 3339 date")
                    });
                }

                let kind = if first == RECORD_TOKEN {
                    Some(map.next_value::<String>()?)
                } else {
                    None
                };

                let mut values = ValueMap::new();
                if kind.is_none() {
                    values.insert(first, map.next_value()?);
                }
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }

                Ok(match kind {
                    Some(kind) => Value::Record {
                        kind,
                        fields: values,
                    },
                    None => Value::Object(values),
                })
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match &value {
            Value::Number(n) => n.as_i64().ok_or_else(|| {
                crate::Error::custom(format!("cannot convert number {} to i64", n))
            }),
            other => Err(crate::Error::type_mismatch("integer", other.type_name())),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(crate::Error::type_mismatch("number", other.type_name())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(crate::Error::type_mismatch("boolean", other.type_name())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("string", other.type_name())),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Object(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_equality_is_numeric() {
        assert_eq!(Number::Integer(1), Number::Float(1.0));
        assert_ne!(Number::Integer(1), Number::Float(1.5));
        assert_eq!(
            Value::Number(Number::Integer(-1000)),
            Value::Number(Number::Float(-1000.0))
        );
    }

    #[test]
    fn test_mixed_equality_is_exact_beyond_safe_range() {
        let two_pow_53 = 1i64 << 53;
        assert_ne!(Number::Integer(two_pow_53 + 1), Number::Float(two_pow_53 as f64));
        assert_ne!(Number::Float(two_pow_53 as f64), Number::Integer(two_pow_53 + 1));
        assert_eq!(Number::Integer(two_pow_53), Number::Float(two_pow_53 as f64));
        assert_ne!(Number::Integer(0), Number::Float(f64::NAN));
    }

    #[test]
    fn test_as_i64_rejects_two_pow_63() {
        assert_eq!(Number::Float(9_223_372_036_854_775_808.0).as_i64(), None);
        assert_eq!(Number::Float(i64::MIN as f64).as_i64(), Some(i64::MIN));
    }

    #[test]
    fn test_from_f64_normalization() {
        assert!(matches!(Number::from_f64(666.0), Number::Integer(666)));
        assert!(matches!(Number::from_f64(-1.01), Number::Float(_)));
        assert!(matches!(Number::from_f64(-0.0), Number::Float(_)));
        assert!(matches!(
            Number::from_f64(MAX_SAFE_INTEGER as f64),
            Number::Integer(MAX_SAFE_INTEGER)
        ));
        assert!(matches!(Number::from_f64(1e20), Number::Float(_)));
    }

    #[test]
    fn test_tryfrom_i64() {
        let value = Value::Number(Number::Float(42.0));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        assert!(i64::try_from(Value::Number(Number::Float(4.2))).is_err());
        assert!(i64::try_from(Value::String("42".to_string())).is_err());
    }

    #[test]
    fn test_tryfrom_others() {
        assert_eq!(f64::try_from(Value::from(3.5)).unwrap(), 3.5);
        assert!(bool::try_from(Value::from(true)).unwrap());
        assert_eq!(String::try_from(Value::from("x")).unwrap(), "x");
        assert!(String::try_from(Value::from(1)).is_err());
    }

    #[test]
    fn test_opaque_classification() {
        let date = Value::Date(Utc::now());
        let record = Value::record("RegExp", ValueMap::new());

        assert!(date.is_opaque());
        assert!(record.is_opaque());
        assert!(!record.is_plain_object());
        assert!(!Value::Array(vec![]).is_plain_object());
        assert!(Value::Object(ValueMap::new()).is_plain_object());
    }

    #[test]
    fn test_display() {
        let mut map = ValueMap::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::Array(vec![Value::from("x"), Value::Null]));
        assert_eq!(Value::Object(map).to_string(), "{a:1,b:[x,null]}");
        assert_eq!(Value::record("Error", ValueMap::new()).to_string(), "[Error]");
    }
}

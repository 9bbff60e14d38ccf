//! Deserialization of typed Rust values out of [`Value`] trees.
//!
//! Combined with the walker this turns string-only data (query strings, CSV
//! rows, environment maps) into typed structs:
//!
//! ```rust
//! use numeric_coerce::coerce_into;
//! use serde::Deserialize;
//! use std::collections::HashMap;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Page { page: u32, size: u32, q: String }
//!
//! let mut raw = HashMap::new();
//! raw.insert("page", "3");
//! raw.insert("size", " 25 ");
//! raw.insert("q", "rust");
//!
//! let page: Page = coerce_into(&raw).unwrap();
//! assert_eq!(page, Page { page: 3, size: 25, q: "rust".to_string() });
//! ```

use crate::value::{DATE_TOKEN, RECORD_TOKEN};
use crate::{Error, Number, Result, Value, ValueMap};
use serde::de::{self, DeserializeOwned, Deserializer, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// Deserializer reading from an owned [`Value`].
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    #[must_use]
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> ValueDeserializer {
        ValueDeserializer::new(self)
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
            Value::Number(Number::Float(f)) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            // Self-describing consumers (`Value` itself) get a marker entry
            // first so they can rebuild the opaque variant.
            Value::Record { kind, fields } => visitor.visit_map(MapDeserializer::with_marker(
                RECORD_TOKEN,
                Value::String(kind),
                fields,
            )),
            Value::Date(dt) => visitor.visit_map(MapDeserializer::with_marker(
                DATE_TOKEN,
                Value::String(dt.to_rfc3339()),
                ValueMap::new(),
            )),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Date(dt) => visitor.visit_string(dt.to_rfc3339()),
            value => ValueDeserializer::new(value).deserialize_any(visitor),
        }
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Record { fields, .. } => visitor.visit_map(MapDeserializer::new(fields)),
            value => ValueDeserializer::new(value).deserialize_any(visitor),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            value => visitor.visit_some(ValueDeserializer::new(value)),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(variant) => visitor.visit_enum(EnumDeserializer::new(variant, None)),
            Value::Object(obj) if obj.len() == 1 => {
                let mut entries = obj.into_iter();
                match entries.next() {
                    Some((variant, value)) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, Some(value)))
                    }
                    None => Err(Error::custom("empty enum object")),
                }
            }
            other => Err(Error::type_mismatch(
                "string or single-key object",
                other.type_name(),
            )),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    marker: Option<(&'static str, Value)>,
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: ValueMap) -> Self {
        MapDeserializer {
            marker: None,
            iter: map.into_iter(),
            value: None,
        }
    }

    fn with_marker(key: &'static str, value: Value, map: ValueMap) -> Self {
        MapDeserializer {
            marker: Some((key, value)),
            ..MapDeserializer::new(map)
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        let entry = match self.marker.take() {
            Some((key, value)) => Some((key.to_string(), value)),
            None => self.iter.next(),
        };
        match entry {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        let marker = usize::from(self.marker.is_some());
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper + marker),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl EnumDeserializer {
    fn new(variant: String, value: Option<Value>) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(Value::Null) | None => Ok(()),
            Some(other) => Err(Error::type_mismatch("unit variant", other.type_name())),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::type_mismatch("newtype variant", "unit variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Array(arr)) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Some(other) => Err(Error::type_mismatch("tuple variant", other.type_name())),
            None => Err(Error::type_mismatch("tuple variant", "unit variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Object(obj)) => visitor.visit_map(MapDeserializer::new(obj)),
            Some(other) => Err(Error::type_mismatch("struct variant", other.type_name())),
            None => Err(Error::type_mismatch("struct variant", "unit variant")),
        }
    }
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// # Examples
///
/// ```rust
/// use numeric_coerce::{from_value, value};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(value!({ "x": 1, "y": 2 })).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the value's shape does not fit `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Serializes `input`, coerces every numeric string in it and deserializes
/// the result as `T`.
///
/// Dates and records in `input` stay opaque: their contents are not coerced.
///
/// # Errors
///
/// Returns an error if `input` cannot be represented as a [`Value`], or if the
/// coerced tree does not fit `T` (for example a field that stayed a string
/// because it was not numeric).
pub fn coerce_into<I, T>(input: &I) -> Result<T>
where
    I: ?Sized + serde::Serialize,
    T: DeserializeOwned,
{
    let value = crate::to_value(input)?;
    from_value(crate::walk(value))
}

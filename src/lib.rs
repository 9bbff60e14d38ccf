//! # numeric_coerce
//!
//! Recognize strings that are syntactically numeric and turn them into
//! numbers, leaving every other value alone. Arrays and plain objects are
//! walked recursively; dates and records are treated as opaque.
//!
//! ## Why?
//!
//! Query strings, form posts, CSV cells and environment variables arrive as
//! text. This crate converts the numeric-looking parts of such data without a
//! schema, using a small and strict notion of "numeric":
//!
//! - optional surrounding whitespace (`" 42\r\n"` is fine)
//! - optional leading `-` (signed classifiers only)
//! - ASCII digits, optionally followed by `.` and more digits
//!
//! Everything else stays a string: `"1,000"`, `"1."`, `"0x15"`, `"1e15"`,
//! `"1 0"`, `""`.
//!
//! ## Quick Start
//!
//! ```rust
//! use numeric_coerce::{to_integer, to_float, value, walk, Value};
//!
//! assert_eq!(to_integer(Value::from("0666")), Value::from(666));
//! assert_eq!(to_float(Value::from("1e15")), Value::from("1e15"));
//!
//! let coerced = walk(value!({
//!     "id": "17",
//!     "price": " 9.99 ",
//!     "tags": ["1", "new"],
//!     "zip": "02134"
//! }));
//!
//! assert_eq!(coerced, value!({
//!     "id": 17,
//!     "price": 9.99,
//!     "tags": [1, "new"],
//!     "zip": 2134
//! }));
//! ```
//!
//! ## Custom coercers
//!
//! ```rust
//! use numeric_coerce::{Classifier, Coercer, Value};
//!
//! let coercer = Coercer::new(Classifier::UnsignedInteger).with_fallback(Value::Null);
//! assert_eq!(coercer.coerce(Value::from("12")), Value::from(12));
//! assert_eq!(coercer.coerce(Value::from("-12")), Value::Null);
//! ```
//!
//! ## Typed output
//!
//! ```rust
//! use numeric_coerce::coerce_into;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Dims { width: u32, height: u32 }
//!
//! let dims: Dims = coerce_into(&[("width", "640"), ("height", "480")]
//!     .into_iter()
//!     .collect::<std::collections::BTreeMap<_, _>>())
//!     .unwrap();
//! assert_eq!((dims.width, dims.height), (640, 480));
//! ```
//!
//! ## Guarantees
//!
//! - Coercion never fails and never panics; rejection is a pass-through
//! - Object keys and their order, array length and order are preserved
//! - Walking an already-coerced tree returns it unchanged
//! - No `unsafe` code

pub mod check;
pub mod coerce;
pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod ser;
pub mod value;
pub mod walk;

pub use check::{patterns, Classifier, NumericCheck};
pub use coerce::{
    coerce, coerce_str, make_coercer, parse_number, to_float, to_integer, to_positive_float,
    to_positive_integer, Coercer,
};
pub use de::{coerce_into, from_value, ValueDeserializer};
pub use error::{Error, Result};
pub use map::ValueMap;
pub use ser::{to_value, ValueSerializer};
pub use value::{Number, Value, MAX_SAFE_INTEGER};
pub use walk::{walk, walk_ref, walk_with};

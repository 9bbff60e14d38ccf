//! Leaf-level coercion of numeric strings.
//!
//! [`coerce`] is the primitive: given a [`NumericCheck`], a value and an
//! optional fallback, it returns
//!
//! - the parsed [`Number`] when the value is a string the check accepts,
//! - the fallback when one was supplied and the string was rejected,
//! - the value itself otherwise.
//!
//! Nothing here returns an error. A string that merely looks wrong is not a
//! failure, it is passed through.
//!
//! ```rust
//! use numeric_coerce::{to_float, to_positive_integer, Value};
//!
//! assert_eq!(to_float(Value::from(" -1.01 ")), Value::from(-1.01));
//! assert_eq!(to_float(Value::from("1,000")), Value::from("1,000"));
//! assert_eq!(to_positive_integer(Value::from("-1")), Value::from("-1"));
//! ```

use crate::{Classifier, NumericCheck, Number, Value};
use std::fmt;

/// Parses the trimmed core of an already-classified string.
///
/// Returns `None` when the numeric parser disagrees with the classifier or
/// yields NaN. Digit runs too long for an `f64` become an infinite
/// [`Number::Float`].
///
/// # Examples
///
/// ```rust
/// use numeric_coerce::{parse_number, Number};
///
/// assert_eq!(parse_number(" 0666 "), Some(Number::Integer(666)));
/// assert_eq!(parse_number("abc"), None);
/// assert_eq!(parse_number(&"9".repeat(400)), Some(Number::Float(f64::INFINITY)));
/// ```
#[must_use]
pub fn parse_number(s: &str) -> Option<Number> {
    match s.trim().parse::<f64>() {
        Ok(n) if !n.is_nan() => Some(Number::from_f64(n)),
        Ok(_) | Err(_) => None,
    }
}

/// Classifies and parses a borrowed string.
///
/// # Examples
///
/// ```rust
/// use numeric_coerce::{coerce_str, Classifier, Number};
///
/// assert_eq!(coerce_str(&Classifier::Integer, "42"), Some(Number::Integer(42)));
/// assert_eq!(coerce_str(&Classifier::Integer, "4.2"), None);
/// ```
#[must_use]
pub fn coerce_str<C>(check: &C, s: &str) -> Option<Number>
where
    C: NumericCheck + ?Sized,
{
    if !check.test(s) {
        return None;
    }
    let parsed = parse_number(s);
    if parsed.is_none() {
        log::debug!("numeric check accepted {:?} but it did not parse", s);
    }
    parsed
}

/// Converts `value` to a number if it is a string accepted by `check`.
///
/// Non-string values are returned unchanged, whatever the fallback. If the
/// string is rejected, the `fallback` is returned when present (including
/// falsy fallbacks such as `Value::Null` or `0`), otherwise the original value.
///
/// # Examples
///
/// ```rust
/// use numeric_coerce::{coerce, Classifier, Value};
///
/// let check = Classifier::Decimal;
/// assert_eq!(coerce(&check, Value::from("1.5"), None), Value::from(1.5));
/// assert_eq!(coerce(&check, Value::from("n/a"), None), Value::from("n/a"));
/// assert_eq!(coerce(&check, Value::from("n/a"), Some(Value::Null)), Value::Null);
/// assert_eq!(coerce(&check, Value::Bool(true), Some(Value::Null)), Value::Bool(true));
/// ```
#[must_use]
pub fn coerce<C>(check: &C, value: Value, fallback: Option<Value>) -> Value
where
    C: NumericCheck + ?Sized,
{
    let Value::String(s) = &value else {
        return value;
    };
    match coerce_str(check, s) {
        Some(number) => {
            log::trace!("coerced {:?} to {}", s, number);
            Value::Number(number)
        }
        None => fallback.unwrap_or(value),
    }
}

/// Coerces a signed integer string, e.g. `"-12"`.
#[must_use]
pub fn to_integer(value: Value) -> Value {
    coerce(&Classifier::Integer, value, None)
}

/// Coerces an unsigned integer string, e.g. `"12"`.
#[must_use]
pub fn to_positive_integer(value: Value) -> Value {
    coerce(&Classifier::UnsignedInteger, value, None)
}

/// Coerces a signed decimal string, e.g. `"-1.5"` or `"3"`.
#[must_use]
pub fn to_float(value: Value) -> Value {
    coerce(&Classifier::Decimal, value, None)
}

/// Coerces an unsigned decimal string, e.g. `"1.5"` or `"3"`.
#[must_use]
pub fn to_positive_float(value: Value) -> Value {
    coerce(&Classifier::UnsignedDecimal, value, None)
}

/// A reusable coercion function built from a check and an optional fallback.
///
/// # Examples
///
/// ```rust
/// use numeric_coerce::{Classifier, Coercer, Value};
///
/// let strict = Coercer::new(Classifier::UnsignedInteger).with_fallback(Value::from(-1));
/// assert_eq!(strict.coerce(Value::from("42")), Value::from(42));
/// assert_eq!(strict.coerce(Value::from("4.2")), Value::from(-1));
///
/// // Closures work as checks too
/// let yes_no = Coercer::new(|s: &str| s.trim() == "0" || s.trim() == "1");
/// assert_eq!(yes_no.coerce(Value::from(" 1")), Value::from(1));
/// ```
pub struct Coercer {
    check: Box<dyn NumericCheck + Send + Sync>,
    fallback: Option<Value>,
}

impl Coercer {
    #[must_use]
    pub fn new<C>(check: C) -> Self
    where
        C: NumericCheck + Send + Sync + 'static,
    {
        Coercer {
            check: Box::new(check),
            fallback: None,
        }
    }

    /// Sets the value returned whenever coercion fails.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Value) -> Self {
        self.fallback = Some(fallback);
        self
    }

    #[must_use]
    pub fn fallback(&self) -> Option<&Value> {
        self.fallback.as_ref()
    }

    /// Applies this coercer to a single value.
    #[must_use]
    pub fn coerce(&self, value: Value) -> Value {
        coerce(&*self.check, value, self.fallback.clone())
    }

    /// Walks `value` with this coercer as the iteratee.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_coerce::{value, Classifier, Coercer};
    ///
    /// let ints = Coercer::from(Classifier::Integer);
    /// assert_eq!(
    ///     ints.walk(value!(["1", "1.5", {"a": "-2"}])),
    ///     value!([1, "1.5", {"a": (-2)}])
    /// );
    /// ```
    #[must_use]
    pub fn walk(&self, value: Value) -> Value {
        crate::walk_with(value, &mut |leaf: Value| self.coerce(leaf))
    }
}

impl Default for Coercer {
    fn default() -> Self {
        Coercer::from(Classifier::default())
    }
}

impl From<Classifier> for Coercer {
    fn from(classifier: Classifier) -> Self {
        Coercer::new(classifier)
    }
}

impl fmt::Debug for Coercer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coercer")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// Builds a [`Coercer`] from a check and an optional fallback.
///
/// # Examples
///
/// ```rust
/// use numeric_coerce::{make_coercer, Classifier, Value};
///
/// let coercer = make_coercer(Classifier::Integer, Some(Value::Null));
/// assert_eq!(coercer.coerce(Value::from("7")), Value::from(7));
/// assert_eq!(coercer.coerce(Value::from("seven")), Value::Null);
/// ```
#[must_use]
pub fn make_coercer<C>(check: C, fallback: Option<Value>) -> Coercer
where
    C: NumericCheck + Send + Sync + 'static,
{
    let coercer = Coercer::new(check);
    match fallback {
        Some(fallback) => coercer.with_fallback(fallback),
        None => coercer,
    }
}

//! Numeric string classification.
//!
//! A string is numeric when, after stripping whitespace from both ends, the
//! remaining core matches one of four shapes:
//!
//! | Classifier | Accepts |
//! |------------|---------|
//! | [`Classifier::Integer`] | optional `-`, digits |
//! | [`Classifier::UnsignedInteger`] | digits |
//! | [`Classifier::Decimal`] | optional `-`, digits, optional `.` and digits |
//! | [`Classifier::UnsignedDecimal`] | digits, optional `.` and digits |
//!
//! Whitespace may only wrap the token, never appear inside it. Commas, bare
//! decimal points, hexadecimal and exponent forms are all rejected.
//!
//! ```rust
//! use numeric_coerce::Classifier;
//!
//! assert!(Classifier::Integer.matches("\t -42 \r\n"));
//! assert!(!Classifier::Integer.matches("1 0"));
//! assert!(!Classifier::Decimal.matches("1e15"));
//! assert!(!Classifier::UnsignedDecimal.matches("-1.5"));
//! ```
//!
//! Custom checks plug in through [`NumericCheck`], which is implemented for
//! [`Classifier`], [`Regex`] and plain `Fn(&str) -> bool` closures.

use crate::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*-?[0-9]+\s*$").unwrap());
static UNSIGNED_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[0-9]+\s*$").unwrap());
static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-?[0-9]+(?:\.[0-9]+)?\s*$").unwrap());
static UNSIGNED_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[0-9]+(?:\.[0-9]+)?\s*$").unwrap());

/// Decides whether a string is numeric.
///
/// # Examples
///
/// ```rust
/// use numeric_coerce::NumericCheck;
///
/// // Any closure works as a check
/// let even_length = |s: &str| s.len() % 2 == 0;
/// assert!(even_length.test("12"));
/// ```
pub trait NumericCheck {
    fn test(&self, s: &str) -> bool;
}

impl NumericCheck for Regex {
    fn test(&self, s: &str) -> bool {
        self.is_match(s)
    }
}

impl<F> NumericCheck for F
where
    F: Fn(&str) -> bool,
{
    fn test(&self, s: &str) -> bool {
        self(s)
    }
}

/// The four built-in numeric shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Classifier {
    Integer,
    UnsignedInteger,
    #[default]
    Decimal,
    UnsignedDecimal,
}

impl Classifier {
    pub const ALL: [Classifier; 4] = [
        Classifier::Integer,
        Classifier::UnsignedInteger,
        Classifier::Decimal,
        Classifier::UnsignedDecimal,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Classifier::Integer => "integer",
            Classifier::UnsignedInteger => "unsigned-integer",
            Classifier::Decimal => "decimal",
            Classifier::UnsignedDecimal => "unsigned-decimal",
        }
    }

    /// The precompiled pattern behind this classifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_coerce::Classifier;
    ///
    /// let pattern = Classifier::UnsignedInteger.pattern();
    /// assert!(pattern.is_match(" 7 "));
    /// assert_eq!(pattern.as_str(), r"^\s*[0-9]+\s*$");
    /// ```
    #[must_use]
    pub fn pattern(&self) -> &'static Regex {
        match self {
            Classifier::Integer => &*INTEGER,
            Classifier::UnsignedInteger => &*UNSIGNED_INTEGER,
            Classifier::Decimal => &*DECIMAL,
            Classifier::UnsignedDecimal => &*UNSIGNED_DECIMAL,
        }
    }

    #[inline]
    #[must_use]
    pub fn matches(&self, s: &str) -> bool {
        self.pattern().is_match(s)
    }

    /// Compiles a caller-supplied pattern for use as a [`NumericCheck`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) if the
    /// pattern does not compile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_coerce::{Classifier, NumericCheck};
    ///
    /// let two_places = Classifier::from_pattern(r"^\s*[0-9]+\.[0-9]{2}\s*$").unwrap();
    /// assert!(two_places.test("9.99"));
    /// assert!(!two_places.test("9.9"));
    /// ```
    pub fn from_pattern(pattern: &str) -> Result<Regex> {
        Ok(Regex::new(pattern)?)
    }
}

impl NumericCheck for Classifier {
    fn test(&self, s: &str) -> bool {
        self.matches(s)
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All built-in patterns, paired with their classifiers.
///
/// Callers writing their own walker can match against these directly.
pub fn patterns() -> [(Classifier, &'static Regex); 4] {
    Classifier::ALL.map(|c| (c, c.pattern()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_wraps_only() {
        for s in [" 9", "9 ", " 9 ", "\t\t9", "9\r\n", "\t  9  \r\n"] {
            assert!(Classifier::Integer.matches(s), "{:?}", s);
        }
        for s in ["1 0", "1 1", "- 1", "9\t1"] {
            assert!(!Classifier::Integer.matches(s), "{:?}", s);
        }
    }

    #[test]
    fn test_decimal_shapes() {
        for s in ["1.01", "-0.001", "1000.000", " 9.1 "] {
            assert!(Classifier::Decimal.matches(s), "{:?}", s);
        }
        for s in ["1.", " 1.", ".5", "1. 000", "-1.0 1", "1,000", "0x15", "1e15", "1a"] {
            assert!(!Classifier::Decimal.matches(s), "{:?}", s);
        }
    }

    #[test]
    fn test_unsigned_rejects_sign() {
        assert!(!Classifier::UnsignedInteger.matches("-1"));
        assert!(!Classifier::UnsignedDecimal.matches("-1.5"));
        assert!(Classifier::UnsignedDecimal.matches("1.5"));
    }

    #[test]
    fn test_empty_and_blank_rejected() {
        for classifier in Classifier::ALL {
            for s in ["", "      ", "\t", "\r\n"] {
                assert!(!classifier.matches(s), "{} {:?}", classifier, s);
            }
        }
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(!Classifier::Integer.matches("٣"));
    }

    #[test]
    fn test_patterns_listing() {
        let listed = patterns();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[2].0, Classifier::Decimal);
        assert!(listed[2].1.is_match("-1.5"));
    }

    #[test]
    fn test_from_pattern_invalid() {
        assert!(Classifier::from_pattern("(").is_err());
    }
}

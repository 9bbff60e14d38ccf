//! Error types for the serde bridge and pattern compilation.
//!
//! Coercion itself never fails: a string that is not numeric is returned as-is
//! (or replaced by a caller-supplied fallback). The errors in this module only
//! come from the edges of the crate:
//!
//! - **Pattern errors**: a custom numeric pattern that does not compile
//! - **Type mismatches**: [`from_value`](crate::from_value) asked for a type the value cannot fill
//! - **Key errors**: [`to_value`](crate::to_value) met a map key that is not a scalar
//!
//! ## Examples
//!
//! ```rust
//! use numeric_coerce::{Classifier, Error};
//!
//! let result = Classifier::from_pattern("^[0-9+$");
//! assert!(matches!(result, Err(Error::InvalidPattern(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A custom numeric pattern failed to compile
    #[error("invalid numeric pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Type mismatch while deserializing from a [`Value`](crate::Value)
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Custom error raised through serde
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_coerce::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_coerce::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert_eq!(err.to_string(), "something went wrong");
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! NOT combinator - logical negation of validators
//!
//! [`Not`] inverts the result of a validator: it succeeds when the inner
//! validator fails and vice versa.
//!
//! # Examples
//!
//! ```rust,ignore
//! use flagspec::prelude::*;
//!
//! let validator = not(integer());
//! assert!(validator.validate("abc").is_ok());
//! assert!(validator.validate("123").is_err());
//! ```

use crate::foundation::{Validate, ValidationError, ValidatorCategory};

/// Inverts a validator with logical NOT.
///
/// - If the inner validator fails, `Not` succeeds.
/// - If the inner validator succeeds, `Not` fails with its own "must not"
///   message naming the inner validator. The inner validator's message is
///   never reused: it describes the inverse of what went wrong here.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
#[derive(Debug, Clone)]
pub struct Not<V> {
    /// The inner validator to invert.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::must_not_match(self.inner.name())),
            Err(_) => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "not"
    }

    fn category(&self) -> ValidatorCategory {
        ValidatorCategory::Composite
    }

    fn description(&self) -> String {
        format!("not {}", self.inner.description())
    }
}

/// Creates a [`Not`] combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}

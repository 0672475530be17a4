//! Core traits for the validation system
//!
//! This module defines the fundamental trait that all validators implement,
//! plus the extension trait providing the fluent combinator API.

use std::fmt;

use crate::foundation::{ValidationError, ValidatorCategory};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator is a named capability that checks one string value (a resolved
/// flag value) and returns `Ok(())` or a structured [`ValidationError`]. The
/// trait is object safe: the factory returns heterogeneous validators as
/// [`BoxValidator`], and composites hold boxed children.
///
/// Validators are immutable once built and carry no per-call state, so one
/// instance may be invoked any number of times, from any number of threads.
///
/// # Examples
///
/// ```rust,ignore
/// use flagspec::foundation::{Validate, ValidationError, ValidatorCategory};
///
/// #[derive(Debug)]
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::min_length(self.min, input.chars().count()))
///         }
///     }
///
///     fn name(&self) -> &'static str {
///         "minlength"
///     }
///
///     fn category(&self) -> ValidatorCategory {
///         ValidatorCategory::String
///     }
///
///     fn description(&self) -> String {
///         format!("at least {} characters", self.min)
///     }
/// }
/// ```
pub trait Validate: fmt::Debug + Send + Sync {
    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &str) -> Result<(), ValidationError>;

    /// The spec-language name of this validator (e.g. `"minlength"`).
    fn name(&self) -> &'static str;

    /// The category this validator belongs to.
    fn category(&self) -> ValidatorCategory;

    /// Human-readable description of what this validator accepts.
    fn description(&self) -> String;
}

/// A heterogeneous, dynamically dispatched validator.
///
/// Produced by the spec registry; also what composites hold as children.
pub type BoxValidator = Box<dyn Validate>;

impl Validate for BoxValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn category(&self) -> ValidatorCategory {
        (**self).category()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// [`Validate`], providing a fluent API for composing validators without
/// going through the spec language.
///
/// # Examples
///
/// ```rust,ignore
/// use flagspec::prelude::*;
///
/// let username = min_length(3).and(max_length(20)).and(alphanumeric());
/// assert!(username.validate("alice").is_ok());
/// assert!(username.validate("a!").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass for the combined validator to succeed.
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one validator must pass for the combined validator to
    /// succeed. Short-circuits on the first success; if both fail, the
    /// combined error aggregates both reasons.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    ///
    /// The combined validator succeeds if the original validator fails,
    /// and vice versa.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Boxes this validator for storage alongside other validator types.
    fn boxed(self) -> BoxValidator
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================
// Import the actual combinator implementations instead of duplicating them

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

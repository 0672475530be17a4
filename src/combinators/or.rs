//! OR combinators - logical disjunction of validators
//!
//! [`Or`] combines exactly two validators for the fluent builder API;
//! [`OneOf`] holds an ordered vector of boxed children and is what the spec
//! language builds for `oneof(...)`. Both short-circuit on the first success;
//! when every alternative fails, the aggregated error lists every reason
//! joined with `" OR "`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use flagspec::prelude::*;
//!
//! let validator = exact_length(5).or(exact_length(10));
//! assert!(validator.validate("hello").is_ok()); // 5 chars
//! assert!(validator.validate("helloworld").is_ok()); // 10 chars
//! assert!(validator.validate("hi").is_err()); // neither 5 nor 10
//! ```

use crate::foundation::{BoxValidator, Validate, ValidationError, ValidatorCategory};

/// Combines two validators with logical OR.
///
/// At least one validator must pass for the combined validator to succeed.
/// If the first validator passes, the second is not evaluated. If both fail,
/// the combined error carries both reasons.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => Err(ValidationError::one_of_failed(vec![
                    left_error,
                    right_error,
                ])),
            },
        }
    }

    fn name(&self) -> &'static str {
        "oneof"
    }

    fn category(&self) -> ValidatorCategory {
        ValidatorCategory::Composite
    }

    fn description(&self) -> String {
        format!("{} or {}", self.left.description(), self.right.description())
    }
}

/// Creates an [`Or`] combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate,
{
    Or::new(left, right)
}

// ============================================================================
// ONE OF
// ============================================================================

/// Tries an ordered sequence of validators until one passes.
///
/// Children are evaluated in declared order; the first success wins and no
/// later child runs. If every child fails, one aggregated error is returned
/// whose message joins every child's reason with `" OR "`, with each child
/// error kept nested. An empty `OneOf` succeeds on any input - vacuous
/// truth, by policy, matching [`AllOf`](crate::combinators::AllOf).
///
/// # Examples
///
/// ```rust,ignore
/// use flagspec::prelude::*;
///
/// let validator = one_of(vec![email().boxed(), integer().boxed()]);
/// assert!(validator.validate("42").is_ok());
/// assert!(validator.validate("user@example.com").is_ok());
/// assert!(validator.validate("nope").is_err()); // cites both reasons
/// ```
#[derive(Debug)]
pub struct OneOf {
    children: Vec<BoxValidator>,
}

impl OneOf {
    /// Creates a `OneOf` over the given children.
    #[must_use]
    pub fn new(children: Vec<BoxValidator>) -> Self {
        Self { children }
    }

    /// Returns the child validators in declared order.
    #[must_use]
    pub fn children(&self) -> &[BoxValidator] {
        &self.children
    }
}

impl Validate for OneOf {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.children.is_empty() {
            return Ok(());
        }

        let mut errors = Vec::with_capacity(self.children.len());
        for child in &self.children {
            match child.validate(input) {
                Ok(()) => return Ok(()),
                Err(e) => errors.push(e),
            }
        }

        Err(ValidationError::one_of_failed(errors))
    }

    fn name(&self) -> &'static str {
        "oneof"
    }

    fn category(&self) -> ValidatorCategory {
        ValidatorCategory::Composite
    }

    fn description(&self) -> String {
        let parts: Vec<_> = self.children.iter().map(|c| c.description()).collect();
        parts.join(" or ")
    }
}

/// Creates a [`OneOf`] combinator from a vector of validators.
#[must_use]
pub fn one_of(children: Vec<BoxValidator>) -> OneOf {
    OneOf::new(children)
}

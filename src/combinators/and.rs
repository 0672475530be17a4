//! AND combinators - logical conjunction of validators
//!
//! [`And`] combines exactly two validators for the fluent builder API;
//! [`AllOf`] holds an ordered vector of boxed children and is what the spec
//! language builds for `all(...)`. Both short-circuit on the first failure.
//!
//! # Examples
//!
//! ```rust,ignore
//! use flagspec::prelude::*;
//!
//! let validator = min_length(5).and(max_length(20));
//! assert!(validator.validate("hello").is_ok());
//! assert!(validator.validate("hi").is_err()); // fails min_length
//! ```

use crate::foundation::{BoxValidator, Validate, ValidationError, ValidatorCategory};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// The error from the first failing validator is returned unchanged.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "all"
    }

    fn category(&self) -> ValidatorCategory {
        ValidatorCategory::Composite
    }

    fn description(&self) -> String {
        format!(
            "{} and {}",
            self.left.description(),
            self.right.description()
        )
    }
}

/// Creates an [`And`] combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
{
    And::new(left, right)
}

// ============================================================================
// ALL OF
// ============================================================================

/// Combines an ordered sequence of validators with logical AND.
///
/// Children are evaluated in declared order and the first failure is
/// returned immediately; success requires every child to succeed. An empty
/// `AllOf` succeeds on any input - vacuous truth, by policy, so `all()`
/// in a spec is a valid no-op validator.
///
/// # Examples
///
/// ```rust,ignore
/// use flagspec::prelude::*;
///
/// let validator = all_of(vec![min_length(3).boxed(), max_length(5).boxed()]);
/// assert!(validator.validate("abcd").is_ok());
/// assert!(validator.validate("ab").is_err());
/// assert!(validator.validate("abcdef").is_err());
/// ```
#[derive(Debug)]
pub struct AllOf {
    children: Vec<BoxValidator>,
}

impl AllOf {
    /// Creates an `AllOf` over the given children.
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

impl Validate for AllOf {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        for child in &self.children {
            child.validate(input)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "all"
    }

    fn category(&self) -> ValidatorCategory {
        ValidatorCategory::Composite
    }

    fn description(&self) -> String {
        let parts: Vec<_> = self.children.iter().map(|c| c.description()).collect();
        parts.join(" and ")
    }
}

/// Creates an [`AllOf`] combinator from a vector of validators.
#[must_use]
pub fn all_of(children: Vec<BoxValidator>) -> AllOf {
    AllOf::new(children)
}

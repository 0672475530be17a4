//! Numeric validators
//!
//! These validate the *textual* flag value by parsing it at validate time:
//! `range(1,100)` accepts the string `"50"` and rejects `"500"` and `"abc"`.
//! A value that does not parse fails with a typed not-a-number error,
//! distinct from an out-of-bounds failure.

use crate::foundation::{Validate, ValidationError, ValidatorCategory};

fn parse_value(input: &str) -> Result<f64, ValidationError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::must_be_number(input)),
    }
}

// ============================================================================
// INTEGER / NUMBER
// ============================================================================

crate::validator! {
    /// Validates that a value parses as a signed integer.
    pub Integer("integer", Numeric);
    rule(input) { input.trim().parse::<i64>().is_ok() }
    error(input) { ValidationError::must_be_integer(input) }
    describe() { "an integer".into() }
    fn integer();
}

crate::validator! {
    /// Validates that a value parses as a finite number.
    pub Number("number", Numeric);
    rule(input) { matches!(input.trim().parse::<f64>(), Ok(n) if n.is_finite()) }
    error(input) { ValidationError::must_be_number(input) }
    describe() { "a number".into() }
    fn number();
}

// ============================================================================
// AT LEAST / AT MOST
// ============================================================================

/// Validates that a numeric value is at least a minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtLeast {
    /// Minimum value (inclusive).
    pub min: f64,
}

impl AtLeast {
    /// Creates a new minimum-value validator.
    #[must_use]
    pub fn new(min: f64) -> Self {
        Self { min }
    }
}

impl Validate for AtLeast {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let value = parse_value(input)?;
        if value >= self.min {
            Ok(())
        } else {
            Err(ValidationError::at_least(self.min, value))
        }
    }

    fn name(&self) -> &'static str {
        "atleast"
    }

    fn category(&self) -> ValidatorCategory {
        ValidatorCategory::Numeric
    }

    fn description(&self) -> String {
        format!("a number of at least {}", self.min)
    }
}

/// Creates an [`AtLeast`] validator.
#[must_use]
pub fn at_least(min: f64) -> AtLeast {
    AtLeast::new(min)
}

/// Validates that a numeric value does not exceed a maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtMost {
    /// Maximum value (inclusive).
    pub max: f64,
}

impl AtMost {
    /// Creates a new maximum-value validator.
    #[must_use]
    pub fn new(max: f64) -> Self {
        Self { max }
    }
}

impl Validate for AtMost {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let value = parse_value(input)?;
        if value <= self.max {
            Ok(())
        } else {
            Err(ValidationError::at_most(self.max, value))
        }
    }

    fn name(&self) -> &'static str {
        "atmost"
    }

    fn category(&self) -> ValidatorCategory {
        ValidatorCategory::Numeric
    }

    fn description(&self) -> String {
        format!("a number of at most {}", self.max)
    }
}

/// Creates an [`AtMost`] validator.
#[must_use]
pub fn at_most(max: f64) -> AtMost {
    AtMost::new(max)
}

// ============================================================================
// RANGE
// ============================================================================

/// Validates that a numeric value is within an inclusive range.
///
/// A failure cites both bounds: `"Value must be between 1 and 100"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InRange {
    /// Minimum value (inclusive).
    pub min: f64,
    /// Maximum value (inclusive).
    pub max: f64,
}

impl InRange {
    /// Creates a new range validator.
    ///
    /// Returns an error if `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::new("invalid_range", "min must be <= max"));
        }
        Ok(Self { min, max })
    }
}

impl Validate for InRange {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let value = parse_value(input)?;
        if value >= self.min && value <= self.max {
            Ok(())
        } else {
            Err(ValidationError::out_of_range(self.min, self.max, value))
        }
    }

    fn name(&self) -> &'static str {
        "range"
    }

    fn category(&self) -> ValidatorCategory {
        ValidatorCategory::Numeric
    }

    fn description(&self) -> String {
        format!("a number between {} and {}", self.min, self.max)
    }
}

/// Creates an [`InRange`] validator.
pub fn in_range(min: f64, max: f64) -> Result<InRange, ValidationError> {
    InRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================

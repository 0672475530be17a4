//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), not bytes, so
//! `minlength(5)` means five characters regardless of encoding width.

use crate::foundation::ValidationError;

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Equivalent to `MinLength::new(1)` but more semantic.
    pub NotEmpty("notempty", String);
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "Value must not be empty") }
    describe() { "a non-empty value".into() }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    pub MinLength("minlength", String) { min: usize }
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
    describe(self) { format!("at least {} characters", self.min) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    pub MaxLength("maxlength", String) { max: usize }
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
    describe(self) { format!("at most {} characters", self.max) }
    fn max_length(max: usize);
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has an exact length.
    pub ExactLength("exactlength", String) { length: usize }
    rule(self, input) { input.chars().count() == self.length }
    error(self, input) { ValidationError::exact_length(self.length, input.chars().count()) }
    describe(self) { format!("exactly {} characters", self.length) }
    fn exact_length(length: usize);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};

    #[test]
    fn test_min_length_valid() {
        let validator = MinLength::new(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hello world").is_ok());
    }

    #[test]
    fn test_min_length_invalid() {
        let validator = MinLength::new(5);
        assert!(validator.validate("hi").is_err());
        assert!(validator.validate("").is_err());
    }

    #[test]
    fn test_max_length() {
        let validator = MaxLength::new(10);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("helloworld").is_ok());
        assert!(validator.validate("verylongstring").is_err());
    }

    #[test]
    fn test_exact_length() {
        let validator = ExactLength::new(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hi").is_err());
        assert!(validator.validate("toolong").is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(NotEmpty.validate("hello").is_ok());
        assert!(NotEmpty.validate(" ").is_ok()); // whitespace is not empty
        assert!(NotEmpty.validate("").is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "héllo" is 5 chars but 6 bytes
        assert!(MinLength::new(5).validate("h\u{e9}llo").is_ok());
        assert!(MaxLength::new(5).validate("h\u{e9}llo").is_ok());
        // Two emoji are 2 chars, 8 bytes
        assert!(MinLength::new(5).validate("\u{1f44b}\u{1f30d}").is_err());
    }

    #[test]
    fn test_error_params() {
        let err = min_length(5).validate("hi").unwrap_err();
        assert_eq!(err.code, "min_length");
        assert_eq!(err.param("min"), Some("5"));
        assert_eq!(err.param("actual"), Some("2"));
    }

    #[test]
    fn test_composition() {
        let validator = min_length(5).and(max_length(10));
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hi").is_err());
        assert!(validator.validate("verylongstring").is_err());
    }
}

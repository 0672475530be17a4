//! Character class and substring validators

use crate::foundation::ValidationError;

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::validator! {
    /// Validates that a string consists of letters and digits only.
    ///
    /// The empty string fails: it contains no letters or digits.
    pub Alphanumeric("alphanumeric", String);
    rule(input) { !input.is_empty() && input.chars().all(char::is_alphanumeric) }
    error(input) {
        ValidationError::new("alphanumeric", "Value must contain only letters and digits")
            .with_param("actual", input.to_string())
    }
    describe() { "letters and digits only".into() }
    fn alphanumeric();
}

crate::validator! {
    /// Validates that a string consists of letters only.
    ///
    /// The empty string fails: it contains no letters.
    pub Alphabetic("alphabetic", String);
    rule(input) { !input.is_empty() && input.chars().all(char::is_alphabetic) }
    error(input) {
        ValidationError::new("alphabetic", "Value must contain only letters")
            .with_param("actual", input.to_string())
    }
    describe() { "letters only".into() }
    fn alphabetic();
}

crate::validator! {
    /// Validates that a string contains no uppercase letters.
    pub Lowercase("lowercase", String);
    rule(input) { !input.chars().any(char::is_uppercase) }
    error(input) {
        ValidationError::new("lowercase", "Value must not contain uppercase letters")
            .with_param("actual", input.to_string())
    }
    describe() { "no uppercase letters".into() }
    fn lowercase();
}

crate::validator! {
    /// Validates that a string contains no lowercase letters.
    pub Uppercase("uppercase", String);
    rule(input) { !input.chars().any(char::is_lowercase) }
    error(input) {
        ValidationError::new("uppercase", "Value must not contain lowercase letters")
            .with_param("actual", input.to_string())
    }
    describe() { "no lowercase letters".into() }
    fn uppercase();
}

// ============================================================================
// SUBSTRINGS
// ============================================================================

crate::validator! {
    /// Validates that a string contains a substring.
    pub Contains("contains", String) { needle: String }
    rule(self, input) { input.contains(self.needle.as_str()) }
    error(self, input) {
        ValidationError::new("contains", format!("Value must contain '{}'", self.needle))
            .with_param("needle", self.needle.clone())
    }
    describe(self) { format!("containing '{}'", self.needle) }
}

/// Creates a [`Contains`] validator.
#[must_use]
pub fn contains(needle: impl Into<String>) -> Contains {
    Contains::new(needle.into())
}

crate::validator! {
    /// Validates that a string starts with a prefix.
    pub StartsWith("startswith", String) { prefix: String }
    rule(self, input) { input.starts_with(self.prefix.as_str()) }
    error(self, input) {
        ValidationError::new("starts_with", format!("Value must start with '{}'", self.prefix))
            .with_param("prefix", self.prefix.clone())
    }
    describe(self) { format!("starting with '{}'", self.prefix) }
}

/// Creates a [`StartsWith`] validator.
#[must_use]
pub fn starts_with(prefix: impl Into<String>) -> StartsWith {
    StartsWith::new(prefix.into())
}

crate::validator! {
    /// Validates that a string ends with a suffix.
    pub EndsWith("endswith", String) { suffix: String }
    rule(self, input) { input.ends_with(self.suffix.as_str()) }
    error(self, input) {
        ValidationError::new("ends_with", format!("Value must end with '{}'", self.suffix))
            .with_param("suffix", self.suffix.clone())
    }
    describe(self) { format!("ending with '{}'", self.suffix) }
}

/// Creates an [`EndsWith`] validator.
#[must_use]
pub fn ends_with(suffix: impl Into<String>) -> EndsWith {
    EndsWith::new(suffix.into())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_alphanumeric() {
        let validator = alphanumeric();
        assert!(validator.validate("abc123").is_ok());
        assert!(validator.validate("abc 123").is_err());
        assert!(validator.validate("abc!").is_err());
        assert!(validator.validate("").is_err());
    }

    #[test]
    fn test_alphabetic() {
        let validator = alphabetic();
        assert!(validator.validate("abc").is_ok());
        assert!(validator.validate("abc1").is_err());
        assert!(validator.validate("").is_err());
    }

    #[test]
    fn test_lowercase() {
        let validator = lowercase();
        assert!(validator.validate("abc-123").is_ok());
        assert!(validator.validate("").is_ok()); // nothing uppercase in it
        assert!(validator.validate("aBc").is_err());
    }

    #[test]
    fn test_uppercase() {
        let validator = uppercase();
        assert!(validator.validate("ABC-123").is_ok());
        assert!(validator.validate("AbC").is_err());
    }

    #[test]
    fn test_contains() {
        let validator = contains("needle");
        assert!(validator.validate("hay needle stack").is_ok());
        assert!(validator.validate("haystack").is_err());
    }

    #[test]
    fn test_starts_with() {
        let validator = starts_with("pre");
        assert!(validator.validate("prefix").is_ok());
        assert!(validator.validate("suffix").is_err());
    }

    #[test]
    fn test_ends_with() {
        let validator = ends_with("fix");
        assert!(validator.validate("suffix").is_ok());
        assert!(validator.validate("fixture").is_err());
    }

    #[test]
    fn test_unicode_classes() {
        // is_alphabetic covers non-ASCII letters
        assert!(alphabetic().validate("caf\u{e9}").is_ok());
        assert!(alphanumeric().validate("caf\u{e9}9").is_ok());
    }
}

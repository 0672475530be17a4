//! Allowed-value set validator

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is one of a closed set of permitted strings.
    ///
    /// Spec form: `in(red,green,blue)`. Comparison is exact and
    /// case-sensitive.
    pub AllowedValues("in", String) { allowed: Vec<String> }
    rule(self, input) { self.allowed.iter().any(|v| v == input) }
    error(self, input) {
        ValidationError::new(
            "allowed_values",
            format!("Value must be one of: {}", self.allowed.join(", ")),
        )
        .with_param("allowed", self.allowed.join(","))
        .with_param("actual", input.to_string())
    }
    describe(self) { format!("one of: {}", self.allowed.join(", ")) }
}

/// Creates an [`AllowedValues`] validator.
#[must_use]
pub fn allowed_values<I, S>(values: I) -> AllowedValues
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    AllowedValues::new(values.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_allowed_values() {
        let validator = allowed_values(["red", "green", "blue"]);
        assert!(validator.validate("green").is_ok());
        assert!(validator.validate("yellow").is_err());
    }

    #[test]
    fn test_allowed_values_case_sensitive() {
        let validator = allowed_values(["red"]);
        assert!(validator.validate("Red").is_err());
    }

    #[test]
    fn test_error_lists_the_set() {
        let validator = allowed_values(["a", "b"]);
        let err = validator.validate("c").unwrap_err();
        assert_eq!(err.message, "Value must be one of: a, b");
        assert_eq!(err.param("actual"), Some("c"));
    }
}

//! Error types for validation failures
//!
//! Two taxonomies live here:
//!
//! - [`ValidationError`] — validate-time failures returned to the flag parser,
//!   structured (code, message, params, nested sub-errors) so callers can
//!   render localized messages from the code and params.
//! - [`SpecError`] — parse/construction-time failures of the spec language
//!   (malformed spec, unknown name, wrong arity, depth exceeded). These are
//!   configuration bugs and are always fatal to
//!   [`parse_validators`](crate::spec::parse_validators).
//!
//! All `ValidationError` string fields use `Cow<'static, str>` for
//! zero-allocation in the common case of static error codes.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Ordered key-value pairs attached to an error (typically 0-3 entries).
type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error with support for nested errors and params.
///
/// # Examples
///
/// ```rust,ignore
/// use flagspec::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Value must be at least 5 characters")
///     .with_param("min", "5")
///     .with_param("actual", "3");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "min_length", "out_of_range", "one_of"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    ///
    /// This is the default message. Use `code` and `params` for i18n.
    pub message: Cow<'static, str>,

    /// Parameters for the error message template.
    ///
    /// Example: `[("min", "1"), ("max", "100"), ("actual", "500")]`
    pub params: Params,

    /// Nested validation errors, used when an OR composite aggregates the
    /// failure of every alternative.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    ///
    /// ```rust,ignore
    /// // Static strings — zero allocation:
    /// let error = ValidationError::new("integer", "Value must be an integer");
    ///
    /// // Dynamic strings — allocates only when needed:
    /// let error = ValidationError::new("min_length", format!("need {} chars", 5));
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Params::new(),
            nested: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    ///
    /// Parameters carry the offending value and the violated bound or
    /// pattern for message templating and i18n.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds nested validation errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Converts the error to a JSON value (for machine-readable output).
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "params": params,
            "nested": self.nested.iter().map(|e| e.to_json_value()).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new(
            "min_length",
            format!("Value must be at least {min} characters"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new(
            "max_length",
            format!("Value must be at most {max} characters"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "exact_length" error.
    pub fn exact_length(expected: usize, actual: usize) -> Self {
        Self::new(
            "exact_length",
            format!("Value must be exactly {expected} characters"),
        )
        .with_param("expected", expected.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "out_of_range" error citing both bounds.
    pub fn out_of_range<T: fmt::Display>(min: T, max: T, actual: T) -> Self {
        Self::new(
            "out_of_range",
            format!("Value must be between {min} and {max}"),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "at_least" error.
    pub fn at_least<T: fmt::Display>(min: T, actual: T) -> Self {
        Self::new("at_least", format!("Value must be at least {min}"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "at_most" error.
    pub fn at_most<T: fmt::Display>(max: T, actual: T) -> Self {
        Self::new("at_most", format!("Value must be at most {max}"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "integer" error carrying the offending value.
    pub fn must_be_integer(value: &str) -> Self {
        Self::new("integer", "Value must be an integer").with_param("actual", value.to_string())
    }

    /// Creates a "number" error carrying the offending value.
    pub fn must_be_number(value: &str) -> Self {
        Self::new("number", "Value must be a number").with_param("actual", value.to_string())
    }

    /// Creates a "pattern" error for a value that did not match.
    pub fn pattern_mismatch(description: &str, pattern: &str) -> Self {
        Self::new("pattern", format!("Value must match {description}"))
            .with_param("pattern", pattern.to_string())
    }

    /// Creates a "not" error: the negated child validator passed.
    ///
    /// Names the child validator but never reuses its message.
    pub fn must_not_match(child: &str) -> Self {
        Self::new("not", format!("Value must not match '{child}'"))
            .with_param("validator", child.to_string())
    }

    /// Aggregates the failures of every OR alternative into one error.
    ///
    /// The message joins each child's reason with `" OR "` so users see why
    /// every alternative failed; each child error is kept nested for
    /// structured consumers.
    pub fn one_of_failed(errors: Vec<ValidationError>) -> Self {
        let message = errors
            .iter()
            .map(|e| e.message.as_ref())
            .collect::<Vec<_>>()
            .join(" OR ");
        Self::new("one_of", message).with_nested(errors)
    }
}

// ============================================================================
// SPEC ERROR
// ============================================================================

/// Required-argument arity of a validator in the spec language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Arity {
    /// Exactly this many arguments.
    Exactly(usize),
    /// This many arguments or more.
    AtLeast(usize),
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Errors produced while parsing a validator spec string or constructing the
/// validator tree it describes.
///
/// Every variant is a configuration bug in the spec, not a bad flag value;
/// [`parse_validators`](crate::spec::parse_validators) fails outright on the
/// first one.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// The spec names a validator the registry does not know.
    #[error("unknown validator '{name}'")]
    UnknownValidator {
        /// The unresolved name as written in the spec.
        name: String,
    },

    /// The spec supplied the wrong number of arguments.
    #[error("validator '{validator}' requires {expected} argument(s), got {actual}")]
    RequiresArgument {
        /// Canonical validator name.
        validator: &'static str,
        /// Required arity.
        expected: Arity,
        /// How many arguments the spec supplied.
        actual: usize,
    },

    /// A numeric argument could not be parsed as an integer.
    #[error("argument '{argument}' to validator '{validator}' must be an integer")]
    ArgumentMustBeInteger {
        /// Canonical validator name.
        validator: &'static str,
        /// The offending argument text.
        argument: String,
    },

    /// A numeric argument could not be parsed as a number.
    #[error("argument '{argument}' to validator '{validator}' must be a number")]
    ArgumentMustBeNumber {
        /// Canonical validator name.
        validator: &'static str,
        /// The offending argument text.
        argument: String,
    },

    /// A count argument (e.g. a length) was negative.
    #[error("argument '{argument}' to validator '{validator}' cannot be negative")]
    ArgumentCannotBeNegative {
        /// Canonical validator name.
        validator: &'static str,
        /// The offending argument text.
        argument: String,
    },

    /// A two-bound validator was given bounds in the wrong order.
    #[error("validator '{validator}' requires min <= max")]
    InvalidRange {
        /// Canonical validator name.
        validator: &'static str,
    },

    /// Nested composite specs exceeded the fixed depth bound.
    #[error(
        "nested validator specs exceed the maximum depth of {}",
        crate::spec::MAX_SPEC_DEPTH
    )]
    RecursionDepthExceeded,

    /// The spec used the rejected legacy colon syntax (`minlength:5`).
    #[error("validator spec '{spec}' must use parentheses, e.g. 'minlength(5)'")]
    MustUseParentheses {
        /// The offending spec text.
        spec: String,
    },

    /// Call syntax was opened with `(` but the spec does not end in `)`.
    #[error("validator spec '{spec}' is missing a closing parenthesis")]
    MissingClosingParenthesis {
        /// The offending spec text.
        spec: String,
    },

    /// A regex argument failed to compile. Reported at construction time,
    /// never deferred to a perpetually-failing validator.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as written in the spec.
        pattern: String,
        /// The compile error from the regex engine.
        source: regex::Error,
    },

    /// Wrapper identifying which spec in a multi-spec parse failed.
    #[error("invalid validator spec '{spec}': {source}")]
    InvalidSpec {
        /// The offending spec text.
        spec: String,
        /// The underlying failure.
        source: Box<SpecError>,
    },
}

impl SpecError {
    /// Unwraps [`SpecError::InvalidSpec`] layers down to the root cause.
    #[must_use]
    pub fn root_cause(&self) -> &SpecError {
        match self {
            SpecError::InvalidSpec { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("min", "Too small")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn test_out_of_range_cites_both_bounds() {
        let error = ValidationError::out_of_range(1.0, 100.0, 500.0);
        assert_eq!(error.message, "Value must be between 1 and 100");
        assert_eq!(error.param("actual"), Some("500"));
    }

    #[test]
    fn test_one_of_failed_joins_with_or() {
        let error = ValidationError::one_of_failed(vec![
            ValidationError::new("a", "first reason"),
            ValidationError::new("b", "second reason"),
            ValidationError::new("c", "third reason"),
        ]);

        assert_eq!(error.code, "one_of");
        assert_eq!(error.message, "first reason OR second reason OR third reason");
        assert_eq!(error.nested.len(), 3);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("integer", "Value must be an integer");
        // Both should be borrowed (no allocation)
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_spec_error_display() {
        let err = SpecError::UnknownValidator {
            name: "bogus".into(),
        };
        assert_eq!(err.to_string(), "unknown validator 'bogus'");

        let err = SpecError::RequiresArgument {
            validator: "minlength",
            expected: Arity::Exactly(1),
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "validator 'minlength' requires exactly 1 argument(s), got 0"
        );
    }

    #[test]
    fn test_root_cause_unwraps_wrapper() {
        let err = SpecError::InvalidSpec {
            spec: "minlength:5".into(),
            source: Box::new(SpecError::MustUseParentheses {
                spec: "minlength:5".into(),
            }),
        };
        assert!(matches!(
            err.root_cause(),
            SpecError::MustUseParentheses { .. }
        ));
    }
}

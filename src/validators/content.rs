//! String content validators
//!
//! Format validators backed by regular expressions. All patterns compile
//! eagerly: shared formats at first use via `LazyLock`, spec-supplied
//! patterns at construction time. A pattern that fails to compile is a
//! construction error, never a validator that fails forever at runtime.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError, ValidatorCategory};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static URL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

// ============================================================================
// EMAIL
// ============================================================================

/// Validates email format.
///
/// Uses a simple but effective regex pattern.
#[derive(Debug, Clone)]
pub struct Email {
    pattern: regex::Regex,
}

impl Email {
    /// Creates a new email validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Email {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(
                ValidationError::new("email", "Value must be a valid email address")
                    .with_param("actual", input.to_string()),
            )
        }
    }

    fn name(&self) -> &'static str {
        "email"
    }

    fn category(&self) -> ValidatorCategory {
        ValidatorCategory::Content
    }

    fn description(&self) -> String {
        "an email address".into()
    }
}

/// Creates an [`Email`] validator.
#[must_use]
pub fn email() -> Email {
    Email::new()
}

// ============================================================================
// URL
// ============================================================================

/// Validates http/https URL format.
#[derive(Debug, Clone)]
pub struct Url {
    pattern: regex::Regex,
}

impl Url {
    /// Creates a new URL validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: URL_REGEX.clone(),
        }
    }
}

impl Default for Url {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Url {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new("url", "Value must be a valid URL")
                .with_param("actual", input.to_string()))
        }
    }

    fn name(&self) -> &'static str {
        "url"
    }

    fn category(&self) -> ValidatorCategory {
        ValidatorCategory::Content
    }

    fn description(&self) -> String {
        "a URL".into()
    }
}

/// Creates a [`Url`] validator.
#[must_use]
pub fn url() -> Url {
    Url::new()
}

// ============================================================================
// REGEX
// ============================================================================

/// Validates that a value matches a regular expression.
///
/// Carries a human-readable description used in the failure message, so
/// `regex(^v\d+$)` can fail with "Value must match a version tag" when built
/// through the builder API with a custom description.
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: regex::Regex,
    description: String,
}

impl MatchesRegex {
    /// Compiles `pattern` and uses it as its own description.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Self::with_description(pattern, format!("pattern '{pattern}'"))
    }

    /// Compiles `pattern` with a custom description for error messages.
    pub fn with_description(
        pattern: &str,
        description: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
            description: description.into(),
        })
    }

    /// The source text of the compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validate for MatchesRegex {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(
                ValidationError::pattern_mismatch(&self.description, self.pattern.as_str())
                    .with_param("actual", input.to_string()),
            )
        }
    }

    fn name(&self) -> &'static str {
        "regex"
    }

    fn category(&self) -> ValidatorCategory {
        ValidatorCategory::Content
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

/// Creates a [`MatchesRegex`] validator.
pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, regex::Error> {
    MatchesRegex::new(pattern)
}

// ============================================================================
// MUST NOT MATCH
// ============================================================================

/// Validates that a value does **not** match a regular expression.
#[derive(Debug, Clone)]
pub struct MustNotMatch {
    pattern: regex::Regex,
}

impl MustNotMatch {
    /// Compiles `pattern`.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }

    /// The source text of the compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validate for MustNotMatch {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Err(ValidationError::new(
                "must_not_match",
                format!("Value must not match pattern '{}'", self.pattern.as_str()),
            )
            .with_param("pattern", self.pattern.as_str().to_string())
            .with_param("actual", input.to_string()))
        } else {
            Ok(())
        }
    }

    fn name(&self) -> &'static str {
        "mustnotmatch"
    }

    fn category(&self) -> ValidatorCategory {
        ValidatorCategory::Content
    }

    fn description(&self) -> String {
        format!("not matching pattern '{}'", self.pattern.as_str())
    }
}

/// Creates a [`MustNotMatch`] validator.
pub fn must_not_match(pattern: &str) -> Result<MustNotMatch, regex::Error> {
    MustNotMatch::new(pattern)
}

// ============================================================================
// TESTS
// ============================================================================

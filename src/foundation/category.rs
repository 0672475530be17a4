//! Validator categories
//!
//! Every validator reports the category it belongs to, which is the runtime
//! "type" of a validator in introspection output and error rendering.

use std::fmt;

/// The category a validator belongs to.
///
/// # Examples
///
/// - [`String`](ValidatorCategory::String): `minlength`, `alphanumeric`,
///   `contains`
/// - [`Numeric`](ValidatorCategory::Numeric): `integer`, `range`, `atleast`
/// - [`Content`](ValidatorCategory::Content): `email`, `url`, `regex`
/// - [`Composite`](ValidatorCategory::Composite): `all`, `oneof`, `not`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValidatorCategory {
    /// Checks on the raw string: length, character classes, substrings.
    String,
    /// Checks that parse the value as a number first.
    Numeric,
    /// Format checks: email, URL, regular expressions.
    Content,
    /// Validators built from child validators (AND/OR/NOT).
    Composite,
}

impl ValidatorCategory {
    /// Returns the lowercase category name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValidatorCategory::String => "string",
            ValidatorCategory::Numeric => "numeric",
            ValidatorCategory::Content => "content",
            ValidatorCategory::Composite => "composite",
        }
    }
}

impl fmt::Display for ValidatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

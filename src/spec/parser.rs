//! Spec string parsing
//!
//! Parses one trimmed spec string - no top-level commas, the caller has
//! already split those - into its name and raw argument text.
//!
//! Grammar (informal):
//!
//! ```text
//! spec      := name [ "(" arglist ")" ]
//! arglist   := (spec ("," spec)*)?        // all, oneof, not
//!            | single-arg                  // regex, mustmatch, mustnotmatch
//!            | (arg ("," arg)*)?           // everything else
//! ```
//!
//! How `arglist` is interpreted is the registry's concern; this module only
//! separates `name` from `raw_args`.

use crate::foundation::SpecError;

/// One parsed spec: a validator name and its raw, unsplit argument text.
///
/// Parse-time only; not retained after the validator tree is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorSpec<'a> {
    /// The validator name as written (case preserved).
    pub name: &'a str,
    /// Everything between the outer parentheses, or `""` for a bare name.
    pub raw_args: &'a str,
}

/// Parses one trimmed spec string into [`ValidatorSpec`].
///
/// - `name(args)` call syntax: the string must end in `)`, otherwise this
///   fails with [`SpecError::MissingClosingParenthesis`].
/// - A bare `name` containing `:` is the rejected legacy colon syntax and
///   fails deterministically with [`SpecError::MustUseParentheses`] - it is
///   never silently reinterpreted as a zero-argument validator.
/// - Any other bare `name` is a zero-argument validator.
pub fn parse_spec(spec: &str) -> Result<ValidatorSpec<'_>, SpecError> {
    let spec = spec.trim();

    match spec.find('(') {
        Some(open) => {
            if !spec.ends_with(')') {
                return Err(SpecError::MissingClosingParenthesis {
                    spec: spec.to_string(),
                });
            }
            Ok(ValidatorSpec {
                name: spec[..open].trim(),
                raw_args: &spec[open + 1..spec.len() - 1],
            })
        }
        None if spec.contains(':') => Err(SpecError::MustUseParentheses {
            spec: spec.to_string(),
        }),
        None => Ok(ValidatorSpec {
            name: spec,
            raw_args: "",
        }),
    }
}

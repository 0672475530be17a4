//! The validator spec language
//!
//! Turns compact text specs such as `minlength(5)`, `range(1,100)` or
//! `oneof(email,all(minlength(3),alphanumeric))` into validator trees.
//!
//! A spec entry may hold several comma-separated specs; commas nested inside
//! `(...)` or `{...}` never split. Parsing happens in three layers:
//!
//! 1. [`split::split_top_level`] separates top-level comma segments,
//! 2. [`parser::parse_spec`] splits one segment into name and argument text,
//! 3. [`registry`] resolves the name, checks arity, parses typed arguments
//!    and recurses into composite children.
//!
//! All errors are parse-time [`SpecError`]s; a successfully built tree never
//! fails for spec-shaped reasons afterwards.
//!
//! # Examples
//!
//! ```rust,ignore
//! use flagspec::spec::parse_validators;
//!
//! let validators = parse_validators(["notempty", "maxlength(64)"])?;
//! for v in &validators {
//!     v.validate(flag_value)?;
//! }
//! ```

pub mod parser;
pub mod registry;
pub mod split;

pub use parser::{ValidatorSpec, parse_spec};
pub use registry::{MAX_SPEC_DEPTH, build_validator, canonical_name, resolve};
pub use split::split_top_level;

use tracing::debug;

use crate::foundation::{BoxValidator, SpecError, Validate};

/// Parses a collection of spec entries into validators.
///
/// Each entry may itself hold several comma-separated specs; all resulting
/// validators are returned in order. Blank entries and blank segments are
/// skipped. The first failing spec aborts parsing, wrapped in
/// [`SpecError::InvalidSpec`] so the message names the offending spec text.
pub fn parse_validators<I, S>(specs: I) -> Result<Vec<BoxValidator>, SpecError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut validators = Vec::new();
    for entry in specs {
        for spec in split_top_level(entry.as_ref()) {
            let validator = build_validator(spec, 0).map_err(|source| SpecError::InvalidSpec {
                spec: spec.to_string(),
                source: Box::new(source),
            })?;
            debug!(spec, validator = validator.name(), "parsed validator spec");
            validators.push(validator);
        }
    }
    Ok(validators)
}

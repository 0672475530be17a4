//! Prelude module for convenient imports.
//!
//! Provides a single `use flagspec::prelude::*;` import that brings in all
//! commonly needed traits, types, validators, combinators and the spec
//! parsing entry points.
//!
//! # Examples
//!
//! ```rust,ignore
//! use flagspec::prelude::*;
//!
//! let validators = parse_validators(["notempty", "range(1,100)"])?;
//! let username = min_length(3).and(max_length(20)).and(alphanumeric());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    Arity, BoxValidator, SpecError, SpecResult, Validate, ValidateExt, ValidationError,
    ValidationResult, ValidatorCategory,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{AllOf, And, Not, OneOf, Or, all_of, and, not, one_of, or};

// ============================================================================
// SPEC: Parsing entry points
// ============================================================================

pub use crate::spec::{MAX_SPEC_DEPTH, build_validator, parse_spec, parse_validators};

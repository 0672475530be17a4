//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`] (validate time), [`SpecError`] (parse
//!   time)
//! - **Introspection**: [`ValidatorCategory`]
//!
//! # Architecture
//!
//! Validators are immutable once built and dynamically dispatched: the spec
//! registry returns [`BoxValidator`] so a `oneof(email,minlength(5))` tree
//! can hold heterogeneous children. `validate` is a pure function of
//! `(validator tree, input string)` with no shared mutable state, so a built
//! tree may be called concurrently without synchronization.
//!
//! # Examples
//!
//! ```rust,ignore
//! use flagspec::prelude::*;
//!
//! let validator = min_length(5).and(max_length(20));
//! assert!(validator.validate("hello").is_ok());
//! assert!(validator.validate("hi").is_err());
//! ```

// Module declarations
pub mod category;
pub mod error;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use category::ValidatorCategory;
pub use error::{Arity, SpecError, ValidationError};
pub use traits::{BoxValidator, Validate, ValidateExt};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A spec-parsing result using [`SpecError`].
pub type SpecResult<T> = Result<T, SpecError>;

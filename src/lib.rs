//! # flagspec
//!
//! A composable validation layer for CLI flag values, driven by a compact
//! spec language.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flagspec::prelude::*;
//!
//! // Parse a spec into a validator tree
//! let validator = build_validator("oneof(email,minlength(5))", 0)?;
//! assert!(validator.validate("user@example.com").is_ok());
//! assert!(validator.validate("hi").is_err());
//!
//! // Or compose validators directly with .and() / .or() / .not()
//! let username = min_length(3).and(max_length(20)).and(alphanumeric());
//! assert!(username.validate("alice").is_ok());
//! ```
//!
//! ## The Spec Language
//!
//! A spec is `name` or `name(args)`; entries may hold several comma-separated
//! specs. Composites nest: `all(minlength(3),not(integer))`. Names are
//! case-insensitive and alias-aware (`minlen`, `int`, `between`, ...).
//! Everything spec-shaped fails at parse time with a typed
//! [`SpecError`](foundation::SpecError); a built tree only ever reports
//! value failures via [`ValidationError`](foundation::ValidationError).
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Length**: [`NotEmpty`](validators::NotEmpty), [`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength), [`ExactLength`](validators::ExactLength)
//! - **Characters**: [`Alphanumeric`](validators::Alphanumeric),
//!   [`Alphabetic`](validators::Alphabetic), [`Lowercase`](validators::Lowercase),
//!   [`Uppercase`](validators::Uppercase), [`Contains`](validators::Contains),
//!   [`StartsWith`](validators::StartsWith), [`EndsWith`](validators::EndsWith)
//! - **Numeric**: [`Integer`](validators::Integer), [`Number`](validators::Number),
//!   [`AtLeast`](validators::AtLeast), [`AtMost`](validators::AtMost),
//!   [`InRange`](validators::InRange)
//! - **Content**: [`Email`](validators::Email), [`Url`](validators::Url),
//!   [`MatchesRegex`](validators::MatchesRegex), [`MustNotMatch`](validators::MustNotMatch)
//! - **Sets**: [`AllowedValues`](validators::AllowedValues)

// ValidationError is the fundamental error type for all validators — boxing it
// would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex types
// that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod spec;
pub mod validators;

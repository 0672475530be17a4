//! Built-in validators
//!
//! The primitive validator library behind the spec language. Every validator
//! here checks one string value, is immutable once built, and is safe for
//! concurrent reuse.
//!
//! # Categories
//!
//! - **Length**: [`NotEmpty`], [`MinLength`], [`MaxLength`], [`ExactLength`]
//! - **Character classes / substrings**: [`Alphanumeric`], [`Alphabetic`],
//!   [`Lowercase`], [`Uppercase`], [`Contains`], [`StartsWith`], [`EndsWith`]
//! - **Numeric** (value parsed at validate time): [`Integer`], [`Number`],
//!   [`AtLeast`], [`AtMost`], [`InRange`]
//! - **Content**: [`Email`], [`Url`], [`MatchesRegex`], [`MustNotMatch`]
//! - **Sets**: [`AllowedValues`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use flagspec::prelude::*;
//!
//! let username = min_length(3).and(max_length(20)).and(alphanumeric());
//! let port = in_range(1.0, 65535.0)?;
//! ```

pub mod content;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod values;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use length::{
    ExactLength, MaxLength, MinLength, NotEmpty, exact_length, max_length, min_length, not_empty,
};

pub use pattern::{
    Alphabetic, Alphanumeric, Contains, EndsWith, Lowercase, StartsWith, Uppercase, alphabetic,
    alphanumeric, contains, ends_with, lowercase, starts_with, uppercase,
};

pub use numeric::{
    AtLeast, AtMost, InRange, Integer, Number, at_least, at_most, in_range, integer, number,
};

pub use content::{
    Email, MatchesRegex, MustNotMatch, Url, email, matches_regex, must_not_match, url,
};

pub use values::{AllowedValues, allowed_values};

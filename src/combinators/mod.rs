//! Validator combinators
//!
//! The composite evaluation engine: logical AND, OR, and NOT over child
//! validators. Evaluation is purely functional per call - no state persists
//! across invocations:
//!
//! - [`AllOf`] / [`And`]: declared order, first failure returned immediately.
//! - [`OneOf`] / [`Or`]: declared order, first success wins; all-fail
//!   aggregates every reason joined with `" OR "`.
//! - [`Not`]: succeeds iff the child fails, with its own "must not" message.
//! - Empty [`AllOf`] / [`OneOf`] always succeed (vacuous truth, by policy).
//!
//! The generic pairs ([`And`], [`Or`]) back the fluent builder API; the
//! vector forms ([`AllOf`], [`OneOf`]) are what the spec language builds.

pub mod and;
pub mod not;
pub mod or;

pub use and::{AllOf, And, all_of, and};
pub use not::{Not, not};
pub use or::{OneOf, Or, one_of, or};

//! Macros for creating validators with minimal boilerplate.
//!
//! [`validator!`] generates a complete primitive validator: the struct, its
//! `Validate` implementation (rule, error, spec-language name, category,
//! description), a constructor, and an optional factory function.
//!
//! Validators with fallible constructors (regex compilation, ordered bounds)
//! are written by hand; see `validators/content.rs` and
//! `validators/numeric.rs`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use flagspec::validator;
//! use flagspec::foundation::ValidationError;
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NotEmpty("notempty", String);
//!     rule(input) { !input.is_empty() }
//!     error(input) { ValidationError::new("not_empty", "Value must not be empty") }
//!     describe() { "a non-empty value".into() }
//!     fn not_empty();
//! }
//!
//! // Struct with fields
//! validator! {
//!     pub MinLength("minlength", String) { min: usize }
//!     rule(self, input) { input.chars().count() >= self.min }
//!     error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
//!     describe(self) { format!("at least {} characters", self.min) }
//!     fn min_length(min: usize);
//! }
//! ```

/// Creates a complete validator: struct definition, `Validate`
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. The header names the struct,
/// its spec-language name, and its [`ValidatorCategory`] variant, e.g.
/// `pub Alphanumeric("alphanumeric", String)`.
///
/// [`ValidatorCategory`]: crate::foundation::ValidatorCategory
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident($spec_name:literal, $cat:ident);
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        describe() $desc:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name($spec_name, $cat);
            rule($inp) $rule
            error($einp) $err
            describe() $desc
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident($spec_name:literal, $cat:ident);
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        describe() $desc:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(&self, $inp: &str) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn name(&self) -> &'static str {
                $spec_name
            }

            fn category(&self) -> $crate::foundation::ValidatorCategory {
                $crate::foundation::ValidatorCategory::$cat
            }

            fn description(&self) -> ::std::string::String $desc
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident($spec_name:literal, $cat:ident) { $($field:ident: $fty:ty),+ $(,)? }
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        describe($self3:ident) $desc:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name($spec_name, $cat) { $($field: $fty),+ }
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            describe($self3) $desc
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident($spec_name:literal, $cat:ident) { $($field:ident: $fty:ty),+ $(,)? }
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        describe($self3:ident) $desc:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &str) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn name(&self) -> &'static str {
                $spec_name
            }

            fn category(&self) -> $crate::foundation::ValidatorCategory {
                $crate::foundation::ValidatorCategory::$cat
            }

            fn description(&$self3) -> ::std::string::String $desc
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError, ValidatorCategory};

    // Test 1: Unit validator (no fields)
    validator! {
        /// A test unit validator.
        TestNotEmpty("testnotempty", String);
        rule(input) { !input.is_empty() }
        error(input) { ValidationError::new("not_empty", "Value must not be empty") }
        describe() { "a non-empty value".into() }
        fn test_not_empty();
    }

    #[test]
    fn test_unit_validator() {
        let v = TestNotEmpty;
        assert!(v.validate("hello").is_ok());
        assert!(v.validate("").is_err());
    }

    #[test]
    fn test_unit_factory() {
        let v = test_not_empty();
        assert!(v.validate("x").is_ok());
    }

    #[test]
    fn test_unit_metadata() {
        let v = TestNotEmpty;
        assert_eq!(v.name(), "testnotempty");
        assert_eq!(v.category(), ValidatorCategory::String);
        assert_eq!(v.description(), "a non-empty value");
    }

    // Test 2: Struct with fields + auto new
    validator! {
        TestMinLen("testminlen", String) { min: usize }
        rule(self, input) { input.len() >= self.min }
        error(self, input) {
            ValidationError::new("min_len", format!("need {} chars", self.min))
        }
        describe(self) { format!("at least {} chars", self.min) }
        fn test_min_len(min: usize);
    }

    #[test]
    fn test_struct_validator() {
        let v = TestMinLen { min: 3 };
        assert!(v.validate("abc").is_ok());
        assert!(v.validate("ab").is_err());
    }

    #[test]
    fn test_struct_new_and_factory() {
        assert!(TestMinLen::new(5).validate("hello").is_ok());
        assert!(test_min_len(5).validate("hi").is_err());
    }

    #[test]
    fn test_error_message_content() {
        let v = TestMinLen { min: 5 };
        let err = v.validate("hi").unwrap_err();
        assert_eq!(err.code, "min_len");
        assert_eq!(err.message, "need 5 chars");
    }

    #[test]
    fn test_struct_metadata() {
        let v = TestMinLen::new(4);
        assert_eq!(v.name(), "testminlen");
        assert_eq!(v.description(), "at least 4 chars");
    }
}

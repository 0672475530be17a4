//! Validator factory and name registry
//!
//! Resolves a parsed spec - a name plus raw argument text - into a concrete
//! boxed validator. Lookup is case-insensitive and alias-aware; every
//! validator has a fixed required arity and typed argument parsing; composite
//! specs recurse back through the spec parser under an explicit depth guard.

use tracing::trace;

use crate::combinators::{AllOf, Not, OneOf};
use crate::foundation::{Arity, BoxValidator, SpecError, ValidateExt};
use crate::spec::parser::parse_spec;
use crate::spec::split::split_top_level;
use crate::validators::{
    AllowedValues, AtLeast, AtMost, Email, ExactLength, InRange, Integer, MatchesRegex, MaxLength,
    MinLength, MustNotMatch, NotEmpty, Number, Url, contains, ends_with, starts_with,
};
use crate::validators::{Alphabetic, Alphanumeric, Lowercase, Uppercase};

/// Maximum nesting depth of composite specs.
///
/// Resolution past this depth fails with
/// [`SpecError::RecursionDepthExceeded`] before recursing further, bounding
/// worst-case parse-time stack usage regardless of adversarial nesting such
/// as `not(not(not(...)))`. Validation after construction never recurses
/// deeper than the depth fixed at parse time.
pub const MAX_SPEC_DEPTH: usize = 10;

/// Maps a spec-language name to its canonical form.
///
/// Lookup is case-insensitive and alias-aware; returns `None` for names the
/// registry does not know.
#[must_use]
pub fn canonical_name(name: &str) -> Option<&'static str> {
    let lower = name.to_ascii_lowercase();
    Some(match lower.as_str() {
        "all" | "and" => "all",
        "oneof" | "or" | "any" => "oneof",
        "not" => "not",
        "email" => "email",
        "url" => "url",
        "integer" | "int" => "integer",
        "number" | "num" | "float" => "number",
        "alphanumeric" | "alnum" => "alphanumeric",
        "alphabetic" | "alpha" => "alphabetic",
        "lowercase" | "lower" => "lowercase",
        "uppercase" | "upper" => "uppercase",
        "notempty" | "nonempty" => "notempty",
        "minlength" | "minlen" => "minlength",
        "maxlength" | "maxlen" => "maxlength",
        "exactlength" | "length" | "len" => "exactlength",
        "atleast" | "min" => "atleast",
        "atmost" | "max" => "atmost",
        "range" | "between" => "range",
        "regex" => "regex",
        "mustmatch" => "mustmatch",
        "mustnotmatch" => "mustnotmatch",
        "contains" => "contains",
        "startswith" | "prefix" => "startswith",
        "endswith" | "suffix" => "endswith",
        "in" | "values" => "in",
        _ => return None,
    })
}

/// Parses one spec string and resolves it into a validator.
///
/// `depth` is the current composite nesting depth; callers outside this
/// module pass `0`.
pub fn build_validator(spec: &str, depth: usize) -> Result<BoxValidator, SpecError> {
    let parsed = parse_spec(spec)?;
    resolve(parsed.name, parsed.raw_args, depth)
}

/// Resolves a validator name plus raw argument text into a validator.
///
/// Composite validators (`all`, `oneof`) split `raw_args` on top-level
/// commas and recursively parse each piece as a nested spec; `not` recurses
/// once on its single argument; single-value validators (`regex`,
/// `mustmatch`, `mustnotmatch`) take all of `raw_args` as one argument so
/// patterns may contain commas; everything else splits `raw_args` into plain
/// string arguments.
pub fn resolve(name: &str, raw_args: &str, depth: usize) -> Result<BoxValidator, SpecError> {
    if depth > MAX_SPEC_DEPTH {
        return Err(SpecError::RecursionDepthExceeded);
    }

    let canonical = canonical_name(name).ok_or_else(|| SpecError::UnknownValidator {
        name: name.to_string(),
    })?;
    trace!(validator = canonical, depth, "resolving validator spec");

    match canonical {
        // Composites: each argument is itself a spec.
        "all" | "oneof" => {
            let children = split_top_level(raw_args)
                .into_iter()
                .map(|child| build_validator(child, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            if canonical == "all" {
                Ok(AllOf::new(children).boxed())
            } else {
                Ok(OneOf::new(children).boxed())
            }
        }
        "not" => {
            let children = split_top_level(raw_args);
            if children.len() != 1 {
                return Err(SpecError::RequiresArgument {
                    validator: "not",
                    expected: Arity::Exactly(1),
                    actual: children.len(),
                });
            }
            Ok(Not::new(build_validator(children[0], depth + 1)?).boxed())
        }

        // Single-value validators: the whole of raw_args is one argument,
        // commas included.
        "regex" | "mustmatch" => {
            let pattern = single_argument(canonical, raw_args)?;
            Ok(compile_pattern(pattern, MatchesRegex::new)?.boxed())
        }
        "mustnotmatch" => {
            let pattern = single_argument(canonical, raw_args)?;
            Ok(compile_pattern(pattern, MustNotMatch::new)?.boxed())
        }

        // Everything else: plain comma-separated string arguments.
        other => {
            let args = split_top_level(raw_args);
            resolve_plain(other, &args)
        }
    }
}

fn resolve_plain(validator: &'static str, args: &[&str]) -> Result<BoxValidator, SpecError> {
    match validator {
        "email" => zero_args(validator, args).map(|()| Email::new().boxed()),
        "url" => zero_args(validator, args).map(|()| Url::new().boxed()),
        "integer" => zero_args(validator, args).map(|()| Integer.boxed()),
        "number" => zero_args(validator, args).map(|()| Number.boxed()),
        "alphanumeric" => zero_args(validator, args).map(|()| Alphanumeric.boxed()),
        "alphabetic" => zero_args(validator, args).map(|()| Alphabetic.boxed()),
        "lowercase" => zero_args(validator, args).map(|()| Lowercase.boxed()),
        "uppercase" => zero_args(validator, args).map(|()| Uppercase.boxed()),
        "notempty" => zero_args(validator, args).map(|()| NotEmpty.boxed()),

        "minlength" => {
            let arg = one_arg(validator, args)?;
            Ok(MinLength::new(parse_count(validator, arg)?).boxed())
        }
        "maxlength" => {
            let arg = one_arg(validator, args)?;
            Ok(MaxLength::new(parse_count(validator, arg)?).boxed())
        }
        "exactlength" => {
            let arg = one_arg(validator, args)?;
            Ok(ExactLength::new(parse_count(validator, arg)?).boxed())
        }
        "atleast" => {
            let arg = one_arg(validator, args)?;
            Ok(AtLeast::new(parse_number(validator, arg)?).boxed())
        }
        "atmost" => {
            let arg = one_arg(validator, args)?;
            Ok(AtMost::new(parse_number(validator, arg)?).boxed())
        }
        "contains" => Ok(contains(one_arg(validator, args)?).boxed()),
        "startswith" => Ok(starts_with(one_arg(validator, args)?).boxed()),
        "endswith" => Ok(ends_with(one_arg(validator, args)?).boxed()),

        "range" => {
            let (lo, hi) = two_args(validator, args)?;
            let min = parse_number(validator, lo)?;
            let max = parse_number(validator, hi)?;
            let validator_impl =
                InRange::new(min, max).map_err(|_| SpecError::InvalidRange { validator })?;
            Ok(validator_impl.boxed())
        }

        "in" => {
            if args.is_empty() {
                return Err(SpecError::RequiresArgument {
                    validator,
                    expected: Arity::AtLeast(1),
                    actual: 0,
                });
            }
            Ok(AllowedValues::new(args.iter().map(ToString::to_string).collect()).boxed())
        }

        // canonical_name() and resolve() cover every other name.
        _ => unreachable!("unhandled canonical validator name: {validator}"),
    }
}

// ============================================================================
// ARGUMENT HELPERS
// ============================================================================

fn zero_args(validator: &'static str, args: &[&str]) -> Result<(), SpecError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(SpecError::RequiresArgument {
            validator,
            expected: Arity::Exactly(0),
            actual: args.len(),
        })
    }
}

fn one_arg<'a>(validator: &'static str, args: &[&'a str]) -> Result<&'a str, SpecError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(SpecError::RequiresArgument {
            validator,
            expected: Arity::Exactly(1),
            actual: args.len(),
        }),
    }
}

fn two_args<'a>(validator: &'static str, args: &[&'a str]) -> Result<(&'a str, &'a str), SpecError> {
    match args {
        [a, b] => Ok((a, b)),
        _ => Err(SpecError::RequiresArgument {
            validator,
            expected: Arity::Exactly(2),
            actual: args.len(),
        }),
    }
}

fn single_argument<'a>(validator: &'static str, raw_args: &'a str) -> Result<&'a str, SpecError> {
    let arg = raw_args.trim();
    if arg.is_empty() {
        return Err(SpecError::RequiresArgument {
            validator,
            expected: Arity::Exactly(1),
            actual: 0,
        });
    }
    Ok(arg)
}

/// Parses a non-negative count argument (lengths).
fn parse_count(validator: &'static str, arg: &str) -> Result<usize, SpecError> {
    let n: i64 = arg
        .trim()
        .parse()
        .map_err(|_| SpecError::ArgumentMustBeInteger {
            validator,
            argument: arg.to_string(),
        })?;
    usize::try_from(n).map_err(|_| SpecError::ArgumentCannotBeNegative {
        validator,
        argument: arg.to_string(),
    })
}

/// Parses a finite numeric argument (bounds).
fn parse_number(validator: &'static str, arg: &str) -> Result<f64, SpecError> {
    match arg.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(SpecError::ArgumentMustBeNumber {
            validator,
            argument: arg.to_string(),
        }),
    }
}

fn compile_pattern<V>(
    pattern: &str,
    constructor: impl FnOnce(&str) -> Result<V, regex::Error>,
) -> Result<V, SpecError> {
    constructor(pattern).map_err(|source| SpecError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

// ============================================================================
// TESTS
// ============================================================================

//! End-to-end tests for the spec language: parse a spec string, then
//! validate real flag values against the resulting tree.

use flagspec::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn parse(spec: &str) -> BoxValidator {
    build_validator(spec, 0).unwrap_or_else(|e| panic!("spec {spec:?} failed to parse: {e}"))
}

// ============================================================================
// SIMPLE SPECS
// ============================================================================

#[rstest]
#[case("email", "user@example.com", "not-an-email")]
#[case("url", "https://example.com/x", "example.com")]
#[case("integer", "42", "4.2")]
#[case("number", "4.2", "abc")]
#[case("alphanumeric", "abc123", "abc-123")]
#[case("alphabetic", "abc", "abc1")]
#[case("lowercase", "abc1", "aBc")]
#[case("uppercase", "ABC1", "AbC")]
#[case("notempty", "x", "")]
#[case("minlength(3)", "abc", "ab")]
#[case("maxlength(3)", "abc", "abcd")]
#[case("exactlength(3)", "abc", "abcd")]
#[case("atleast(10)", "10", "9.5")]
#[case("atmost(10)", "10", "10.5")]
#[case("contains(foo)", "xfooy", "bar")]
#[case("startswith(ab)", "abc", "cab")]
#[case("endswith(bc)", "abc", "bca")]
#[case("in(red,green,blue)", "green", "yellow")]
fn simple_spec_accepts_and_rejects(#[case] spec: &str, #[case] good: &str, #[case] bad: &str) {
    let v = parse(spec);
    assert!(v.validate(good).is_ok(), "{spec} rejected {good:?}");
    assert!(v.validate(bad).is_err(), "{spec} accepted {bad:?}");
}

#[test]
fn range_failure_cites_both_bounds() {
    let v = parse("range(1,100)");
    assert!(v.validate("50").is_ok());
    assert!(v.validate("1").is_ok());
    assert!(v.validate("100").is_ok());

    let err = v.validate("500").unwrap_err();
    assert_eq!(err.message, "Value must be between 1 and 100");
}

#[test]
fn range_rejects_non_numeric_values_with_typed_error() {
    let v = parse("range(1,100)");
    let err = v.validate("abc").unwrap_err();
    assert_eq!(err.code, "number");
}

#[test]
fn length_specs_count_chars_not_bytes() {
    let v = parse("maxlength(3)");
    assert!(v.validate("äöü").is_ok());
    assert!(v.validate("äöüx").is_err());
}

// ============================================================================
// ALIASES AND CASE
// ============================================================================

#[rstest]
#[case("minlen(3)", "minlength(3)")]
#[case("maxlen(3)", "maxlength(3)")]
#[case("len(3)", "exactlength(3)")]
#[case("int", "integer")]
#[case("num", "number")]
#[case("alnum", "alphanumeric")]
#[case("alpha", "alphabetic")]
#[case("lower", "lowercase")]
#[case("upper", "uppercase")]
#[case("nonempty", "notempty")]
#[case("min(5)", "atleast(5)")]
#[case("max(5)", "atmost(5)")]
#[case("between(1,9)", "range(1,9)")]
#[case("prefix(a)", "startswith(a)")]
#[case("suffix(a)", "endswith(a)")]
#[case("values(a,b)", "in(a,b)")]
#[case("any(email,integer)", "oneof(email,integer)")]
#[case("and(notempty,maxlength(3))", "all(notempty,maxlength(3))")]
fn aliases_behave_like_canonical_names(#[case] alias: &str, #[case] canonical: &str) {
    let a = parse(alias);
    let c = parse(canonical);
    for input in ["", "a", "abc", "abcdef", "5", "42", "user@example.com"] {
        assert_eq!(
            a.validate(input).is_ok(),
            c.validate(input).is_ok(),
            "{alias} and {canonical} disagree on {input:?}"
        );
    }
}

#[rstest]
#[case("EMAIL")]
#[case("Email")]
#[case("MinLength(3)")]
#[case("OneOf(email,integer)")]
fn names_are_case_insensitive(#[case] spec: &str) {
    parse(spec);
}

// ============================================================================
// COMPOSITES
// ============================================================================

#[test]
fn all_requires_every_child() {
    let v = parse("all(minlength(3),maxlength(5))");
    assert!(v.validate("abcd").is_ok());
    assert!(v.validate("ab").is_err());
    assert!(v.validate("abcdef").is_err());
}

#[test]
fn all_reports_the_first_failure_verbatim() {
    let v = parse("all(minlength(3),maxlength(5))");
    let err = v.validate("ab").unwrap_err();
    assert_eq!(err.code, "min_length");
}

#[test]
fn oneof_passes_when_any_child_passes() {
    let v = parse("oneof(email,integer)");
    assert!(v.validate("user@example.com").is_ok());
    assert!(v.validate("42").is_ok());
}

#[test]
fn oneof_failure_aggregates_every_reason() {
    let v = parse("oneof(email,integer)");
    let err = v.validate("hello").unwrap_err();
    assert_eq!(err.code, "one_of");
    let message = err.message.to_string();
    assert!(message.contains(" OR "), "no OR separator in {message:?}");
    assert!(message.contains("email"), "email reason missing: {message:?}");
    assert!(message.contains("integer"), "integer reason missing: {message:?}");
    assert!(err.has_nested());
}

#[test]
fn not_inverts_and_names_the_child() {
    let v = parse("not(integer)");
    assert!(v.validate("abc").is_ok());

    let err = v.validate("42").unwrap_err();
    assert_eq!(err.message, "Value must not match 'integer'");
}

#[test]
fn empty_composites_accept_everything() {
    for spec in ["all()", "oneof()"] {
        let v = parse(spec);
        assert!(v.validate("").is_ok(), "{spec} rejected empty input");
        assert!(v.validate("anything").is_ok());
    }
}

#[test]
fn composites_nest() {
    let v = parse("oneof(all(minlength(3),alphabetic),integer)");
    assert!(v.validate("abc").is_ok());
    assert!(v.validate("42").is_ok());
    assert!(v.validate("ab").is_err());
    assert!(v.validate("a1c").is_err());
}

// ============================================================================
// REGEX SPECS
// ============================================================================

#[test]
fn regex_pattern_may_contain_commas() {
    let v = parse(r"regex(^\d{2,4}$)");
    assert!(v.validate("123").is_ok());
    assert!(v.validate("1").is_err());
    assert!(v.validate("12345").is_err());
}

#[test]
fn mustnotmatch_inverts_the_pattern() {
    let v = parse(r"mustnotmatch(\d)");
    assert!(v.validate("letters").is_ok());
    assert!(v.validate("h4x").is_err());
}

// ============================================================================
// PARSE ERRORS
// ============================================================================

#[test]
fn legacy_colon_syntax_is_rejected() {
    let err = build_validator("minlength:5", 0).unwrap_err();
    assert!(matches!(err, SpecError::MustUseParentheses { spec } if spec == "minlength:5"));
}

#[test]
fn missing_closing_parenthesis_is_rejected() {
    let err = build_validator("minlength(5", 0).unwrap_err();
    assert!(matches!(err, SpecError::MissingClosingParenthesis { .. }));
}

#[test]
fn unknown_names_are_rejected() {
    let err = build_validator("frobnicate", 0).unwrap_err();
    assert!(matches!(err, SpecError::UnknownValidator { name } if name == "frobnicate"));
}

#[rstest]
#[case("minlength")]
#[case("minlength(1,2)")]
#[case("range(1)")]
#[case("range(1,2,3)")]
#[case("contains")]
#[case("email(x)")]
#[case("regex()")]
#[case("not(email,integer)")]
fn wrong_arity_is_rejected(#[case] spec: &str) {
    let err = build_validator(spec, 0).unwrap_err();
    assert!(
        matches!(err, SpecError::RequiresArgument { .. }),
        "{spec}: {err:?}"
    );
}

#[test]
fn bad_arguments_are_typed_errors() {
    assert!(matches!(
        build_validator("minlength(abc)", 0).unwrap_err(),
        SpecError::ArgumentMustBeInteger { .. }
    ));
    assert!(matches!(
        build_validator("minlength(-1)", 0).unwrap_err(),
        SpecError::ArgumentCannotBeNegative { .. }
    ));
    assert!(matches!(
        build_validator("range(a,b)", 0).unwrap_err(),
        SpecError::ArgumentMustBeNumber { .. }
    ));
    assert!(matches!(
        build_validator("range(9,1)", 0).unwrap_err(),
        SpecError::InvalidRange { .. }
    ));
    assert!(matches!(
        build_validator("regex((unclosed)", 0).unwrap_err(),
        SpecError::InvalidPattern { .. }
    ));
}

#[test]
fn errors_surface_from_nested_children() {
    let err = build_validator("all(email,minlength(-1))", 0).unwrap_err();
    assert!(matches!(err, SpecError::ArgumentCannotBeNegative { .. }));
}

// ============================================================================
// DEPTH GUARD
// ============================================================================

fn nested_not(levels: usize) -> String {
    let mut spec = String::from("email");
    for _ in 0..levels {
        spec = format!("not({spec})");
    }
    spec
}

#[test]
fn nesting_at_the_depth_bound_parses() {
    let v = parse(&nested_not(MAX_SPEC_DEPTH));
    // 10 inversions: even number, so behaves like plain email.
    assert!(v.validate("user@example.com").is_ok());
}

#[test]
fn nesting_past_the_depth_bound_is_rejected() {
    let err = build_validator(&nested_not(MAX_SPEC_DEPTH + 1), 0).unwrap_err();
    assert!(matches!(err, SpecError::RecursionDepthExceeded));
}

// ============================================================================
// MULTI-SPEC ENTRIES
// ============================================================================

#[test]
fn entries_split_on_top_level_commas_only() {
    let validators = parse_validators(["minlength(2),regex(^a{1,3}$)"]).unwrap();
    assert_eq!(validators.len(), 2);
    assert!(validators[0].validate("aa").is_ok());
    assert!(validators[1].validate("aa").is_ok());
    assert!(validators[1].validate("b").is_err());
}

#[test]
fn blank_entries_and_segments_are_skipped() {
    let validators = parse_validators(["", "   ", "email, ,integer", ","]).unwrap();
    assert_eq!(validators.len(), 2);
}

#[test]
fn whitespace_around_specs_is_tolerated() {
    let validators = parse_validators([" minlength(3) ,  maxlength(5) "]).unwrap();
    assert_eq!(validators.len(), 2);
    assert!(validators[0].validate("abc").is_ok());
    assert!(validators[1].validate("abcdef").is_err());
}

#[test]
fn first_bad_spec_aborts_with_its_text() {
    let err = parse_validators(["email", "minlength(oops)"]).unwrap_err();
    match err {
        SpecError::InvalidSpec { spec, .. } => assert_eq!(spec, "minlength(oops)"),
        other => panic!("unexpected error: {other:?}"),
    }
}

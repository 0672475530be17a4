//! Top-level argument splitting
//!
//! Splits a raw argument string on commas that sit outside any `(...)` or
//! `{...}` nesting. Nested content is opaque: `all(minlength(3),regex(a{2,3}))`
//! has exactly one top-level comma.

/// Splits `raw` into trimmed top-level comma-separated segments.
///
/// Commas inside `(...)` or `{...}` are literal. Empty segments between
/// commas are dropped, never emitted as empty strings; a blank input yields
/// an empty vector. An unbalanced trailing group is emitted as one opaque
/// segment and left for the spec parser to reject.
#[must_use]
pub fn split_top_level(raw: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut parens = 0usize;
    let mut braces = 0usize;
    let mut start = 0;

    for (i, c) in raw.char_indices() {
        match c {
            '(' => parens += 1,
            ')' => parens = parens.saturating_sub(1),
            '{' => braces += 1,
            '}' => braces = braces.saturating_sub(1),
            ',' if parens == 0 && braces == 0 => {
                let segment = raw[start..i].trim();
                if !segment.is_empty() {
                    segments.push(segment);
                }
                start = i + 1;
            }
            _ => {}
        }
    }

    let segment = raw[start..].trim();
    if !segment.is_empty() {
        segments.push(segment);
    }

    segments
}

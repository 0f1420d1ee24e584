//! Reference expression syntax: `{segment.segment...}`.
//!
//! A value may be a single whole-value reference (`{base.white}`) or a
//! literal with embedded references (`1px solid {base.border}`). Anything
//! outside the braces is opaque text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}\s]+)\}").expect("reference pattern is valid"));

/// One reference found inside a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'a> {
    /// Dotted path of the referenced token
    pub path: &'a str,
    /// Byte range of the whole `{...}` expression
    pub span: Range<usize>,
}

/// Iterate over every reference in `value`, left to right
pub fn references(value: &str) -> impl Iterator<Item = Reference<'_>> {
    REFERENCE.captures_iter(value).filter_map(|caps| {
        let whole = caps.get(0)?;
        let path = caps.get(1)?;
        Some(Reference {
            path: path.as_str(),
            span: whole.range(),
        })
    })
}

/// Whether `value` contains at least one reference
pub fn has_references(value: &str) -> bool {
    REFERENCE.is_match(value)
}

/// The referenced path when `value` is exactly one reference and nothing else
pub fn whole_reference(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    let reference = references(trimmed).next()?;
    (reference.span == (0..trimmed.len())).then_some(reference.path)
}

/// Replace every reference in `value` with the text produced by `replace`
///
/// Stops at the first error returned by `replace`.
pub fn substitute<E>(
    value: &str,
    mut replace: impl FnMut(&str) -> Result<String, E>,
) -> Result<String, E> {
    let mut output = String::with_capacity(value.len());
    let mut last = 0;

    for reference in references(value) {
        output.push_str(&value[last..reference.span.start]);
        output.push_str(&replace(reference.path)?);
        last = reference.span.end;
    }

    output.push_str(&value[last..]);
    Ok(output)
}

//! Rule-prelude scanner for element scoping.
//!
//! Walks the stylesheet text, skipping comments and quoted strings, and
//! hands every selector prelude (the text before a `{`) to
//! [`scope_prelude`]. Everything else is copied through byte for byte.

use crate::rules::SCOPED_ELEMENTS;

pub(crate) fn scope_elements(css: &str, scope: &str) -> String {
    let bytes = css.as_bytes();
    let mut output = String::with_capacity(css.len() + 64);
    let mut segment_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = css[i + 2..].find("*/").map(|p| i + 2 + p + 2).unwrap_or(bytes.len());
                // A comment in front of a selector is not part of it
                if css[segment_start..i].trim().is_empty() {
                    output.push_str(&css[segment_start..end]);
                    segment_start = end;
                }
                i = end;
            }
            quote @ (b'"' | b'\'') => {
                i = skip_string(bytes, i, quote);
            }
            b'{' => {
                output.push_str(&scope_prelude(&css[segment_start..i], scope));
                output.push('{');
                i += 1;
                segment_start = i;
            }
            b'}' | b';' => {
                output.push_str(&css[segment_start..=i]);
                i += 1;
                segment_start = i;
            }
            _ => i += 1,
        }
    }

    output.push_str(&css[segment_start..]);
    output
}

/// Drop `/* */` comments, keeping the line breaks inside them
pub(crate) fn strip_comments(css: &str) -> String {
    let bytes = css.as_bytes();
    let mut output = String::with_capacity(css.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = css[i + 2..].find("*/").map(|p| i + 2 + p + 2).unwrap_or(bytes.len());
                output.push_str(&css[copied..i]);
                output.extend(css[i..end].chars().filter(|&c| c == '\n'));
                copied = end;
                i = end;
            }
            quote @ (b'"' | b'\'') => i = skip_string(bytes, i, quote),
            _ => i += 1,
        }
    }

    output.push_str(&css[copied..]);
    output
}

/// Index just past the closing quote, honouring backslash escapes
fn skip_string(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Prefix each element-led clause of a prelude with the scope class
fn scope_prelude(prelude: &str, scope: &str) -> String {
    if prelude.trim_start().starts_with('@') {
        return prelude.to_string();
    }

    split_clauses(prelude)
        .into_iter()
        .map(|clause| scope_clause(clause, scope))
        .collect::<Vec<_>>()
        .join(",")
}

fn scope_clause(clause: &str, scope: &str) -> String {
    let body = clause.trim_start();
    let indent = &clause[..clause.len() - body.len()];

    let element_len = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(body.len());
    let element = &body[..element_len];

    let scoped = !element.is_empty()
        && SCOPED_ELEMENTS.contains(&element.to_ascii_lowercase().as_str())
        && !contains_scope(body, scope);

    if scoped {
        format!("{}{} {}", indent, scope, body)
    } else {
        clause.to_string()
    }
}

/// Whether `clause` already carries the scope class as a whole class name
fn contains_scope(clause: &str, scope: &str) -> bool {
    clause.match_indices(scope).any(|(pos, _)| {
        clause[pos + scope.len()..]
            .chars()
            .next()
            .map(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(true)
    })
}

/// Split on commas that are not nested inside parentheses or brackets
fn split_clauses(prelude: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in prelude.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                clauses.push(&prelude[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    clauses.push(&prelude[start..]);
    clauses
}

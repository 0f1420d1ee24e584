use crate::diagnostic::Diagnostic;
use crate::linter::LintContext;
use crate::rules::LintRule;
use halo_resolver::ResolvedToken;
use once_cell::sync::Lazy;
use regex::Regex;

static KEBAB_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("kebab pattern is valid"));

/// Lint rule that flags tokens outside the known top-level roots
pub struct NonStandardPrefixRule;

impl LintRule for NonStandardPrefixRule {
    fn name(&self) -> &'static str {
        "non-standard-prefix"
    }

    fn description(&self) -> &'static str {
        "Top-level token segments should be base or one of the reserved roots"
    }

    fn check_token(&self, token: &ResolvedToken, context: &LintContext) -> Vec<Diagnostic> {
        let Some(root) = token.path.first() else {
            return Vec::new();
        };
        if context.known_roots.iter().any(|known| known == root) {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            self.name(),
            format!("Token '{}' uses non-standard root '{}'", token.name(), root),
            token.name(),
        )
        .with_suggestion(format!(
            "Move it under one of: {}",
            context.known_roots.join(", ")
        ))]
    }
}

/// Lint rule requiring lower kebab-case path segments
pub struct KebabCaseNameRule;

impl LintRule for KebabCaseNameRule {
    fn name(&self) -> &'static str {
        "kebab-case-name"
    }

    fn description(&self) -> &'static str {
        "Token path segments should be lower kebab-case"
    }

    fn check_token(&self, token: &ResolvedToken, _context: &LintContext) -> Vec<Diagnostic> {
        token
            .path
            .iter()
            .filter(|segment| !KEBAB_SEGMENT.is_match(segment))
            .map(|segment| {
                Diagnostic::warning(
                    self.name(),
                    format!("Segment '{}' of token '{}' is not kebab-case", segment, token.name()),
                    token.name(),
                )
                .with_suggestion(format!("Rename it to '{}'", to_kebab_case(segment)))
            })
            .collect()
    }
}

fn to_kebab_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    let mut previous_lower = false;

    for c in segment.chars() {
        if c.is_ascii_alphanumeric() {
            if c.is_ascii_uppercase() && previous_lower {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            previous_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        } else {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            previous_lower = false;
        }
    }

    out.trim_end_matches('-').to_string()
}

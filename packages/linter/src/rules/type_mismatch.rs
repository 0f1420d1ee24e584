use crate::diagnostic::Diagnostic;
use crate::linter::LintContext;
use crate::rules::LintRule;
use halo_resolver::ResolvedToken;

/// Lint rule for whole-value references that cross declared types
pub struct TypeMismatchRule;

impl LintRule for TypeMismatchRule {
    fn name(&self) -> &'static str {
        "type-mismatch"
    }

    fn description(&self) -> &'static str {
        "A typed token must not alias a token of a different type"
    }

    fn check_token(&self, token: &ResolvedToken, context: &LintContext) -> Vec<Diagnostic> {
        let (Some(expected), Some(target)) = (&token.token_type, token.alias_of()) else {
            return Vec::new();
        };
        let Some(target) = context.resolved.get(target) else {
            return Vec::new();
        };
        let Some(found) = &target.token_type else {
            return Vec::new();
        };
        if found == expected {
            return Vec::new();
        }

        vec![Diagnostic::error(
            self.name(),
            format!(
                "Token '{}' has type '{}' but references '{}' of type '{}'",
                token.name(),
                expected,
                target.name(),
                found
            ),
            token.name(),
        )]
    }
}

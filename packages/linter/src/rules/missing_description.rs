use crate::diagnostic::Diagnostic;
use crate::linter::LintContext;
use crate::rules::LintRule;
use halo_resolver::ResolvedToken;
use halo_tokens::TokenRole;

/// Lint rule asking semantic tokens to document their intent
pub struct MissingDescriptionRule;

impl LintRule for MissingDescriptionRule {
    fn name(&self) -> &'static str {
        "missing-description"
    }

    fn description(&self) -> &'static str {
        "Semantic tokens should carry a description"
    }

    fn check_token(&self, token: &ResolvedToken, context: &LintContext) -> Vec<Diagnostic> {
        let is_semantic = matches!(context.roots.classify(&token.path), TokenRole::Semantic { .. });
        let described = token
            .description
            .as_deref()
            .map(|d| !d.trim().is_empty())
            .unwrap_or(false);

        if !is_semantic || described {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            self.name(),
            format!("Semantic token '{}' has no description", token.name()),
            token.name(),
        )]
    }
}

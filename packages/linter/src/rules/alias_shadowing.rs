use crate::diagnostic::Diagnostic;
use crate::linter::LintContext;
use crate::rules::LintRule;
use halo_common::css_variable;
use halo_resolver::ResolvedToken;
use halo_tokens::TokenRole;

/// Lint rule for base tokens whose variable collides with a semantic alias
///
/// The variables stylesheet drops the base declaration in that case, so the
/// token is unreachable from CSS.
pub struct AliasShadowingRule;

impl LintRule for AliasShadowingRule {
    fn name(&self) -> &'static str {
        "alias-shadowing"
    }

    fn description(&self) -> &'static str {
        "Base token variables must not share a name with a semantic alias"
    }

    fn check_token(&self, token: &ResolvedToken, context: &LintContext) -> Vec<Diagnostic> {
        if !matches!(context.roots.classify(&token.path), TokenRole::Base) {
            return Vec::new();
        }

        let variable = css_variable(&token.path);
        let shadowed = context
            .layers
            .alias_names()
            .into_iter()
            .any(|alias| css_variable(alias) == variable);

        if !shadowed {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            self.name(),
            format!(
                "Variable '{}' of token '{}' is shadowed by a semantic alias",
                variable,
                token.name()
            ),
            token.name(),
        )
        .with_suggestion("Rename the base token or the alias")]
    }
}

use crate::diagnostic::Diagnostic;
use crate::linter::LintContext;
use crate::rules::LintRule;
use crate::value_kind::is_color;
use halo_resolver::ResolvedToken;
use halo_tokens::TokenType;

/// Lint rule that checks `color` tokens resolve to a supported literal
pub struct ColorFormatRule;

impl LintRule for ColorFormatRule {
    fn name(&self) -> &'static str {
        "color-format"
    }

    fn description(&self) -> &'static str {
        "Color tokens must use hex, rgb(a), hsl(a), transparent or currentColor"
    }

    fn check_token(&self, token: &ResolvedToken, _context: &LintContext) -> Vec<Diagnostic> {
        if token.token_type != Some(TokenType::Color) || is_color(&token.value) {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            self.name(),
            format!(
                "Color token '{}' has unsupported value '{}'",
                token.name(),
                token.value
            ),
            token.name(),
        )
        .with_suggestion("Use a hex value such as #1a2b3c or an rgb()/hsl() function")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::resolved;
    use halo_tokens::RootSegments;

    #[test]
    fn test_checks_resolved_value() {
        let graph = resolved(
            r##"{
                "base": {
                    "color": {
                        "type": "color",
                        "ok": "#ffffff",
                        "named": "rebeccapurple",
                        "via": "{base.color.named}"
                    },
                    "size": { "value": "red", "type": "dimension" }
                }
            }"##,
        );
        let roots = RootSegments::default();
        let context = LintContext::new(&graph, &roots, &[]);
        let rule = ColorFormatRule;

        let flagged: Vec<String> = graph
            .tokens()
            .iter()
            .flat_map(|token| rule.check_token(token, &context))
            .map(|d| d.path)
            .collect();

        assert_eq!(flagged, vec!["base.color.named", "base.color.via"]);
    }
}

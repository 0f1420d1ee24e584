use crate::diagnostic::Diagnostic;
use crate::rules::RuleRegistry;
use halo_resolver::{ResolvedGraph, ThemeLayers};
use halo_tokens::RootSegments;
use tracing::{debug, instrument};

/// Top-level segment every token set is expected to use for primitives
pub const BASE_ROOT: &str = "base";

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,

    pub roots: RootSegments,

    /// Additional top-level segments accepted by `non-standard-prefix`
    pub extra_roots: Vec<String>,
}

/// Everything a rule may look at
pub struct LintContext<'a> {
    pub resolved: &'a ResolvedGraph,
    pub roots: &'a RootSegments,
    /// `base`, the reserved roots and any configured extras
    pub known_roots: Vec<String>,
    pub layers: ThemeLayers<'a>,
}

impl<'a> LintContext<'a> {
    pub fn new(resolved: &'a ResolvedGraph, roots: &'a RootSegments, extra_roots: &[String]) -> Self {
        let mut known_roots = vec![
            BASE_ROOT.to_string(),
            roots.semantic.clone(),
            roots.theme.clone(),
            roots.component.clone(),
        ];
        known_roots.extend(extra_roots.iter().cloned());

        Self {
            resolved,
            roots,
            known_roots,
            layers: resolved.theme_layers(roots),
        }
    }
}

/// Lint a resolved token graph and return diagnostics
///
/// Per-token checks run first in graph order, then graph-wide checks in
/// registry order.
#[instrument(skip_all, fields(tokens = resolved.len()))]
pub fn lint_graph(resolved: &ResolvedGraph, options: LintOptions) -> Vec<Diagnostic> {
    let LintOptions {
        registry,
        roots,
        extra_roots,
    } = options;
    let registry = registry.unwrap_or_default();
    let context = LintContext::new(resolved, &roots, &extra_roots);
    let mut diagnostics = Vec::new();

    for token in resolved.tokens() {
        for rule in registry.rules() {
            diagnostics.extend(rule.check_token(token, &context));
        }
    }

    for rule in registry.rules() {
        diagnostics.extend(rule.check_graph(&context));
    }

    debug!(count = diagnostics.len(), "Lint finished");
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::resolved;
    use crate::rules::{ColorFormatRule, LintRule};
    use crate::DiagnosticLevel;

    #[test]
    fn test_clean_graph_has_no_diagnostics() {
        let graph = resolved(
            r##"{
                "base": { "white": { "value": "#ffffff", "type": "color" } },
                "semantic": {
                    "background": {
                        "value": "{base.white}",
                        "type": "color",
                        "description": "Page background"
                    }
                },
                "theme": {
                    "light": { "background": "{base.white}" },
                    "dark": { "background": "#111111" }
                }
            }"##,
        );

        let diagnostics = lint_graph(&graph, LintOptions::default());
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    }

    #[test]
    fn test_custom_registry() {
        let graph = resolved(r#"{ "Brand": { "value": "red", "type": "color" } }"#);

        let mut registry = RuleRegistry::empty();
        registry.add_rule(Box::new(ColorFormatRule));
        let diagnostics = lint_graph(
            &graph,
            LintOptions {
                registry: Some(registry),
                ..Default::default()
            },
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, ColorFormatRule.name());
        assert_eq!(diagnostics[0].level, DiagnosticLevel::Warning);
    }

    #[test]
    fn test_extra_roots_are_known() {
        let graph = resolved(r#"{ "brand": { "logo-size": "32px" } }"#);

        let diagnostics = lint_graph(&graph, LintOptions::default());
        assert!(diagnostics.iter().any(|d| d.rule == "non-standard-prefix"));

        let diagnostics = lint_graph(
            &graph,
            LintOptions {
                extra_roots: vec!["brand".to_string()],
                ..Default::default()
            },
        );
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    }
}

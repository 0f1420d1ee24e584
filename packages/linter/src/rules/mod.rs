mod alias_shadowing;
mod color_format;
mod missing_description;
mod naming;
mod theme_symmetry;
mod type_mismatch;

pub use alias_shadowing::AliasShadowingRule;
pub use color_format::ColorFormatRule;
pub use missing_description::MissingDescriptionRule;
pub use naming::{KebabCaseNameRule, NonStandardPrefixRule};
pub use theme_symmetry::ThemeSymmetryRule;
pub use type_mismatch::TypeMismatchRule;

use crate::diagnostic::Diagnostic;
use crate::linter::LintContext;
use halo_resolver::ResolvedToken;

/// Trait for implementing lint rules
pub trait LintRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check a single resolved token
    fn check_token(&self, _token: &ResolvedToken, _context: &LintContext) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Check properties spanning several tokens
    fn check_graph(&self, _context: &LintContext) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Registry of all available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(NonStandardPrefixRule),
                Box::new(KebabCaseNameRule),
                Box::new(ColorFormatRule),
                Box::new(MissingDescriptionRule),
                Box::new(TypeMismatchRule),
                Box::new(ThemeSymmetryRule),
                Box::new(AliasShadowingRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use halo_resolver::{resolve, ResolvedGraph};
    use halo_tokens::{load_documents, TokenDocument};

    pub fn resolved(source: &str) -> ResolvedGraph {
        let graph = load_documents(&[TokenDocument::new("tokens.json", source)]).unwrap();
        resolve(&graph).unwrap()
    }
}

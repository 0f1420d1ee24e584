mod diagnostic;
mod linter;
mod rules;
mod value_kind;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use linter::{lint_graph, LintContext, LintOptions};
pub use rules::{LintRule, RuleRegistry};
pub use value_kind::{is_color, ValueKind};

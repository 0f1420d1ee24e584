use crate::balance::{verify_balance, BalanceCounts};
use crate::rules::{default_rules, RewriteRule};
use crate::scanner::strip_comments;
use thiserror::Error;
use tracing::{debug, warn};

pub type RewriteResult<T> = Result<T, RewriteError>;

/// Shadow-scope syntax that must not survive a rewrite
const SHADOW_MARKERS: [&str; 2] = [":host", "::slotted"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RewriteError {
    #[error("Invalid rewrite rule '{name}': {message}")]
    InvalidRule { name: String, message: String },

    #[error("Invalid component name '{name}': use letters, digits, '-' or '_'")]
    InvalidComponentName { name: String },

    #[error("Rewritten stylesheet is unbalanced: before {before}, after {after}")]
    Unbalanced {
        before: BalanceCounts,
        after: BalanceCounts,
    },
}

/// Result of rewriting one stylesheet
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteOutput {
    pub css: String,
    /// Trimmed lines that still contain shadow-scope syntax no rule matched
    pub residual: Vec<String>,
}

impl RewriteOutput {
    pub fn is_clean(&self) -> bool {
        self.residual.is_empty()
    }
}

/// Ordered shadow-scope → class-scope rewriter
///
/// Rules are compiled once and reused for every component.
#[derive(Debug, Clone)]
pub struct ScopeRewriter {
    prefix: String,
    rules: Vec<RewriteRule>,
}

impl ScopeRewriter {
    pub fn new(prefix: impl Into<String>) -> RewriteResult<Self> {
        let rules = default_rules().map_err(|e| RewriteError::InvalidRule {
            name: "default".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            prefix: prefix.into(),
            rules,
        })
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Class name scoping a component, without the leading dot
    pub fn scope_class(&self, component_name: &str) -> String {
        format!("{}-{}", self.prefix, component_name)
    }

    /// Rewrite one shadow-scoped stylesheet into its class-scoped form
    pub fn rewrite(&self, css: &str, component_name: &str) -> RewriteResult<RewriteOutput> {
        let valid_name = !component_name.is_empty()
            && component_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid_name {
            return Err(RewriteError::InvalidComponentName {
                name: component_name.to_string(),
            });
        }

        let scope = format!(".{}", self.scope_class(component_name));
        let mut output = css.to_string();

        for rule in &self.rules {
            let rewritten = rule.apply(&output, &scope).into_owned();
            if rewritten != output {
                debug!(component = component_name, rule = rule.name, "Rewrite rule applied");
            }
            output = rewritten;
        }

        verify_balance(css, &output)?;

        let residual = residual_lines(&output);
        for line in &residual {
            warn!(component = component_name, selector = %line, "Unrecognised shadow-scope selector left unchanged");
        }

        Ok(RewriteOutput {
            css: output,
            residual,
        })
    }
}

/// Rewrite with the default `ha` prefix
pub fn rewrite_stylesheet(css: &str, component_name: &str) -> RewriteResult<RewriteOutput> {
    ScopeRewriter::new("ha")?.rewrite(css, component_name)
}

fn residual_lines(css: &str) -> Vec<String> {
    strip_comments(css)
        .lines()
        .filter(|line| SHADOW_MARKERS.iter().any(|marker| line.contains(marker)))
        .map(|line| line.trim().to_string())
        .collect()
}

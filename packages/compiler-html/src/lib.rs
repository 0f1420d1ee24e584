//! Shadow-scoped to class-scoped stylesheet rewriting.
//!
//! Component stylesheets are written against an encapsulated style boundary
//! (`:host`, `::slotted`). [`ScopeRewriter`] derives the equivalent
//! stylesheet scoped by a plain class (`.ha-<name>`) through an ordered list
//! of text substitutions. It is not a CSS parser: selectors it does not
//! recognise are left untouched and reported as residual.

mod balance;
mod rules;
mod scanner;
mod rewriter;

pub use balance::{verify_balance, BalanceCounts};
pub use rewriter::{rewrite_stylesheet, RewriteError, RewriteOutput, RewriteResult, ScopeRewriter};
pub use rules::{RewriteRule, RuleKind, SCOPED_ELEMENTS};

#[cfg(test)]
mod tests;

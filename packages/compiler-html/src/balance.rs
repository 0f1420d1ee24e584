use crate::rewriter::{RewriteError, RewriteResult};
use std::fmt;

/// Bracket counts of a stylesheet text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BalanceCounts {
    pub open_braces: usize,
    pub close_braces: usize,
    pub open_parens: usize,
    pub close_parens: usize,
}

impl BalanceCounts {
    pub fn of(text: &str) -> Self {
        text.chars().fold(Self::default(), |mut counts, c| {
            match c {
                '{' => counts.open_braces += 1,
                '}' => counts.close_braces += 1,
                '(' => counts.open_parens += 1,
                ')' => counts.close_parens += 1,
                _ => {}
            }
            counts
        })
    }

    /// Opening minus closing parentheses
    pub fn paren_balance(&self) -> isize {
        self.open_parens as isize - self.close_parens as isize
    }
}

impl fmt::Display for BalanceCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{:{} }}:{} (:{} ):{}",
            self.open_braces, self.close_braces, self.open_parens, self.close_parens
        )
    }
}

/// Check that a rewrite kept the text balanced
///
/// Brace counts must be identical. Parentheses may only disappear in
/// matched pairs (the `:host(...)` and `::slotted(...)` wrappers), so the
/// open/close difference must be unchanged.
pub fn verify_balance(input: &str, output: &str) -> RewriteResult<()> {
    let before = BalanceCounts::of(input);
    let after = BalanceCounts::of(output);

    let braces_match =
        before.open_braces == after.open_braces && before.close_braces == after.close_braces;
    if braces_match && before.paren_balance() == after.paren_balance() {
        Ok(())
    } else {
        Err(RewriteError::Unbalanced { before, after })
    }
}

use crate::scanner::scope_elements;
use regex::Regex;
use std::borrow::Cow;

/// Elements that get the scope class prepended when they start a selector
/// clause
pub const SCOPED_ELEMENTS: &[&str] = &[
    "a", "button", "details", "dialog", "div", "fieldset", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "img", "input", "label", "legend", "li", "nav", "ol", "option",
    "p", "section", "select", "span", "summary", "svg", "table", "tbody", "td", "textarea",
    "th", "thead", "tr", "ul",
];

/// Placeholder for the scope class selector in replacement templates
const SCOPE: &str = "{scope}";

#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Regex substitution; the template may use capture groups and `{scope}`
    Pattern { regex: Regex, template: &'static str },
    /// Prefix allow-listed element selectors with the scope class
    ElementScope,
}

/// One named step of the rewrite
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub name: &'static str,
    pub kind: RuleKind,
}

impl RewriteRule {
    fn pattern(
        name: &'static str,
        pattern: &str,
        template: &'static str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            kind: RuleKind::Pattern {
                regex: Regex::new(pattern)?,
                template,
            },
        })
    }

    /// Apply this rule alone, with `scope` as the class selector (`.ha-foo`)
    pub fn apply<'t>(&self, css: &'t str, scope: &str) -> Cow<'t, str> {
        match &self.kind {
            RuleKind::Pattern { regex, template } => {
                // `$` is special in replacement strings
                let replacement = template.replace(SCOPE, &scope.replace('$', "$$"));
                regex.replace_all(css, replacement.as_str())
            }
            RuleKind::ElementScope => Cow::Owned(scope_elements(css, scope)),
        }
    }
}

/// The rewrite rules in the order they must run
///
/// Host rules go from most to least specific: the bare `:host` rule must
/// come after the functional forms, and the child-combinator slotted rule
/// before the bare one. Element scoping runs last so it sees the rewritten
/// host selectors. A slotted pseudo glued to a compound (`:host::slotted`,
/// `slot::slotted`) becomes a descendant selector and must run before the
/// bare slotted rule.
pub(crate) fn default_rules() -> Result<Vec<RewriteRule>, regex::Error> {
    const PSEUDOS: &str = r"(?::{1,2}[\w-]+(?:\([^()]*\))?)+";
    const ATTRS: &str = r"(?:\[[^\]]*\])+";

    Ok(vec![
        RewriteRule::pattern(
            "host-attribute-pseudo",
            &format!(r":host\(({ATTRS})({PSEUDOS})\)"),
            "{scope}${1}${2}",
        )?,
        RewriteRule::pattern(
            "host-attribute",
            &format!(r":host\(({ATTRS})\)"),
            "{scope}${1}",
        )?,
        RewriteRule::pattern(
            "host-pseudo",
            &format!(r":host\(({PSEUDOS})\)"),
            "{scope}${1}",
        )?,
        RewriteRule::pattern("host-class", r":host\(((?:\.[\w-]+)+)\)", "{scope}${1}")?,
        RewriteRule::pattern("host", r":host([^\w(-]|$)", "{scope}${1}")?,
        RewriteRule::pattern(
            "slotted-child",
            r"(>\s*)::slotted\(([^()]+)\)",
            "${1}${2}",
        )?,
        RewriteRule::pattern(
            "slotted-compound",
            r"([^\s>+~,(])::slotted\(([^()]+)\)",
            "${1} ${2}",
        )?,
        RewriteRule::pattern("slotted", r"::slotted\(([^()]+)\)", "${1}")?,
        RewriteRule {
            name: "element-scope",
            kind: RuleKind::ElementScope,
        },
    ])
}

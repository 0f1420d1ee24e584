/// Reserved top-level segments that give tokens their role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSegments {
    pub semantic: String,
    pub theme: String,
    pub component: String,
}

impl Default for RootSegments {
    fn default() -> Self {
        Self {
            semantic: "semantic".to_string(),
            theme: "theme".to_string(),
            component: "component".to_string(),
        }
    }
}

/// Role of a leaf, derived from its path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRole<'a> {
    Base,
    Component,
    /// `semantic.<alias...>`
    Semantic { alias: &'a [String] },
    /// `theme.<layer>.<alias...>`
    Theme { layer: &'a str, alias: &'a [String] },
}

impl RootSegments {
    pub fn classify<'a>(&self, path: &'a [String]) -> TokenRole<'a> {
        match path {
            [root, alias @ ..] if *root == self.semantic && !alias.is_empty() => {
                TokenRole::Semantic { alias }
            }
            [root, layer, alias @ ..] if *root == self.theme && !alias.is_empty() => {
                TokenRole::Theme { layer, alias }
            }
            [root, _, ..] if *root == self.component => TokenRole::Component,
            _ => TokenRole::Base,
        }
    }

    /// Whether `segment` is one of the reserved roots
    pub fn is_reserved(&self, segment: &str) -> bool {
        segment == self.semantic || segment == self.theme || segment == self.component
    }
}

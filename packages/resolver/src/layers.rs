//! Semantic aliases and their per-theme overrides.

use crate::resolved::{ResolvedGraph, ResolvedToken};
use halo_tokens::{RootSegments, TokenRole};

/// A semantic alias declared under the semantic root
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticAlias<'a> {
    /// Alias segments, the token path without the semantic root
    pub alias: &'a [String],
    pub token: &'a ResolvedToken,
}

/// One alias value inside a theme layer
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeValue<'a> {
    pub alias: &'a [String],
    pub token: &'a ResolvedToken,
}

impl ThemeValue<'_> {
    pub fn alias_name(&self) -> String {
        self.alias.join(".")
    }
}

/// A named override set such as `light` or `dark`
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeLayer<'a> {
    pub name: &'a str,
    pub values: Vec<ThemeValue<'a>>,
}

impl<'a> ThemeLayer<'a> {
    pub fn get(&self, alias: &[String]) -> Option<&ThemeValue<'a>> {
        self.values.iter().find(|v| v.alias == alias)
    }
}

/// Semantic aliases plus every theme layer, in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeLayers<'a> {
    pub semantic: Vec<SemanticAlias<'a>>,
    pub layers: Vec<ThemeLayer<'a>>,
}

impl<'a> ThemeLayers<'a> {
    pub fn layer(&self, name: &str) -> Option<&ThemeLayer<'a>> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn semantic(&self, alias: &[String]) -> Option<&SemanticAlias<'a>> {
        self.semantic.iter().find(|s| s.alias == alias)
    }

    /// Every alias observed in the semantic root or any layer, deduplicated,
    /// in first-seen order (semantic root first)
    pub fn alias_names(&self) -> Vec<&'a [String]> {
        let mut names: Vec<&'a [String]> = Vec::new();
        let candidates = self
            .semantic
            .iter()
            .map(|s| s.alias)
            .chain(self.layers.iter().flat_map(|l| l.values.iter().map(|v| v.alias)));

        for alias in candidates {
            if !names.contains(&alias) {
                names.push(alias);
            }
        }
        names
    }
}

impl ResolvedGraph {
    /// Partition the resolved tokens into semantic aliases and theme layers
    pub fn theme_layers(&self, roots: &RootSegments) -> ThemeLayers<'_> {
        let mut layers = ThemeLayers::default();

        for token in self.tokens() {
            match roots.classify(&token.path) {
                TokenRole::Semantic { alias } => {
                    layers.semantic.push(SemanticAlias { alias, token });
                }
                TokenRole::Theme { layer, alias } => {
                    let value = ThemeValue { alias, token };
                    match layers.layers.iter_mut().find(|l| l.name == layer) {
                        Some(existing) => existing.values.push(value),
                        None => layers.layers.push(ThemeLayer {
                            name: layer,
                            values: vec![value],
                        }),
                    }
                }
                TokenRole::Base | TokenRole::Component => {}
            }
        }

        layers
    }
}

#[cfg(test)]
mod tests {
    use crate::resolve;
    use halo_tokens::{load_documents, RootSegments, TokenDocument};

    #[test]
    fn test_collect_layers() {
        let graph = load_documents(&[TokenDocument::new(
            "t",
            r##"{
                "base": { "white": "#fff", "black": "#000" },
                "semantic": { "fg": "{base.black}", "bg": "{base.white}" },
                "theme": {
                    "light": { "bg": "{base.white}" },
                    "dark": { "bg": "{base.black}", "border": "#333" }
                }
            }"##,
        )])
        .unwrap();
        let resolved = resolve(&graph).unwrap();
        let layers = resolved.theme_layers(&RootSegments::default());

        assert_eq!(layers.semantic.len(), 2);
        assert_eq!(layers.layers.len(), 2);

        let dark = layers.layer("dark").unwrap();
        assert_eq!(dark.values.len(), 2);
        assert_eq!(dark.get(&["bg".to_string()]).unwrap().token.value, "#000");

        let names: Vec<String> = layers.alias_names().iter().map(|a| a.join(".")).collect();
        assert_eq!(names, vec!["fg", "bg", "border"]);
    }
}

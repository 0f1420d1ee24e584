//! Variables stylesheet with two-tier theme indirection.
//!
//! Every semantic alias is declared once at the document root as
//! `--alias: var(--theme-alias, <default>)`. Theme blocks only redefine the
//! `--theme-*` variables, so a component inside an encapsulated style
//! boundary that reads `--alias` follows the active theme. Consumers must
//! reference the semantic variable, never the `--theme-*` one.

use crate::context::Context;
use halo_common::css_variable;
use halo_resolver::{ResolvedGraph, ResolvedToken, ThemeLayers};
use halo_tokens::reference::substitute;
use halo_tokens::{RootSegments, TokenRole, TokenType};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, info, instrument};

pub type ThemeResult<T> = Result<T, ThemeError>;

pub const GENERATED_HEADER: &str = "/* Generated by halo. Do not edit. */";
const THEME_PLACEHOLDER: &str = "{theme}";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Semantic alias '{alias}' has no value in the '{theme}' theme or under the semantic root")]
    MissingLightDefault { alias: String, theme: String },

    #[error("Theme selector '{template}' must contain {{theme}}")]
    InvalidSelector { template: String },

    #[error("Token '{path}' is missing from the resolved graph")]
    UnknownToken { path: String },

    #[error("Tokens '{first}' and '{second}' both compile to the variable '{variable}'")]
    VariableCollision {
        variable: String,
        first: String,
        second: String,
    },

    #[error("Token '{path}' sits directly under the theme root; theme values need a layer segment")]
    ThemeLeafWithoutLayer { path: String },
}

/// Options for variables compilation
#[derive(Debug, Clone)]
pub struct ThemeOptions {
    pub roots: RootSegments,
    /// Layer supplying the fallback value of every alias
    pub default_theme: String,
    /// Selector template for theme blocks; `{theme}` is replaced by the layer name
    pub theme_selector: String,
    /// Prefix of the theme-scoped indirection variables
    pub theme_prefix: String,
    /// Extra variables zeroed under reduced motion
    pub motion_variables: Vec<String>,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            roots: RootSegments::default(),
            default_theme: "light".to_string(),
            theme_selector: "[data-theme=\"{theme}\"]".to_string(),
            theme_prefix: "theme".to_string(),
            motion_variables: Vec::new(),
        }
    }
}

/// Compiled variables stylesheet and what went into it
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledVariables {
    pub css: String,
    pub base_count: usize,
    pub alias_count: usize,
    pub layers: Vec<String>,
}

/// Compile the resolved token graph into the variables stylesheet
///
/// Sections, in order: base declarations and semantic aliases in `:root`,
/// one override block per theme layer, and a reduced-motion block.
#[instrument(skip(graph, options), fields(tokens = graph.len()))]
pub fn compile_variables(
    graph: &ResolvedGraph,
    options: &ThemeOptions,
) -> ThemeResult<CompiledVariables> {
    if !options.theme_selector.contains(THEME_PLACEHOLDER) {
        return Err(ThemeError::InvalidSelector {
            template: options.theme_selector.clone(),
        });
    }

    let emitter = ThemeEmitter {
        graph,
        options,
        layers: graph.theme_layers(&options.roots),
    };
    emitter.emit()
}

struct ThemeEmitter<'a> {
    graph: &'a ResolvedGraph,
    options: &'a ThemeOptions,
    layers: ThemeLayers<'a>,
}

struct AliasDeclaration {
    name: String,
    variable: String,
    theme_variable: String,
    default: String,
    is_duration: bool,
}

impl ThemeEmitter<'_> {
    fn emit(&self) -> ThemeResult<CompiledVariables> {
        let aliases = self.alias_declarations()?;
        let alias_variables: HashSet<&str> = aliases.iter().map(|a| a.variable.as_str()).collect();

        let mut owners = HashMap::new();
        for alias in &aliases {
            let roots = &self.options.roots;
            claim(&mut owners, &alias.variable, format!("{}.{}", roots.semantic, alias.name))?;
            claim(
                &mut owners,
                &alias.theme_variable,
                format!("{}.*.{}", roots.theme, alias.name),
            )?;
        }

        let mut ctx = Context::new();
        ctx.add_line(GENERATED_HEADER);
        ctx.blank_line();
        ctx.open_block(":root");

        let mut base_count = 0;
        let mut motion = Vec::new();

        for token in self.graph.tokens() {
            let role = self.options.roots.classify(&token.path);
            if !matches!(role, TokenRole::Base | TokenRole::Component) {
                continue;
            }
            if token.path.first() == Some(&self.options.roots.theme) {
                return Err(ThemeError::ThemeLeafWithoutLayer { path: token.name() });
            }

            let variable = css_variable(&token.path);
            if alias_variables.contains(variable.as_str()) {
                debug!(token = %token.name(), variable = %variable, "Base token shadowed by semantic alias");
                continue;
            }
            claim(&mut owners, &variable, token.name())?;

            let value = match role {
                TokenRole::Component => self.component_value(token)?,
                _ => token.value.clone(),
            };

            if token.token_type == Some(TokenType::Duration) {
                motion.push(variable.clone());
            }
            ctx.declaration(&variable, &value);
            base_count += 1;
        }

        if !aliases.is_empty() {
            if base_count > 0 {
                ctx.blank_line();
            }
            ctx.add_line("/* Semantic aliases */");
            for alias in &aliases {
                let value = format!("var({}, {})", alias.theme_variable, alias.default);
                ctx.declaration(&alias.variable, &value);
                if alias.is_duration {
                    motion.push(alias.variable.clone());
                }
            }
        }
        ctx.close_block();

        for layer in &self.layers.layers {
            ctx.blank_line();
            ctx.open_block(&self.options.theme_selector.replace(THEME_PLACEHOLDER, layer.name));
            for value in &layer.values {
                ctx.declaration(&self.theme_variable(value.alias), &value.token.value);
            }
            ctx.close_block();
        }

        for extra in &self.options.motion_variables {
            let variable = if extra.starts_with("--") {
                extra.clone()
            } else {
                format!("--{}", extra)
            };
            if !motion.contains(&variable) {
                motion.push(variable);
            }
        }

        ctx.blank_line();
        ctx.open_block("@media (prefers-reduced-motion: reduce)");
        ctx.open_block(":root");
        for variable in &motion {
            ctx.declaration(variable, "0ms");
        }
        ctx.close_block();
        ctx.close_block();

        let layers: Vec<String> = self.layers.layers.iter().map(|l| l.name.to_string()).collect();
        info!(
            base = base_count,
            aliases = aliases.len(),
            layers = ?layers,
            "Variables stylesheet compiled"
        );

        Ok(CompiledVariables {
            css: ctx.get_output(),
            base_count,
            alias_count: aliases.len(),
            layers,
        })
    }

    fn alias_declarations(&self) -> ThemeResult<Vec<AliasDeclaration>> {
        let default_layer = self.layers.layer(&self.options.default_theme);

        self.layers
            .alias_names()
            .into_iter()
            .map(|alias| {
                let semantic = self.layers.semantic(alias).map(|s| s.token);
                let default = default_layer
                    .and_then(|layer| layer.get(alias))
                    .map(|v| v.token)
                    .or(semantic)
                    .ok_or_else(|| ThemeError::MissingLightDefault {
                        alias: alias.join("."),
                        theme: self.options.default_theme.clone(),
                    })?;

                let is_duration = std::iter::once(semantic)
                    .flatten()
                    .chain(
                        self.layers
                            .layers
                            .iter()
                            .filter_map(|l| l.get(alias).map(|v| v.token)),
                    )
                    .any(|t| t.token_type == Some(TokenType::Duration));

                Ok(AliasDeclaration {
                    name: alias.join("."),
                    variable: css_variable(alias),
                    theme_variable: self.theme_variable(alias),
                    default: default.value.clone(),
                    is_duration,
                })
            })
            .collect()
    }

    fn theme_variable(&self, alias: &[String]) -> String {
        let mut segments = Vec::with_capacity(alias.len() + 1);
        segments.push(self.options.theme_prefix.as_str());
        segments.extend(alias.iter().map(String::as_str));
        css_variable(&segments)
    }

    /// Component values keep references to semantic aliases as `var()` so
    /// component styles follow theme changes
    fn component_value(&self, token: &ResolvedToken) -> ThemeResult<String> {
        if token.references.is_empty() {
            return Ok(token.value.clone());
        }
        substitute(&token.raw, |target| self.reference_value(target))
    }

    fn reference_value(&self, target: &str) -> ThemeResult<String> {
        for hop in self.graph.alias_chain(target) {
            match self.options.roots.classify(&hop.path) {
                TokenRole::Semantic { alias } => return Ok(format!("var({})", css_variable(alias))),
                // An embedded reference ends the alias chain; its own references
                // may still reach a semantic alias.
                TokenRole::Component if hop.alias_of().is_none() && !hop.references.is_empty() => {
                    return self.component_value(hop);
                }
                _ => {}
            }
        }

        self.graph
            .get(target)
            .map(|t| t.value.clone())
            .ok_or_else(|| ThemeError::UnknownToken {
                path: target.to_string(),
            })
    }
}

fn claim(owners: &mut HashMap<String, String>, variable: &str, owner: String) -> ThemeResult<()> {
    match owners.entry(variable.to_string()) {
        Entry::Occupied(entry) => Err(ThemeError::VariableCollision {
            variable: variable.to_string(),
            first: entry.get().clone(),
            second: owner,
        }),
        Entry::Vacant(entry) => {
            entry.insert(owner);
            Ok(())
        }
    }
}

use anyhow::{anyhow, Context, Result};
use halo_bundle::{BuildOptions, BundleOptions};
use halo_compiler_css::ThemeOptions;
use halo_tokens::{RootSegments, TokenDocument};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "halo.config.json";

/// Halo configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for token documents, relative to the project root
    #[serde(default = "default_tokens")]
    pub tokens: Vec<String>,

    /// Root directory of the component stylesheets
    #[serde(default = "default_components")]
    pub components: String,

    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default = "default_class_prefix")]
    pub class_prefix: String,

    #[serde(default = "default_variables_file")]
    pub variables_file: String,

    #[serde(default = "default_bundle_name")]
    pub bundle_name: String,

    /// Theme block selector; `{theme}` is replaced by the layer name
    #[serde(default = "default_theme_selector")]
    pub theme_selector: String,

    #[serde(default = "default_theme")]
    pub default_theme: String,

    #[serde(default = "default_semantic_root")]
    pub semantic_root: String,

    #[serde(default = "default_theme_root")]
    pub theme_root: String,

    #[serde(default = "default_component_root")]
    pub component_root: String,

    /// Extra variables zeroed under reduced motion
    #[serde(default)]
    pub motion_variables: Vec<String>,

    /// Extra top-level token roots the linter accepts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_roots: Vec<String>,

    #[serde(default)]
    pub strict: bool,
}

fn default_tokens() -> Vec<String> {
    vec!["tokens/**/*.json".to_string()]
}

fn default_components() -> String {
    "src/components".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_class_prefix() -> String {
    "ha".to_string()
}

fn default_variables_file() -> String {
    "halo-variables.css".to_string()
}

fn default_bundle_name() -> String {
    "halo".to_string()
}

fn default_theme_selector() -> String {
    "[data-theme=\"{theme}\"]".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_semantic_root() -> String {
    "semantic".to_string()
}

fn default_theme_root() -> String {
    "theme".to_string()
}

fn default_component_root() -> String {
    "component".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tokens: default_tokens(),
            components: default_components(),
            out_dir: default_out_dir(),
            class_prefix: default_class_prefix(),
            variables_file: default_variables_file(),
            bundle_name: default_bundle_name(),
            theme_selector: default_theme_selector(),
            default_theme: default_theme(),
            semantic_root: default_semantic_root(),
            theme_root: default_theme_root(),
            component_root: default_component_root(),
            motion_variables: Vec::new(),
            extra_roots: Vec::new(),
            strict: false,
        }
    }
}

impl Config {
    /// Load config from a directory
    ///
    /// An explicit `path` must exist; a missing default config file means
    /// defaults.
    pub fn load(cwd: &Path, path: Option<&Path>) -> Result<Self> {
        let (config_path, required) = match path {
            Some(path) => (cwd.join(path), true),
            None => (cwd.join(DEFAULT_CONFIG_NAME), false),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?;
            debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else if required {
            Err(anyhow!("Config file not found: {}", config_path.display()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn roots(&self) -> RootSegments {
        RootSegments {
            semantic: self.semantic_root.clone(),
            theme: self.theme_root.clone(),
            component: self.component_root.clone(),
        }
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            theme: ThemeOptions {
                roots: self.roots(),
                default_theme: self.default_theme.clone(),
                theme_selector: self.theme_selector.clone(),
                motion_variables: self.motion_variables.clone(),
                ..Default::default()
            },
            bundle: BundleOptions {
                class_prefix: self.class_prefix.clone(),
                bundle_name: self.bundle_name.clone(),
                variables_file: self.variables_file.clone(),
                strict: self.strict,
            },
            extra_roots: self.extra_roots.clone(),
        }
    }

    pub fn get_components_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.components)
    }

    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    /// Read every token document matched by the `tokens` patterns
    ///
    /// Documents are sorted by path so merge order is stable. Each document
    /// is named by its path relative to `cwd`.
    pub fn token_documents(&self, cwd: &Path) -> Result<Vec<TokenDocument>> {
        let mut paths = Vec::new();
        for pattern in &self.tokens {
            let full = cwd.join(pattern);
            let full = full.to_string_lossy();
            let entries = glob::glob(&full).with_context(|| format!("Invalid token pattern '{}'", pattern))?;
            for entry in entries {
                let path = entry?;
                if path.is_file() {
                    paths.push(path);
                }
            }
        }
        paths.sort();
        paths.dedup();

        if paths.is_empty() {
            return Err(anyhow!(
                "No token documents match {}",
                self.tokens.join(", ")
            ));
        }

        paths
            .into_iter()
            .map(|path| -> Result<TokenDocument> {
                let source = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let name = path.strip_prefix(cwd).unwrap_or(&path).display().to_string();
                Ok(TokenDocument::new(name, source))
            })
            .collect()
    }
}

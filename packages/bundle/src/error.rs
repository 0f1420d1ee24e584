use halo_compiler_css::ThemeError;
use halo_compiler_html::RewriteError;
use halo_resolver::ResolveError;
use halo_tokens::LoadError;
use std::path::PathBuf;
use thiserror::Error;

pub type EmitResult<T> = Result<T, EmitError>;
pub type BuildResult<T> = Result<T, BuildError>;

/// Invariant violations found while checking an emission plan
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmitError {
    #[error("Components '{first}' and '{second}' both export '{identifier}'")]
    DuplicateComponent {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("Pattern '{pattern}' holds {found} components, expected {expected}")]
    PatternMismatch {
        pattern: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Class-scoped stylesheet for '{component}' is unbalanced: {reason}")]
    Unbalanced { component: String, reason: String },

    #[error("Unrecognised shadow-scope syntax in '{component}': {selector}")]
    ResidualShadowSyntax { component: String, selector: String },
}

/// Any failure of a full build
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("Failed to {action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| BuildError::Io { action, path, source }
    }
}

use thiserror::Error;

pub type ResolveResult<T> = Result<T, ResolveError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Circular reference: {}", cycle.join(" -> "))]
    CircularReference { cycle: Vec<String> },

    #[error("Unresolved reference '{{{path}}}' in token '{referenced_by}'")]
    UnresolvedReference { path: String, referenced_by: String },
}

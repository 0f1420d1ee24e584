use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Malformed token document '{document}': {message}")]
    Malformed {
        document: String,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Token document '{document}' must contain an object at its root")]
    NotAnObject { document: String },

    #[error("Invalid value for token '{path}' in '{document}': expected a string or number, found {found}")]
    InvalidValue {
        document: String,
        path: String,
        found: String,
    },

    #[error("Invalid path segment '{segment}' under '{parent}' in '{document}'")]
    InvalidSegment {
        document: String,
        parent: String,
        segment: String,
    },

    #[error("Token '{path}' in '{document}' has a value and a nested member '{child}'")]
    LeafWithChildren {
        document: String,
        path: String,
        child: String,
    },

    #[error("Duplicate token '{path}' defined in '{first}' and '{second}'")]
    DuplicateToken {
        path: String,
        first: String,
        second: String,
    },
}

impl LoadError {
    pub fn malformed(document: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::Malformed {
            document: document.into(),
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }

    pub fn duplicate(
        path: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateToken {
            path: path.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

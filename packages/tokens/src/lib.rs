pub mod ast;
pub mod error;
pub mod loader;
pub mod reference;
pub mod roles;

pub use ast::{NodeId, NodeKind, TokenGraph, TokenNode, TokenType, TokenValue};
pub use error::{LoadError, LoadResult};
pub use loader::{load_documents, TokenDocument};
pub use roles::{RootSegments, TokenRole};

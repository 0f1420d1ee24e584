//! Reference resolution for the token graph.
//!
//! [`resolve`] turns a [`TokenGraph`](halo_tokens::TokenGraph) into a
//! [`ResolvedGraph`] in which every leaf carries a terminal literal. It is
//! all-or-nothing: either every reference resolves or the first circular or
//! unresolved reference is returned.

pub mod error;
pub mod layers;
pub mod resolved;
pub mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use layers::{SemanticAlias, ThemeLayer, ThemeLayers, ThemeValue};
pub use resolved::{ResolvedGraph, ResolvedToken};
pub use resolver::resolve;

mod context;
mod theme;

pub use theme::{compile_variables, CompiledVariables, ThemeError, ThemeOptions, ThemeResult};

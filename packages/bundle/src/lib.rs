//! # Bundle - Multi-target emission
//!
//! Takes the variables stylesheet and every shadow-scoped component
//! stylesheet and plans four synchronized output families:
//!
//! - `shadow/` unmodified copies
//! - `html/` class-scoped rewrites
//! - `js/` string-export modules, type stubs and an index
//! - `bundle/` one concatenation per scoping model
//!
//! A plan is verified as a whole before anything is written, so a failing
//! build leaves the output directory untouched.

mod build;
mod codegen;
mod coordinator;
mod error;
mod plan;
mod stylesheet;

pub use build::{build, prepare, BuildOptions, BuildReport, PreparedBuild};
pub use codegen::{index_module, string_declaration, string_module, ExportEntry, MODULE_HEADER};
pub use coordinator::{BundleOptions, Coordinator, BUNDLE_DIR, HTML_DIR, JS_DIR, SHADOW_DIR};
pub use error::{BuildError, BuildResult, EmitError, EmitResult};
pub use plan::{EmissionPlan, EmissionSet, Pattern, PlannedFile, SectionCounts};
pub use stylesheet::{discover_stylesheets, ComponentStylesheet};

pub use halo_common::{FileSystem, MockFileSystem, RealFileSystem};

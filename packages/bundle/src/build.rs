use crate::coordinator::{BundleOptions, Coordinator};
use crate::error::BuildResult;
use crate::plan::EmissionPlan;
use crate::stylesheet::discover_stylesheets;
use halo_common::FileSystem;
use halo_compiler_css::{compile_variables, ThemeOptions};
use halo_linter::{lint_graph, Diagnostic, DiagnosticLevel, LintOptions};
use halo_resolver::resolve;
use halo_tokens::{load_documents, TokenDocument};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub theme: ThemeOptions,
    pub bundle: BundleOptions,
    /// Extra top-level token roots accepted by the linter
    pub extra_roots: Vec<String>,
}

/// Outcome of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub tokens: usize,
    pub components: usize,
    pub layers: Vec<String>,
    pub residual: usize,
    pub diagnostics: Vec<Diagnostic>,
    /// Written paths, empty when only planned
    pub written: Vec<PathBuf>,
}

/// A verified plan plus its report, not yet written
#[derive(Debug, Clone)]
pub struct PreparedBuild {
    pub plan: EmissionPlan,
    pub report: BuildReport,
}

/// Load, resolve, emit and verify without touching the output directory
#[instrument(skip_all, fields(documents = documents.len(), components_root = %components_root.display()))]
pub fn prepare(
    fs: &dyn FileSystem,
    documents: &[TokenDocument],
    components_root: &Path,
    options: &BuildOptions,
) -> BuildResult<PreparedBuild> {
    let graph = load_documents(documents)?;
    let resolved = resolve(&graph)?;
    let variables = compile_variables(&resolved, &options.theme)?;

    let diagnostics = lint_graph(
        &resolved,
        LintOptions {
            roots: options.theme.roots.clone(),
            extra_roots: options.extra_roots.clone(),
            ..Default::default()
        },
    );
    for diagnostic in &diagnostics {
        if diagnostic.level != DiagnosticLevel::Info {
            warn!(rule = %diagnostic.rule, path = %diagnostic.path, "{}", diagnostic.message);
        }
    }

    let components = discover_stylesheets(fs, components_root)?;
    let coordinator = Coordinator::new(options.bundle.clone())?;
    let plan = coordinator.plan(&components, &variables.css)?;
    plan.verify()?;

    let report = BuildReport {
        tokens: resolved.len(),
        components: components.len(),
        layers: variables.layers,
        residual: plan.residual_count(),
        diagnostics,
        written: Vec::new(),
    };
    Ok(PreparedBuild { plan, report })
}

/// Run the whole pipeline and write every output under `out_dir`
pub fn build(
    fs: &dyn FileSystem,
    documents: &[TokenDocument],
    components_root: &Path,
    out_dir: &Path,
    options: &BuildOptions,
) -> BuildResult<BuildReport> {
    let PreparedBuild { plan, mut report } = prepare(fs, documents, components_root, options)?;
    report.written = plan.write(fs, out_dir)?;

    info!(
        tokens = report.tokens,
        components = report.components,
        files = report.written.len(),
        "Build complete"
    );
    Ok(report)
}

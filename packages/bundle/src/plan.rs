use crate::error::{BuildError, BuildResult, EmitError, EmitResult};
use halo_common::FileSystem;
use halo_compiler_html::verify_balance;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Output family a planned file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Shadow,
    Html,
    ShadowModule,
    HtmlModule,
    ShadowDeclaration,
    HtmlDeclaration,
    Index,
    Bundle,
    Variables,
}

/// One file the plan will write, relative to the output directory
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub contents: String,
    pub pattern: Pattern,
}

/// The parallel representations of one component
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionSet {
    /// `<category>/<name>` of the source stylesheet
    pub label: String,
    pub shadow_css: String,
    pub html_css: String,
    pub shadow_export: String,
    pub html_export: String,
    /// Shadow-scope lines the rewrite left in place
    pub residual: Vec<String>,
}

/// Component counts per output family, recorded while planning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounts {
    /// Components re-exported by the index (two exports each)
    pub index_entries: usize,
    pub shadow_bundle: usize,
    pub html_bundle: usize,
}

/// Everything a build would write, held in memory until verified
#[derive(Debug, Clone, Default)]
pub struct EmissionPlan {
    pub sets: Vec<EmissionSet>,
    pub files: Vec<PlannedFile>,
    pub sections: SectionCounts,
    pub strict: bool,
}

impl EmissionPlan {
    pub fn files_of(&self, pattern: Pattern) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(move |f| f.pattern == pattern)
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&PlannedFile> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }

    pub fn residual_count(&self) -> usize {
        self.sets.iter().map(|s| s.residual.len()).sum()
    }

    /// Check the cross-pattern invariants; nothing may be written on error
    pub fn verify(&self) -> EmitResult<()> {
        self.verify_identifiers()?;

        let expected = self.sets.len();
        let counts = [
            ("shadow", self.files_of(Pattern::Shadow).count()),
            ("html", self.files_of(Pattern::Html).count()),
            ("shadow-module", self.files_of(Pattern::ShadowModule).count()),
            ("html-module", self.files_of(Pattern::HtmlModule).count()),
            ("shadow-declaration", self.files_of(Pattern::ShadowDeclaration).count()),
            ("html-declaration", self.files_of(Pattern::HtmlDeclaration).count()),
            ("index", self.sections.index_entries),
            ("shadow-bundle", self.sections.shadow_bundle),
            ("html-bundle", self.sections.html_bundle),
        ];
        for (pattern, found) in counts {
            if found != expected {
                return Err(EmitError::PatternMismatch {
                    pattern,
                    expected,
                    found,
                });
            }
        }

        for set in &self.sets {
            verify_balance(&set.shadow_css, &set.html_css).map_err(|e| EmitError::Unbalanced {
                component: set.label.clone(),
                reason: e.to_string(),
            })?;

            if self.strict {
                if let Some(selector) = set.residual.first() {
                    return Err(EmitError::ResidualShadowSyntax {
                        component: set.label.clone(),
                        selector: selector.clone(),
                    });
                }
            }
        }

        debug!(components = expected, files = self.files.len(), "Emission plan verified");
        Ok(())
    }

    fn verify_identifiers(&self) -> EmitResult<()> {
        let mut owners: HashMap<&str, &str> = HashMap::new();
        let exports = self.sets.iter().flat_map(|set| {
            [set.shadow_export.as_str(), set.html_export.as_str()]
                .into_iter()
                .map(move |identifier| (identifier, set.label.as_str()))
        });

        for (identifier, label) in exports {
            if let Some(first) = owners.insert(identifier, label) {
                return Err(EmitError::DuplicateComponent {
                    identifier: identifier.to_string(),
                    first: first.to_string(),
                    second: label.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Verify, then write every file under `out_dir`
    ///
    /// Returns the written paths in plan order.
    #[instrument(skip(self, fs), fields(out_dir = %out_dir.display()))]
    pub fn write(&self, fs: &dyn FileSystem, out_dir: &Path) -> BuildResult<Vec<PathBuf>> {
        self.verify()?;

        let dirs: BTreeSet<PathBuf> = self
            .files
            .iter()
            .filter_map(|f| out_dir.join(&f.path).parent().map(Path::to_path_buf))
            .collect();
        for dir in &dirs {
            fs.create_dir_all(dir).map_err(BuildError::io("create", dir))?;
        }

        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let path = out_dir.join(&file.path);
            fs.write(&path, &file.contents)
                .map_err(BuildError::io("write", &path))?;
            written.push(path);
        }

        info!(files = written.len(), "Wrote build outputs");
        Ok(written)
    }
}

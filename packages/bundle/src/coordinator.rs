use crate::codegen::{index_module, string_declaration, string_module, ExportEntry};
use crate::error::BuildResult;
use crate::plan::{EmissionPlan, EmissionSet, Pattern, PlannedFile};
use crate::stylesheet::ComponentStylesheet;
use halo_common::to_camel_case;
use halo_compiler_html::ScopeRewriter;
use std::path::PathBuf;
use tracing::{debug, instrument};

pub const SHADOW_DIR: &str = "shadow";
pub const HTML_DIR: &str = "html";
pub const JS_DIR: &str = "js";
pub const BUNDLE_DIR: &str = "bundle";

#[derive(Debug, Clone, PartialEq)]
pub struct BundleOptions {
    /// Scope class prefix, `ha` gives `.ha-<name>`
    pub class_prefix: String,
    /// Stem of the two unified bundles
    pub bundle_name: String,
    pub variables_file: String,
    /// Treat residual shadow-scope syntax as fatal
    pub strict: bool,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            class_prefix: "ha".to_string(),
            bundle_name: "halo".to_string(),
            variables_file: "halo-variables.css".to_string(),
            strict: false,
        }
    }
}

/// Turns component stylesheets into the synchronized output patterns
#[derive(Debug, Clone)]
pub struct Coordinator {
    options: BundleOptions,
    rewriter: ScopeRewriter,
}

impl Coordinator {
    pub fn new(options: BundleOptions) -> BuildResult<Self> {
        let rewriter = ScopeRewriter::new(options.class_prefix.clone())?;
        Ok(Self { options, rewriter })
    }

    pub fn options(&self) -> &BundleOptions {
        &self.options
    }

    /// Build the in-memory plan for `components` and the variables stylesheet
    ///
    /// Rewrite failures abort; invariants across patterns are left to
    /// [`EmissionPlan::verify`].
    #[instrument(skip_all, fields(components = components.len()))]
    pub fn plan(&self, components: &[ComponentStylesheet], variables_css: &str) -> BuildResult<EmissionPlan> {
        let mut plan = EmissionPlan {
            strict: self.options.strict,
            ..Default::default()
        };
        let mut exports = Vec::with_capacity(components.len() * 2);
        let mut shadow_bundle = String::new();
        let mut html_bundle = String::new();

        for component in components {
            let rewritten = self.rewriter.rewrite(&component.source, &component.name)?;
            let camel = to_camel_case(&component.name);
            let set = EmissionSet {
                label: component.label(),
                shadow_css: component.source.clone(),
                html_css: rewritten.css,
                shadow_export: format!("{}Styles", camel),
                html_export: format!("{}HtmlStyles", camel),
                residual: rewritten.residual,
            };
            debug!(component = %set.label, residual = set.residual.len(), "Planned component");

            let css_name = format!("{}.css", component.name);
            let shadow_module = format!("{}.styles.js", component.name);
            let html_module = format!("{}.html-styles.js", component.name);

            plan.files.extend([
                PlannedFile {
                    path: PathBuf::from(SHADOW_DIR).join(component.output_path(&css_name)),
                    contents: set.shadow_css.clone(),
                    pattern: Pattern::Shadow,
                },
                PlannedFile {
                    path: PathBuf::from(HTML_DIR).join(component.output_path(&css_name)),
                    contents: set.html_css.clone(),
                    pattern: Pattern::Html,
                },
                PlannedFile {
                    path: PathBuf::from(JS_DIR).join(component.output_path(&shadow_module)),
                    contents: string_module(&set.shadow_export, &set.shadow_css),
                    pattern: Pattern::ShadowModule,
                },
                PlannedFile {
                    path: PathBuf::from(JS_DIR)
                        .join(component.output_path(&format!("{}.styles.d.ts", component.name))),
                    contents: string_declaration(&set.shadow_export),
                    pattern: Pattern::ShadowDeclaration,
                },
                PlannedFile {
                    path: PathBuf::from(JS_DIR).join(component.output_path(&html_module)),
                    contents: string_module(&set.html_export, &set.html_css),
                    pattern: Pattern::HtmlModule,
                },
                PlannedFile {
                    path: PathBuf::from(JS_DIR)
                        .join(component.output_path(&format!("{}.html-styles.d.ts", component.name))),
                    contents: string_declaration(&set.html_export),
                    pattern: Pattern::HtmlDeclaration,
                },
            ]);

            exports.push(ExportEntry {
                identifier: set.shadow_export.clone(),
                specifier: module_specifier(component, &shadow_module),
            });
            exports.push(ExportEntry {
                identifier: set.html_export.clone(),
                specifier: module_specifier(component, &html_module),
            });
            plan.sections.index_entries += 1;

            push_section(&mut shadow_bundle, &set.label, &set.shadow_css);
            plan.sections.shadow_bundle += 1;
            push_section(&mut html_bundle, &set.label, &set.html_css);
            plan.sections.html_bundle += 1;

            plan.sets.push(set);
        }

        let index = index_module(&exports);
        let bundle_dir = PathBuf::from(BUNDLE_DIR);
        plan.files.extend([
            PlannedFile {
                path: PathBuf::from(JS_DIR).join("index.js"),
                contents: index.clone(),
                pattern: Pattern::Index,
            },
            PlannedFile {
                path: PathBuf::from(JS_DIR).join("index.d.ts"),
                contents: index,
                pattern: Pattern::Index,
            },
            PlannedFile {
                path: bundle_dir.join(format!("{}.shadow.css", self.options.bundle_name)),
                contents: shadow_bundle,
                pattern: Pattern::Bundle,
            },
            PlannedFile {
                path: bundle_dir.join(format!("{}.html.css", self.options.bundle_name)),
                contents: html_bundle,
                pattern: Pattern::Bundle,
            },
            PlannedFile {
                path: PathBuf::from(&self.options.variables_file),
                contents: variables_css.to_string(),
                pattern: Pattern::Variables,
            },
        ]);

        Ok(plan)
    }
}

/// `./<category>/<file>` with forward slashes on every platform
fn module_specifier(component: &ComponentStylesheet, file_name: &str) -> String {
    match &component.category {
        Some(category) => format!("./{}/{}", category, file_name),
        None => format!("./{}", file_name),
    }
}

fn push_section(bundle: &mut String, label: &str, css: &str) {
    if !bundle.is_empty() {
        bundle.push('\n');
    }
    bundle.push_str(&format!("/* {} */\n", label));
    bundle.push_str(css);
    if !css.ends_with('\n') {
        bundle.push('\n');
    }
}

use crate::error::{BuildError, BuildResult};
use halo_common::FileSystem;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// One shadow-scoped component stylesheet, read once
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentStylesheet {
    /// File stem; the component's name everywhere downstream
    pub name: String,
    /// Subdirectory below the components root, `/`-separated
    pub category: Option<String>,
    /// Path relative to the components root
    pub relative_path: PathBuf,
    pub source: String,
}

impl ComponentStylesheet {
    pub fn new(name: impl Into<String>, category: Option<&str>, source: impl Into<String>) -> Self {
        let name = name.into();
        let category = category.filter(|c| !c.is_empty()).map(str::to_string);
        let mut relative_path = PathBuf::new();
        if let Some(category) = &category {
            relative_path.extend(category.split('/'));
        }
        relative_path.push(format!("{}.css", name));

        Self {
            name,
            category,
            relative_path,
            source: source.into(),
        }
    }

    /// `<category>/<name>`, or just the name
    pub fn label(&self) -> String {
        match &self.category {
            Some(category) => format!("{}/{}", category, self.name),
            None => self.name.clone(),
        }
    }

    /// Output path for this component with a different file name
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        let mut path = PathBuf::new();
        if let Some(category) = &self.category {
            path.extend(category.split('/'));
        }
        path.push(file_name);
        path
    }
}

/// Read every `*.css` file under `root`, sorted by relative path
///
/// A missing root yields no components.
#[instrument(skip(fs), fields(root = %root.display()))]
pub fn discover_stylesheets(fs: &dyn FileSystem, root: &Path) -> BuildResult<Vec<ComponentStylesheet>> {
    if !fs.exists(root) {
        warn!("Components directory does not exist");
        return Ok(Vec::new());
    }

    let files = fs
        .walk_files(root, "css")
        .map_err(BuildError::io("list", root))?;
    let mut stylesheets = Vec::with_capacity(files.len());

    for path in files {
        let relative_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        let Some(name) = relative_path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "Skipping stylesheet with a non UTF-8 name");
            continue;
        };

        let category = relative_path
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .filter(|category| !category.is_empty());

        let source = fs
            .read_to_string(&path)
            .map_err(BuildError::io("read", &path))?;

        debug!(component = name, category = ?category, "Discovered stylesheet");
        stylesheets.push(ComponentStylesheet {
            name: name.to_string(),
            category,
            relative_path: relative_path.clone(),
            source,
        });
    }

    Ok(stylesheets)
}

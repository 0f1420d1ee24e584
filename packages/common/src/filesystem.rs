use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File system abstraction for build inputs, outputs and testing
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a file, replacing any previous contents
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Create a directory and all of its parents. Creating an existing
    /// directory is not an error.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// List every file under `root` with the given extension, sorted by path
    fn walk_files(&self, root: &Path, extension: &str) -> io::Result<Vec<PathBuf>>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn walk_files(&self, root: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry.map_err(io::Error::from)?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(extension)
            {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }
}

/// In-memory file system for testing
///
/// Interior mutability keeps the trait methods `&self`, matching the real
/// implementation.
#[derive(Debug, Default)]
pub struct MockFileSystem {
    files: std::cell::RefCell<BTreeMap<PathBuf, String>>,
    dirs: std::cell::RefCell<std::collections::BTreeSet<PathBuf>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.register_dirs(parent);
        }
        self.files.borrow_mut().insert(path, contents.into());
    }

    /// Contents of a file, if it was written or added
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Every file path currently held, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    fn register_dirs(&self, dir: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in dir.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let parent_missing = path
            .parent()
            .map(|p| !p.as_os_str().is_empty() && !self.dirs.borrow().contains(p))
            .unwrap_or(false);
        if parent_missing {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent directory of {} does not exist", path.display()),
            ));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.register_dirs(path);
        Ok(())
    }

    fn walk_files(&self, root: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|p| p.starts_with(root))
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(extension))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mock_write_requires_parent() {
        let fs = MockFileSystem::new();
        let path = Path::new("dist/html/button.css");

        assert!(fs.write(path, "x").is_err());

        fs.create_dir_all(Path::new("dist/html")).unwrap();
        fs.write(path, "x").unwrap();
        assert_eq!(fs.get(path).as_deref(), Some("x"));
        assert!(fs.exists(Path::new("dist")));
    }

    #[test]
    fn test_mock_create_dir_all_is_idempotent() {
        let fs = MockFileSystem::new();
        fs.create_dir_all(Path::new("out/a")).unwrap();
        fs.create_dir_all(Path::new("out/a")).unwrap();
        assert!(fs.exists(Path::new("out/a")));
    }

    #[test]
    fn test_mock_walk_filters_extension() {
        let fs = MockFileSystem::new();
        fs.add_file("src/forms/button.css", ":host {}");
        fs.add_file("src/forms/button.ts", "");
        fs.add_file("other/card.css", "");

        let files = fs.walk_files(Path::new("src"), "css").unwrap();
        assert_eq!(files, vec![PathBuf::from("src/forms/button.css")]);
    }

    #[test]
    fn test_real_walk_files_sorted() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        std::fs::create_dir_all(root.join("b")).unwrap();
        std::fs::write(root.join("b/z.css"), "").unwrap();
        std::fs::write(root.join("a.css"), "").unwrap();
        std::fs::write(root.join("notes.md"), "").unwrap();

        let files = RealFileSystem.walk_files(root, "css").unwrap();
        assert_eq!(files, vec![root.join("a.css"), root.join("b/z.css")]);
    }

    #[test]
    fn test_real_create_dir_all_twice() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("x/y");
        RealFileSystem.create_dir_all(&dir).unwrap();
        RealFileSystem.create_dir_all(&dir).unwrap();
        assert!(RealFileSystem.exists(&dir));
    }
}

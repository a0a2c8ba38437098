//! In-memory [`FileSystem`] for fast, isolated pipeline tests.

use crate::errors::GenerateError;
use crate::io::{FileSystem, SourceFilter};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Shared in-memory file tree.
///
/// Clones share state, so a test can keep one handle and give another to the
/// pipeline, then inspect what was written.
///
/// ```rust
/// use testgen::testkit::MemoryFileSystem;
/// use testgen::io::FileSystem;
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new()
///     .with_file("/src/Class1.cs", "public class Class1 {}")
///     .with_dir("/out");
/// assert!(fs.is_dir(Path::new("/src")));
/// assert!(fs.is_dir(Path::new("/out")));
/// ```
#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
    dirs: Arc<RwLock<BTreeSet<PathBuf>>>,
    vanished: Arc<RwLock<BTreeSet<PathBuf>>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file; its ancestor directories are created implicitly.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, content.into());
        self
    }

    pub fn with_files<'a>(self, files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        files
            .into_iter()
            .fold(self, |fs, (path, content)| fs.with_file(path, content))
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path.as_ref());
        self
    }

    /// A file that is listed but gone by the time it is read.
    pub fn with_vanished_file(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.vanished
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path);
        self
    }

    fn add_dir(&self, path: &Path) {
        let mut dirs = self.dirs.write().unwrap_or_else(PoisonError::into_inner);
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path.as_ref())
            .cloned()
    }

    pub fn has_file(&self, path: impl AsRef<Path>) -> bool {
        self.file(path).is_some()
    }

    /// Files directly inside `dir`, sorted.
    pub fn files_in(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let dir = dir.as_ref();
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect()
    }
}

impl std::fmt::Debug for MemoryFileSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file_count = self.files.read().map(|f| f.len()).unwrap_or(0);
        f.debug_struct("MemoryFileSystem")
            .field("file_count", &file_count)
            .finish_non_exhaustive()
    }
}

impl FileSystem for MemoryFileSystem {
    fn list_files(&self, dir: &Path, filter: &SourceFilter) -> Result<Vec<PathBuf>, GenerateError> {
        if !self.is_dir(dir) {
            return Err(GenerateError::invalid_input_with_path(
                "Source directory does not exist",
                dir,
            ));
        }
        let in_scope = |path: &Path| {
            if filter.recursive {
                path.starts_with(dir) && path != dir
            } else {
                path.parent() == Some(dir)
            }
        };

        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        let vanished = self.vanished.read().unwrap_or_else(PoisonError::into_inner);
        let mut listed: Vec<PathBuf> = files
            .keys()
            .chain(vanished.iter())
            .filter(|path| in_scope(path.as_path()) && filter.accepts(path))
            .cloned()
            .collect();
        listed.sort();
        Ok(listed)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, GenerateError> {
        self.file(path).ok_or_else(|| {
            GenerateError::invalid_input_with_path("Failed to read file: not found", path)
        })
    }

    fn write_file(
        &self,
        dir: &Path,
        filename: &str,
        text: &str,
    ) -> Result<PathBuf, GenerateError> {
        if !self.is_dir(dir) {
            return Err(GenerateError::invalid_input_with_path(
                "Destination directory does not exist",
                dir,
            ));
        }
        let path = dir.join(filename);
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.clone(), text.to_string());
        Ok(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(path)
    }
}

use crate::errors::GenerateError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default extension of source files.
pub const SOURCE_EXTENSION: &str = "cs";

/// Which files under a source directory are enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFilter {
    pub extension: String,
    pub recursive: bool,
    pub ignore_patterns: Vec<String>,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self {
            extension: SOURCE_EXTENSION.to_string(),
            recursive: false,
            ignore_patterns: Vec::new(),
        }
    }
}

impl SourceFilter {
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Whether `path` has the source extension and matches no ignore pattern.
    pub fn accepts(&self, path: &Path) -> bool {
        let extension_matches = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false);
        if !extension_matches {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self.ignore_patterns.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
        })
    }

    /// Reject ignore patterns that are not valid globs.
    pub fn validate(&self) -> Result<(), GenerateError> {
        for pattern in &self.ignore_patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                GenerateError::config(format!("Invalid ignore pattern '{}': {}", pattern, e))
            })?;
        }
        Ok(())
    }
}

pub struct SourceWalker {
    root: PathBuf,
    filter: SourceFilter,
}

impl SourceWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            filter: SourceFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: SourceFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>, GenerateError> {
        if !self.root.is_dir() {
            return Err(GenerateError::invalid_input_with_path(
                "Source directory does not exist",
                &self.root,
            ));
        }

        let max_depth = if self.filter.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(max_depth) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                GenerateError::io_with_path(format!("Failed to list directory: {}", e), path)
            })?;
            if entry.file_type().is_file() && self.filter.accepts(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}

pub fn find_source_files(root: &Path, filter: &SourceFilter) -> Result<Vec<PathBuf>, GenerateError> {
    SourceWalker::new(root.to_path_buf())
        .with_filter(filter.clone())
        .walk()
}

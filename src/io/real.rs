//! Disk-backed [`FileSystem`].

use super::traits::FileSystem;
use super::walker::{find_source_files, SourceFilter};
use crate::errors::GenerateError;
use std::fs;
use std::path::{Path, PathBuf};

/// Production file system, delegating to `std::fs`.
#[derive(Debug, Default, Clone)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn list_files(&self, dir: &Path, filter: &SourceFilter) -> Result<Vec<PathBuf>, GenerateError> {
        find_source_files(dir, filter)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, GenerateError> {
        fs::read_to_string(path).map_err(|e| GenerateError::from_io("Failed to read file", path, &e))
    }

    fn write_file(
        &self,
        dir: &Path,
        filename: &str,
        text: &str,
    ) -> Result<PathBuf, GenerateError> {
        if !dir.is_dir() {
            return Err(GenerateError::invalid_input_with_path(
                "Destination directory does not exist",
                dir,
            ));
        }
        let path = dir.join(filename);
        fs::write(&path, text)
            .map_err(|e| GenerateError::from_io("Failed to write file", &path, &e))?;
        Ok(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

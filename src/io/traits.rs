//! I/O trait definitions for generation runs.
//!
//! Pipeline stages only touch the disk through [`FileSystem`], so tests can
//! run the whole pipeline against an in-memory implementation
//! ([`MemoryFileSystem`](crate::testkit::MemoryFileSystem)).

use super::walker::SourceFilter;
use crate::errors::GenerateError;
use std::path::{Path, PathBuf};

/// File system operations used by the pipeline.
///
/// Implementations must be `Send + Sync`; one instance is shared by every
/// stage worker.
pub trait FileSystem: Send + Sync {
    /// Source files under `dir` accepted by `filter`, sorted by path.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `dir` does not exist or is not a directory.
    fn list_files(&self, dir: &Path, filter: &SourceFilter) -> Result<Vec<PathBuf>, GenerateError>;

    /// Read a file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the file does not exist, `Io` for any other failure.
    fn read_to_string(&self, path: &Path) -> Result<String, GenerateError>;

    /// Create or overwrite `dir/filename` and return the written path.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `dir` does not exist, `Io` for any other failure.
    fn write_file(&self, dir: &Path, filename: &str, text: &str)
        -> Result<PathBuf, GenerateError>;

    fn is_dir(&self, path: &Path) -> bool;
}

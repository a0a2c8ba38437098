//! Units of work handed from one pipeline stage to the next.
//!
//! Each value is moved into the next stage's queue and never touched again by
//! the producer.

use super::syntax::ClassDeclaration;
use std::path::PathBuf;

/// Raw text of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// One class to generate a fixture for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassUnit {
    pub declaration: ClassDeclaration,
    /// Namespace imported by the fixture so the subject type resolves
    pub namespace: Option<String>,
    /// File the class was found in
    pub source: PathBuf,
}

/// A fully rendered fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub filename: String,
    pub text: String,
}

impl GeneratedFile {
    /// `<ClassName>Test.<extension>`
    pub fn filename_for(class_name: &str, extension: &str) -> String {
        format!("{}Test.{}", class_name, extension)
    }
}

//! Structural parsing of source files.
//!
//! A [`SourceParser`] turns raw source text into a [`SyntaxTree`] of class
//! declarations. The pipeline's split stage then turns each public class into
//! a [`ClassUnit`] via [`split_classes`].

pub mod csharp;

use crate::core::{ClassUnit, SourceFile, SyntaxTree};
use crate::errors::GenerateError;

pub use csharp::CSharpParser;

/// Parses source text into a declaration tree.
///
/// Implementations must be thread-safe: the split stage shares one parser
/// across all of its workers.
pub trait SourceParser: Send + Sync {
    /// Parse one file.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Parse` when the text is malformed.
    fn parse(&self, file: &SourceFile) -> Result<SyntaxTree, GenerateError>;
}

/// Split a parsed file into one unit per public class.
///
/// Non-public classes are skipped; a file without public classes yields nothing.
pub fn split_classes(tree: SyntaxTree) -> Vec<ClassUnit> {
    let source = tree.path;
    tree.classes
        .into_iter()
        .filter(|class| class.declaration.is_public())
        .map(|class| ClassUnit {
            declaration: class.declaration,
            namespace: class.namespace,
            source: source.clone(),
        })
        .collect()
}

//! Turning fixture declaration trees into source text.

pub mod csharp;
pub mod writer;

pub use csharp::CSharpRenderer;
pub use writer::CodeWriter;

use crate::synth::FixtureFile;

/// Prints a fixture tree as normalized, consistently indented source.
pub trait SourceRenderer: Send + Sync {
    fn render(&self, file: &FixtureFile) -> String;
}

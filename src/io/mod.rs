pub mod real;
pub mod traits;
pub mod walker;

pub use real::RealFileSystem;
pub use traits::FileSystem;
pub use walker::{find_source_files, SourceFilter, SourceWalker, SOURCE_EXTENSION};

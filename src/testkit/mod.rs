//! Testing infrastructure.
//!
//! - [`MemoryFileSystem`]: in-memory [`FileSystem`](crate::io::FileSystem)
//!   for running the whole pipeline without touching disk
//! - Assertion macros for `Result` values
//!
//! ```rust
//! use testgen::pipeline::GenerationPipeline;
//! use testgen::testkit::MemoryFileSystem;
//! use std::sync::Arc;
//!
//! let fs = MemoryFileSystem::new()
//!     .with_file("/src/Class1.cs", "public class Class1 { public void Run() {} }")
//!     .with_dir("/out");
//! let summary = GenerationPipeline::new()
//!     .with_file_system(Arc::new(fs.clone()))
//!     .generate("/src", "/out")
//!     .unwrap();
//! assert_eq!(summary.written.len(), 1);
//! assert!(fs.has_file("/out/Class1Test.cs"));
//! ```

pub mod assertions;
pub mod mock_fs;

pub use mock_fs::MemoryFileSystem;

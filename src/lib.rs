//! Unit test skeleton generator for C# classes.
//!
//! Reads every source file in a directory, finds its public classes and writes
//! one NUnit (or MSTest) fixture per class, with Moq mocks for the
//! constructor-injected dependencies and one failing test per public method.
//!
//! ```no_run
//! use testgen::pipeline::GenerationPipeline;
//!
//! let summary = GenerationPipeline::new().generate("src/Services", "tests/Generated")?;
//! println!("{}", summary);
//! # Ok::<(), testgen::GenerateError>(())
//! ```

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod synth;
pub mod testkit;

pub use crate::analyzers::{ClassAnalyzer, DependencyPredicate, InterfaceNamingConvention};
pub use crate::config::{GeneratorConfig, StageLimits};
pub use crate::core::{ClassUnit, GeneratedFile, SourceFile, SourceModel};
pub use crate::errors::{GenerateError, Result};
pub use crate::io::{FileSystem, RealFileSystem};
pub use crate::parser::{CSharpParser, SourceParser};
pub use crate::pipeline::{GenerationHandle, GenerationPipeline, GenerationSummary};
pub use crate::render::{CSharpRenderer, SourceRenderer};
pub use crate::synth::{TestFramework, TestSkeletonSynthesizer};

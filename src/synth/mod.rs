//! Unit test skeleton synthesis.
//!
//! A [`TestSkeletonSynthesizer`] turns one [`ClassUnit`](crate::core::ClassUnit)
//! into a [`GeneratedFile`](crate::core::GeneratedFile):
//!
//! ```text
//! ClassUnit --ClassAnalyzer--> SourceModel --build_fixture--> FixtureFile --SourceRenderer--> text
//! ```

pub mod builders;
pub mod fixture;
pub mod framework;
pub mod naming;
pub mod tree;

pub use fixture::{TestSkeletonSynthesizer, DEFAULT_EXTENSION};
pub use framework::TestFramework;
pub use tree::{ClassNode, Expr, FieldNode, FixtureFile, Member, MethodNode, NamespaceNode, Statement};

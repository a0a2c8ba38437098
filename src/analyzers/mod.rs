//! Structural analysis of parsed classes.

pub mod class_analyzer;
pub mod dependency;

pub use class_analyzer::{public_methods, ClassAnalyzer};
pub use dependency::{DependencyPredicate, InterfaceNamingConvention};

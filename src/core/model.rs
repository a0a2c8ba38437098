//! Source model: the class facts a fixture is synthesized from.
//!
//! Produced by [`ClassAnalyzer`](crate::analyzers::ClassAnalyzer), read-only
//! afterwards.

use super::syntax::{Parameter, TypeRef};

/// Shape of one public method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodShape {
    pub name: String,
    /// Parameters in declared order
    pub parameters: Vec<Parameter>,
    pub return_type: TypeRef,
    pub is_void: bool,
}

impl MethodShape {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, return_type: TypeRef) -> Self {
        let is_void = return_type.is_void();
        Self {
            name: name.into(),
            parameters,
            return_type,
            is_void,
        }
    }
}

/// A constructor parameter that will be replaced by a mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyParameter {
    pub identifier: String,
    pub ty: TypeRef,
}

impl From<&Parameter> for DependencyParameter {
    fn from(parameter: &Parameter) -> Self {
        Self {
            identifier: parameter.name.clone(),
            ty: parameter.ty.clone(),
        }
    }
}

/// The constructor chosen for dependency injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionConstructor {
    /// Full parameter list of the constructor, in declared order
    pub parameters: Vec<DependencyParameter>,
}

/// Structural facts about one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModel {
    pub class_name: String,
    /// Type the subject is declared and constructed as: `Cache<object>` for `Cache<T>`
    pub subject_type: TypeRef,
    pub namespace: Option<String>,
    pub constructor: Option<InjectionConstructor>,
    pub methods: Vec<MethodShape>,
}

impl SourceModel {
    /// Dependencies to mock; empty when no injection constructor was found.
    pub fn dependencies(&self) -> &[DependencyParameter] {
        self.constructor
            .as_ref()
            .map(|c| c.parameters.as_slice())
            .unwrap_or(&[])
    }
}

//! Class-level facts needed for fixture generation.
//!
//! # Constructor Selection
//!
//! 1. Order constructors by descending parameter count (ties keep declaration order)
//! 2. Pick the first one with at least one parameter accepted by the
//!    [`DependencyPredicate`]
//! 3. Its full parameter list becomes the dependency list
//!
//! Without a match the subject is constructed with no arguments.
//!
//! # Generic Classes
//!
//! A fixture cannot be generic, so the class type parameters are closed over
//! `object` everywhere they appear: the subject type, dependency types and
//! method signatures.

use super::dependency::{DependencyPredicate, InterfaceNamingConvention};
use crate::core::{
    ClassDeclaration, ClassUnit, ConstructorDeclaration, DependencyParameter,
    InjectionConstructor, MethodShape, Parameter, SourceModel, TypeRef,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ClassAnalyzer {
    predicate: Arc<dyn DependencyPredicate>,
}

impl Default for ClassAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClassAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassAnalyzer").finish_non_exhaustive()
    }
}

impl ClassAnalyzer {
    /// Analyzer using the interface-naming convention.
    pub fn new() -> Self {
        Self::with_predicate(InterfaceNamingConvention)
    }

    pub fn with_predicate(predicate: impl DependencyPredicate + 'static) -> Self {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    pub fn analyze(&self, unit: &ClassUnit) -> SourceModel {
        let class = &unit.declaration;
        let closed = |ty: &TypeRef| ty.substitute(&class.type_parameters, CLOSING_TYPE);
        SourceModel {
            class_name: class.name.clone(),
            subject_type: subject_type(class),
            namespace: unit.namespace.clone(),
            constructor: self
                .select_injection_constructor(class)
                .map(|ctor| InjectionConstructor {
                    parameters: ctor
                        .parameters
                        .iter()
                        .map(|p| DependencyParameter {
                            ty: closed(&p.ty),
                            ..DependencyParameter::from(p)
                        })
                        .collect(),
                }),
            methods: public_methods(class)
                .into_iter()
                .map(|method| {
                    let parameters = method
                        .parameters
                        .into_iter()
                        .map(|p| Parameter {
                            ty: closed(&p.ty),
                            ..p
                        })
                        .collect();
                    MethodShape::new(method.name, parameters, closed(&method.return_type))
                })
                .collect(),
        }
    }

    pub fn select_injection_constructor<'a>(
        &self,
        class: &'a ClassDeclaration,
    ) -> Option<&'a ConstructorDeclaration> {
        let mut candidates: Vec<_> = class.constructors.iter().collect();
        // sort_by is stable, so equal counts keep declaration order
        candidates.sort_by(|a, b| b.parameters.len().cmp(&a.parameters.len()));

        candidates.into_iter().find(|ctor| {
            ctor.parameters
                .iter()
                .any(|p| self.predicate.is_dependency(&p.ty))
        })
    }
}

/// Type argument used for every class type parameter.
const CLOSING_TYPE: &str = "object";

/// `Cache` -> `Cache`, `Cache<TKey, TValue>` -> `Cache<object, object>`
fn subject_type(class: &ClassDeclaration) -> TypeRef {
    if class.type_parameters.is_empty() {
        return TypeRef::new(&class.name);
    }
    let arguments = vec![CLOSING_TYPE; class.type_parameters.len()].join(", ");
    TypeRef::new(format!("{}<{}>", class.name, arguments))
}

/// Public methods in declaration order. Constructors are never included.
pub fn public_methods(class: &ClassDeclaration) -> Vec<MethodShape> {
    class
        .methods
        .iter()
        .filter(|method| method.is_public())
        .map(|method| {
            MethodShape::new(
                method.name.clone(),
                method.parameters.clone(),
                method.return_type.clone(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MethodDeclaration, Parameter, TypeRef};
    use std::path::PathBuf;

    fn param(name: &str, ty: &str) -> Parameter {
        Parameter::new(name, TypeRef::new(ty))
    }

    fn ctor(params: Vec<Parameter>) -> ConstructorDeclaration {
        ConstructorDeclaration {
            modifiers: vec!["public".into()],
            parameters: params,
            line: 1,
        }
    }

    fn method(name: &str, modifiers: &[&str], ret: &str) -> MethodDeclaration {
        MethodDeclaration {
            name: name.into(),
            modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
            parameters: vec![],
            return_type: TypeRef::new(ret),
            line: 1,
        }
    }

    fn unit(class: ClassDeclaration) -> ClassUnit {
        ClassUnit {
            declaration: class,
            namespace: Some("App".into()),
            source: PathBuf::from("App.cs"),
        }
    }

    #[test]
    fn test_prefers_constructor_with_most_parameters() {
        let mut class = ClassDeclaration::new("OrderService");
        class.constructors = vec![
            ctor(vec![param("repo", "IRepository")]),
            ctor(vec![param("repo", "IRepository"), param("clock", "IClock")]),
        ];

        let chosen = ClassAnalyzer::new().select_injection_constructor(&class).unwrap();
        assert_eq!(chosen.parameters.len(), 2);
    }

    #[test]
    fn test_skips_larger_constructor_without_interfaces() {
        let mut class = ClassDeclaration::new("Cache");
        class.constructors = vec![
            ctor(vec![param("size", "int"), param("name", "string")]),
            ctor(vec![param("store", "IStore")]),
        ];

        let chosen = ClassAnalyzer::new().select_injection_constructor(&class).unwrap();
        assert_eq!(chosen.parameters, vec![param("store", "IStore")]);
    }

    #[test]
    fn test_full_parameter_list_becomes_dependencies() {
        let mut class = ClassDeclaration::new("Mailer");
        class.constructors = vec![ctor(vec![
            param("retries", "int"),
            param("transport", "ITransport"),
            param("name", "string"),
        ])];

        let model = ClassAnalyzer::new().analyze(&unit(class));
        let identifiers: Vec<_> = model
            .dependencies()
            .iter()
            .map(|d| d.identifier.as_str())
            .collect();
        assert_eq!(identifiers, vec!["retries", "transport", "name"]);
    }

    #[test]
    fn test_equal_parameter_counts_keep_declaration_order() {
        let mut class = ClassDeclaration::new("Pair");
        class.constructors = vec![
            ctor(vec![param("first", "IFirst")]),
            ctor(vec![param("second", "ISecond")]),
        ];

        let chosen = ClassAnalyzer::new().select_injection_constructor(&class).unwrap();
        assert_eq!(chosen.parameters[0].name, "first");
    }

    #[test]
    fn test_no_matching_constructor_means_no_dependencies() {
        let mut class = ClassDeclaration::new("Calculator");
        class.constructors = vec![ctor(vec![param("seed", "int")]), ctor(vec![])];

        let model = ClassAnalyzer::new().analyze(&unit(class));
        assert!(model.constructor.is_none());
        assert!(model.dependencies().is_empty());
    }

    #[test]
    fn test_generic_class_is_closed_over_object() {
        let mut class = ClassDeclaration::new("Cache");
        class.type_parameters = vec!["TKey".into(), "TValue".into()];
        class.constructors = vec![ctor(vec![param("store", "IStore<TKey, TValue>")])];
        class.methods = vec![MethodDeclaration {
            parameters: vec![param("key", "TKey")],
            ..method("Get", &["public"], "TValue")
        }];

        let model = ClassAnalyzer::new().analyze(&unit(class));
        assert_eq!(model.class_name, "Cache");
        assert_eq!(model.subject_type.as_str(), "Cache<object, object>");
        assert_eq!(model.dependencies()[0].ty.as_str(), "IStore<object, object>");
        assert_eq!(model.methods[0].parameters[0].ty.as_str(), "object");
        assert_eq!(model.methods[0].return_type.as_str(), "object");
    }

    #[test]
    fn test_plain_class_subject_type_is_its_name() {
        let model = ClassAnalyzer::new().analyze(&unit(ClassDeclaration::new("Clock")));
        assert_eq!(model.subject_type.as_str(), "Clock");
    }

    #[test]
    fn test_public_methods_only_in_declaration_order() {
        let mut class = ClassDeclaration::new("Widget");
        class.methods = vec![
            method("Render", &["public"], "void"),
            method("Layout", &["private"], "int"),
            method("Measure", &["public", "virtual"], "Size"),
            method("Dispose", &[], "void"),
            method("Create", &["public", "static"], "Widget"),
        ];

        let model = ClassAnalyzer::new().analyze(&unit(class));
        let names: Vec<_> = model.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Render", "Measure", "Create"]);
        assert!(model.methods[0].is_void);
        assert!(!model.methods[1].is_void);
    }

    #[test]
    fn test_custom_predicate() {
        let mut class = ClassDeclaration::new("Job");
        class.constructors = vec![ctor(vec![param("runner", "TaskRunner")])];

        let analyzer =
            ClassAnalyzer::with_predicate(|ty: &TypeRef| ty.simple_name().ends_with("Runner"));
        let model = analyzer.analyze(&unit(class));
        assert_eq!(model.dependencies().len(), 1);
    }

    #[test]
    fn test_model_carries_name_and_namespace() {
        let model = ClassAnalyzer::new().analyze(&unit(ClassDeclaration::new("Empty")));
        assert_eq!(model.class_name, "Empty");
        assert_eq!(model.namespace.as_deref(), Some("App"));
        assert!(model.methods.is_empty());
    }
}

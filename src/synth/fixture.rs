//! Test fixture synthesis.
//!
//! For a class `C` with injection dependencies `d1..dk` and public methods
//! `m1..mn` the fixture contains, in order:
//!
//! - one `Mock<T>` field per dependency, in constructor parameter order
//! - a field holding the instance under test
//! - a setup method creating every mock and then `C` from the mock objects
//! - one test method per public method, in declaration order
//!
//! Each test declares a `default` local per argument, invokes the method on
//! the subject, compares `actual` against a `default` `expected` when the
//! method returns a value, and ends with an unconditional failure so the
//! skeleton is never mistaken for a finished test.

use super::builders::{
    assign, call, default_literal, field, ident, local, member, new_object, prefixed,
    ClassBuilder, FileBuilder, MethodBuilder,
};
use super::framework::{mock_object, mock_type, TestFramework, FAILURE_MESSAGE, MOCKING_NAMESPACE};
use super::naming::{
    argument_names, fixture_class_name, mock_field_names, subject_field_name, test_method_names,
    ACTUAL, EXPECTED, FIXTURE_NAMESPACE, ROOT_NAMESPACE, SETUP_METHOD,
};
use super::tree::{FieldNode, FixtureFile, MethodNode, Statement};
use crate::analyzers::ClassAnalyzer;
use crate::core::{ClassUnit, GeneratedFile, MethodShape, ParameterModifier, SourceModel};
use crate::render::{CSharpRenderer, SourceRenderer};
use std::sync::Arc;

/// Default extension of generated files.
pub const DEFAULT_EXTENSION: &str = "cs";

const STANDARD_USINGS: [&str; 4] = [
    "System",
    "System.Collections.Generic",
    "System.Linq",
    "System.Text",
];

#[derive(Clone)]
pub struct TestSkeletonSynthesizer {
    analyzer: ClassAnalyzer,
    renderer: Arc<dyn SourceRenderer>,
    framework: TestFramework,
    extension: String,
}

impl Default for TestSkeletonSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TestSkeletonSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSkeletonSynthesizer")
            .field("analyzer", &self.analyzer)
            .field("framework", &self.framework)
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

impl TestSkeletonSynthesizer {
    pub fn new() -> Self {
        Self {
            analyzer: ClassAnalyzer::new(),
            renderer: Arc::new(CSharpRenderer::new()),
            framework: TestFramework::default(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_analyzer(mut self, analyzer: ClassAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn SourceRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_framework(mut self, framework: TestFramework) -> Self {
        self.framework = framework;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn framework(&self) -> TestFramework {
        self.framework
    }

    /// Analyze, build and render the fixture for one class.
    pub fn synthesize(&self, unit: &ClassUnit) -> GeneratedFile {
        let model = self.analyzer.analyze(unit);
        let fixture = self.build_fixture(&model);
        GeneratedFile {
            filename: GeneratedFile::filename_for(&model.class_name, &self.extension),
            text: self.renderer.render(&fixture),
        }
    }

    /// Build the declaration tree for an analyzed class.
    pub fn build_fixture(&self, model: &SourceModel) -> FixtureFile {
        let mocks = mock_field_names(model.dependencies().iter().map(|d| d.identifier.as_str()));
        let test_names = test_method_names(model.methods.iter().map(|m| m.name.as_str()));
        let tests = model
            .methods
            .iter()
            .zip(test_names)
            .map(|(method, name)| self.test_method(model, method, name));

        let class = ClassBuilder::new(fixture_class_name(&model.class_name))
            .attribute(self.framework.fixture_attribute())
            .modifier("public")
            .fields(self.fields(model, &mocks))
            .method(self.setup_method(model, &mocks))
            .methods(tests)
            .build();

        self.usings(model).class(class).build()
    }

    fn usings(&self, model: &SourceModel) -> FileBuilder {
        let builder = STANDARD_USINGS
            .iter()
            .fold(FileBuilder::new(FIXTURE_NAMESPACE), |b, u| b.using(*u))
            .using(self.framework.namespace())
            .using(MOCKING_NAMESPACE)
            .using(ROOT_NAMESPACE);
        match &model.namespace {
            Some(namespace) => builder.using(namespace.as_str()),
            None => builder,
        }
    }

    fn fields(&self, model: &SourceModel, mocks: &[String]) -> Vec<FieldNode> {
        model
            .dependencies()
            .iter()
            .zip(mocks)
            .map(|(dep, name)| field("private", mock_type(dep.ty.as_str()), name.as_str()))
            .chain(std::iter::once(field(
                "private",
                model.subject_type.as_str(),
                subject_field_name(&model.class_name),
            )))
            .collect()
    }

    fn setup_method(&self, model: &SourceModel, mocks: &[String]) -> MethodNode {
        let dependencies = model.dependencies();
        let create_mocks = dependencies.iter().zip(mocks).map(|(dep, name)| {
            assign(
                ident(name.as_str()),
                new_object(mock_type(dep.ty.as_str()), vec![]),
            )
        });
        let constructor_args = mocks
            .iter()
            .map(|name| mock_object(ident(name.as_str())))
            .collect();
        let create_subject = assign(
            ident(subject_field_name(&model.class_name)),
            new_object(model.subject_type.as_str(), constructor_args),
        );

        MethodBuilder::new(SETUP_METHOD)
            .attribute(self.framework.setup_attribute())
            .modifier("public")
            .group(create_mocks.chain(std::iter::once(create_subject)))
            .build()
    }

    fn test_method(&self, model: &SourceModel, method: &MethodShape, name: String) -> MethodNode {
        let reserved: &[&str] = if method.is_void { &[] } else { &[ACTUAL, EXPECTED] };
        let locals = argument_names(method.parameters.iter().map(|p| p.name.as_str()), reserved);

        let arrange: Vec<Statement> = method
            .parameters
            .iter()
            .zip(&locals)
            .map(|(p, local_name)| local(p.ty.as_str(), local_name.as_str(), default_literal()))
            .collect();

        let arguments = method
            .parameters
            .iter()
            .zip(&locals)
            .map(|(p, local_name)| {
                let value = ident(local_name.as_str());
                match p.modifier.and_then(ParameterModifier::argument_keyword) {
                    Some(keyword) => prefixed(keyword, value),
                    None => value,
                }
            })
            .collect();
        let invocation = call(
            member(ident(subject_field_name(&model.class_name)), method.name.as_str()),
            arguments,
        );

        let (act, assert) = if method.is_void {
            (vec![Statement::Expr(invocation)], Vec::new())
        } else {
            let return_type = method.return_type.as_str();
            (
                vec![local(return_type, ACTUAL, invocation)],
                vec![
                    local(return_type, EXPECTED, default_literal()),
                    Statement::Expr(self.framework.assert_equal(ident(ACTUAL), ident(EXPECTED))),
                ],
            )
        };

        MethodBuilder::new(name)
            .attribute(self.framework.test_attribute())
            .modifier("public")
            .group(arrange)
            .group(act)
            .group(assert)
            .group(vec![Statement::Expr(self.framework.fail(FAILURE_MESSAGE))])
            .build()
    }
}

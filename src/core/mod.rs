pub mod model;
pub mod syntax;
pub mod units;

pub use model::{DependencyParameter, InjectionConstructor, MethodShape, SourceModel};
pub use syntax::{
    ClassDeclaration, ConstructorDeclaration, DeclaredClass, MethodDeclaration, Parameter,
    ParameterModifier, SyntaxTree, TypeRef,
};
pub use units::{ClassUnit, GeneratedFile, SourceFile};

//! Declaration tree produced by a [`SourceParser`](crate::parser::SourceParser).
//!
//! The tree keeps only the structural shape the generator needs: classes,
//! their modifiers, constructors and methods with their parameter lists.
//! Bodies, expressions and formatting are discarded.

use std::fmt;
use std::path::PathBuf;

/// A syntactic type reference, kept as normalized source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef(String);

impl TypeRef {
    /// Create a type reference, collapsing internal whitespace runs.
    pub fn new(text: impl AsRef<str>) -> Self {
        let normalized = text
            .as_ref()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        Self(normalized)
    }

    pub fn void() -> Self {
        Self("void".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_void(&self) -> bool {
        self.0 == "void"
    }

    /// The unqualified type name without generic arguments.
    ///
    /// `System.Collections.Generic.IList<int>` → `IList`, `global::Foo.IBar` → `IBar`.
    pub fn simple_name(&self) -> &str {
        let without_generics = self.0.split('<').next().unwrap_or(&self.0);
        let without_alias = without_generics
            .rsplit("::")
            .next()
            .unwrap_or(without_generics);
        without_alias
            .rsplit('.')
            .next()
            .unwrap_or(without_alias)
            .trim()
    }

    /// Replace every unqualified identifier listed in `names` with `replacement`.
    ///
    /// `IRepository<T>` with `T` -> `object` gives `IRepository<object>`;
    /// `TKey` and `Outer.T` are left alone.
    pub fn substitute(&self, names: &[String], replacement: &str) -> TypeRef {
        if names.is_empty() {
            return self.clone();
        }
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();
        while let Some(start) = rest.find(is_identifier_char) {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            let end = tail
                .find(|c: char| !is_identifier_char(c))
                .unwrap_or(tail.len());
            let token = &tail[..end];
            if !out.ends_with('.') && names.iter().any(|name| name == token) {
                out.push_str(replacement);
            } else {
                out.push_str(token);
            }
            rest = &tail[end..];
        }
        out.push_str(rest);
        TypeRef(out)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How an argument is passed to a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterModifier {
    Ref,
    Out,
    In,
    Params,
}

impl ParameterModifier {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "ref" => Some(Self::Ref),
            "out" => Some(Self::Out),
            "in" => Some(Self::In),
            "params" => Some(Self::Params),
            _ => None,
        }
    }

    /// Keyword written before the argument at a call site.
    pub fn argument_keyword(self) -> Option<&'static str> {
        match self {
            Self::Ref => Some("ref"),
            Self::Out => Some("out"),
            Self::In => Some("in"),
            Self::Params => None,
        }
    }
}

/// A formal parameter of a constructor or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    pub modifier: Option<ParameterModifier>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifier: None,
        }
    }

    pub fn with_modifier(mut self, modifier: ParameterModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstructorDeclaration {
    pub modifiers: Vec<String>,
    pub parameters: Vec<Parameter>,
    /// 1-indexed source line
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub name: String,
    pub modifiers: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeRef,
    pub line: usize,
}

impl MethodDeclaration {
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }

    pub fn is_public(&self) -> bool {
        self.has_modifier("public")
    }
}

/// One class declaration subtree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassDeclaration {
    pub name: String,
    /// Generic type parameter names, `["TKey", "TValue"]` for `Cache<TKey, TValue>`
    pub type_parameters: Vec<String>,
    pub modifiers: Vec<String>,
    pub constructors: Vec<ConstructorDeclaration>,
    pub methods: Vec<MethodDeclaration>,
    pub line: usize,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }

    pub fn is_public(&self) -> bool {
        self.has_modifier("public")
    }
}

/// A class together with the namespace it was declared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredClass {
    /// Dotted namespace name; `None` for the global namespace
    pub namespace: Option<String>,
    pub declaration: ClassDeclaration,
}

/// Parsed structure of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntaxTree {
    pub path: PathBuf,
    /// Namespace-level classes in declaration order. Nested classes are not listed.
    pub classes: Vec<DeclaredClass>,
}

//! Composable builders for fixture declaration trees.
//!
//! ```rust
//! use testgen::synth::builders::{call, ident, member, string_lit, ClassBuilder, MethodBuilder};
//!
//! let method = MethodBuilder::new("RunTest")
//!     .attribute("Test")
//!     .modifier("public")
//!     .expr(call(member(ident("Assert"), "Fail"), vec![string_lit("autogenerated")]))
//!     .build();
//! let class = ClassBuilder::new("RunnerTest").modifier("public").method(method).build();
//! assert_eq!(class.methods().count(), 1);
//! ```

use super::tree::{
    ClassNode, Expr, FieldNode, FixtureFile, Member, MethodNode, NamespaceNode, Statement,
};

pub fn ident(name: impl Into<String>) -> Expr {
    Expr::Ident(name.into())
}

pub fn default_literal() -> Expr {
    Expr::Default
}

pub fn string_lit(value: impl Into<String>) -> Expr {
    Expr::StringLit(value.into())
}

pub fn member(target: Expr, name: impl Into<String>) -> Expr {
    Expr::Member {
        target: Box::new(target),
        name: name.into(),
    }
}

pub fn call(callee: Expr, args: Vec<Expr>) -> Expr {
    Expr::Call {
        callee: Box::new(callee),
        args,
    }
}

/// `keyword value`, for `ref`/`out`/`in` arguments.
pub fn prefixed(keyword: impl Into<String>, value: Expr) -> Expr {
    Expr::Prefixed {
        keyword: keyword.into(),
        value: Box::new(value),
    }
}

pub fn new_object(ty: impl Into<String>, args: Vec<Expr>) -> Expr {
    Expr::New {
        ty: ty.into(),
        args,
    }
}

pub fn local(ty: impl Into<String>, name: impl Into<String>, init: Expr) -> Statement {
    Statement::Local {
        ty: ty.into(),
        name: name.into(),
        init,
    }
}

pub fn assign(target: Expr, value: Expr) -> Statement {
    Statement::Assign { target, value }
}

pub fn field(
    modifier: impl Into<String>,
    ty: impl Into<String>,
    name: impl Into<String>,
) -> FieldNode {
    FieldNode {
        modifiers: vec![modifier.into()],
        ty: ty.into(),
        name: name.into(),
    }
}

pub struct FileBuilder {
    usings: Vec<String>,
    namespace: String,
    classes: Vec<ClassNode>,
}

impl FileBuilder {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            usings: Vec::new(),
            namespace: namespace.into(),
            classes: Vec::new(),
        }
    }

    /// Add a using directive; duplicates are ignored.
    pub fn using(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        if !self.usings.contains(&namespace) {
            self.usings.push(namespace);
        }
        self
    }

    pub fn class(mut self, class: ClassNode) -> Self {
        self.classes.push(class);
        self
    }

    pub fn build(self) -> FixtureFile {
        FixtureFile {
            usings: self.usings,
            namespace: NamespaceNode {
                name: self.namespace,
                classes: self.classes,
            },
        }
    }
}

pub struct ClassBuilder {
    node: ClassNode,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: ClassNode {
                attributes: Vec::new(),
                modifiers: Vec::new(),
                name: name.into(),
                members: Vec::new(),
            },
        }
    }

    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.node.attributes.push(attribute.into());
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.node.modifiers.push(modifier.into());
        self
    }

    pub fn field(mut self, field: FieldNode) -> Self {
        self.node.members.push(Member::Field(field));
        self
    }

    pub fn fields(self, fields: impl IntoIterator<Item = FieldNode>) -> Self {
        fields.into_iter().fold(self, |builder, f| builder.field(f))
    }

    pub fn method(mut self, method: MethodNode) -> Self {
        self.node.members.push(Member::Method(method));
        self
    }

    pub fn methods(self, methods: impl IntoIterator<Item = MethodNode>) -> Self {
        methods.into_iter().fold(self, |builder, m| builder.method(m))
    }

    pub fn build(self) -> ClassNode {
        self.node
    }
}

pub struct MethodBuilder {
    node: MethodNode,
}

impl MethodBuilder {
    /// A `void` method with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: MethodNode {
                attributes: Vec::new(),
                modifiers: Vec::new(),
                return_type: "void".to_string(),
                name: name.into(),
                body: Vec::new(),
            },
        }
    }

    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.node.attributes.push(attribute.into());
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.node.modifiers.push(modifier.into());
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.node.return_type = ty.into();
        self
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.node.body.push(statement);
        self
    }

    pub fn expr(self, expr: Expr) -> Self {
        self.statement(Statement::Expr(expr))
    }

    /// Append a group of statements, separated from the previous group by a blank line.
    ///
    /// Empty groups are skipped entirely.
    pub fn group(mut self, statements: impl IntoIterator<Item = Statement>) -> Self {
        let statements: Vec<_> = statements.into_iter().collect();
        if statements.is_empty() {
            return self;
        }
        if !self.node.body.is_empty() {
            self.node.body.push(Statement::Blank);
        }
        self.node.body.extend(statements);
        self
    }

    pub fn build(self) -> MethodNode {
        self.node
    }
}

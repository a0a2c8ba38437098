//! Declaration tree of a generated fixture file.
//!
//! Built by [`builders`](super::builders), printed by a
//! [`SourceRenderer`](crate::render::SourceRenderer). The tree carries no
//! formatting; indentation and blank lines are decided by the renderer.

/// A complete fixture source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureFile {
    pub usings: Vec<String>,
    pub namespace: NamespaceNode,
}

impl FixtureFile {
    /// All classes across the file's namespace.
    pub fn classes(&self) -> &[ClassNode] {
        &self.namespace.classes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceNode {
    pub name: String,
    pub classes: Vec<ClassNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    pub attributes: Vec<String>,
    pub modifiers: Vec<String>,
    pub name: String,
    pub members: Vec<Member>,
}

impl ClassNode {
    pub fn fields(&self) -> impl Iterator<Item = &FieldNode> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(field) => Some(field),
            Member::Method(_) => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodNode> {
        self.members.iter().filter_map(|m| match m {
            Member::Method(method) => Some(method),
            Member::Field(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(FieldNode),
    Method(MethodNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    pub modifiers: Vec<String>,
    pub ty: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNode {
    pub attributes: Vec<String>,
    pub modifiers: Vec<String>,
    pub return_type: String,
    pub name: String,
    pub body: Vec<Statement>,
}

impl MethodNode {
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| a == attribute)
    }

    /// Statements excluding blank separators.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.body.iter().filter(|s| !matches!(s, Statement::Blank))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `T name = init;`
    Local { ty: String, name: String, init: Expr },
    /// `target = value;`
    Assign { target: Expr, value: Expr },
    /// `expr;`
    Expr(Expr),
    /// Visual separator between statement groups
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
    /// The `default` literal
    Default,
    StringLit(String),
    /// `new T(args)`
    New { ty: String, args: Vec<Expr> },
    /// `target.name`
    Member { target: Box<Expr>, name: String },
    /// `callee(args)`
    Call { callee: Box<Expr>, args: Vec<Expr> },
    /// `keyword value`, an argument passed by reference
    Prefixed { keyword: String, value: Box<Expr> },
}

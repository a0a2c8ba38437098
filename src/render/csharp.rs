//! C# source printer.
//!
//! Layout rules:
//! - using directives, one per line, followed by a blank line
//! - Allman braces for namespaces, classes and methods
//! - consecutive fields are not separated; a blank line precedes every method
//! - [`Statement::Blank`] becomes an empty line

use super::writer::{CodeWriter, DEFAULT_INDENT_WIDTH};
use super::SourceRenderer;
use crate::synth::{ClassNode, Expr, FieldNode, FixtureFile, Member, MethodNode, Statement};

#[derive(Debug, Clone, Copy)]
pub struct CSharpRenderer {
    indent_width: usize,
}

impl Default for CSharpRenderer {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl CSharpRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

impl SourceRenderer for CSharpRenderer {
    fn render(&self, file: &FixtureFile) -> String {
        let mut w = CodeWriter::new(self.indent_width);

        for using in &file.usings {
            w.writeln(&format!("using {};", using));
        }
        if !file.usings.is_empty() {
            w.newline();
        }

        w.writeln(&format!("namespace {}", file.namespace.name));
        w.block("{", "}", |w| {
            for (i, class) in file.namespace.classes.iter().enumerate() {
                if i > 0 {
                    w.newline();
                }
                write_class(w, class);
            }
        });

        w.finish()
    }
}

fn write_class(w: &mut CodeWriter, class: &ClassNode) {
    for attribute in &class.attributes {
        w.writeln(&format!("[{}]", attribute));
    }
    w.writeln(&with_modifiers(&class.modifiers, &format!("class {}", class.name)));
    w.block("{", "}", |w| {
        let mut previous: Option<&Member> = None;
        for member in &class.members {
            if needs_separator(previous, member) {
                w.newline();
            }
            match member {
                Member::Field(field) => write_field(w, field),
                Member::Method(method) => write_method(w, method),
            }
            previous = Some(member);
        }
    });
}

fn needs_separator(previous: Option<&Member>, current: &Member) -> bool {
    match (previous, current) {
        (None, _) => false,
        (Some(Member::Field(_)), Member::Field(_)) => false,
        _ => true,
    }
}

fn write_field(w: &mut CodeWriter, field: &FieldNode) {
    w.writeln(&format!(
        "{};",
        with_modifiers(&field.modifiers, &format!("{} {}", field.ty, field.name))
    ));
}

fn write_method(w: &mut CodeWriter, method: &MethodNode) {
    for attribute in &method.attributes {
        w.writeln(&format!("[{}]", attribute));
    }
    w.writeln(&with_modifiers(
        &method.modifiers,
        &format!("{} {}()", method.return_type, method.name),
    ));
    w.block("{", "}", |w| {
        for statement in &method.body {
            write_statement(w, statement);
        }
    });
}

fn write_statement(w: &mut CodeWriter, statement: &Statement) {
    match statement {
        Statement::Local { ty, name, init } => {
            w.writeln(&format!("{} {} = {};", ty, name, expr_text(init)))
        }
        Statement::Assign { target, value } => {
            w.writeln(&format!("{} = {};", expr_text(target), expr_text(value)))
        }
        Statement::Expr(expr) => w.writeln(&format!("{};", expr_text(expr))),
        Statement::Blank => w.newline(),
    }
}

pub fn expr_text(expr: &Expr) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::Default => "default".to_string(),
        Expr::StringLit(value) => format!("\"{}\"", escape(value)),
        Expr::New { ty, args } => format!("new {}({})", ty, args_text(args)),
        Expr::Member { target, name } => format!("{}.{}", expr_text(target), name),
        Expr::Call { callee, args } => format!("{}({})", expr_text(callee), args_text(args)),
        Expr::Prefixed { keyword, value } => format!("{} {}", keyword, expr_text(value)),
    }
}

fn args_text(args: &[Expr]) -> String {
    args.iter().map(expr_text).collect::<Vec<_>>().join(", ")
}

fn with_modifiers(modifiers: &[String], rest: &str) -> String {
    if modifiers.is_empty() {
        rest.to_string()
    } else {
        format!("{} {}", modifiers.join(" "), rest)
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

//! Tree-sitter parser integration for C#
//!
//! Extracts namespace-level class declarations with their constructors and
//! methods. Anything else (fields, properties, bodies) is ignored.

use super::SourceParser;
use crate::core::{
    ClassDeclaration, ConstructorDeclaration, DeclaredClass, MethodDeclaration, Parameter,
    ParameterModifier, SourceFile, SyntaxTree, TypeRef,
};
use crate::errors::GenerateError;
use std::path::Path;
use tracing::debug;
use tree_sitter::{Language, Node, Parser, Tree};

/// Type used for parameters that carry no explicit type (lambda-style).
const IMPLICIT_PARAMETER_TYPE: &str = "object";

const ACCESS_MODIFIERS: &[&str] = &["public", "internal", "protected", "private"];

/// C# parser backed by the tree-sitter C# grammar.
#[derive(Debug, Default, Clone, Copy)]
pub struct CSharpParser;

impl CSharpParser {
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for CSharpParser {
    fn parse(&self, file: &SourceFile) -> Result<SyntaxTree, GenerateError> {
        let tree = parse_source(&file.text, &file.path)?;
        let root = tree.root_node();

        if let Some(error) = first_error(root) {
            return Err(GenerateError::parse_with_context(
                describe_error(&error, &file.text),
                &file.path,
                node_line(&error),
            ));
        }

        let mut classes = Vec::new();
        collect_classes(root, &file.text, None, &mut classes);
        debug!(
            path = %file.path.display(),
            classes = classes.len(),
            "Parsed source file"
        );

        Ok(SyntaxTree {
            path: file.path.clone(),
            classes,
        })
    }
}

fn get_language() -> Language {
    tree_sitter_c_sharp::LANGUAGE.into()
}

/// Parse C# source into a tree-sitter tree
fn parse_source(content: &str, path: &Path) -> Result<Tree, GenerateError> {
    let mut parser = Parser::new();
    parser
        .set_language(&get_language())
        .map_err(|e| GenerateError::internal(format!("Failed to load C# grammar: {}", e)))?;

    parser
        .parse(content, None)
        .ok_or_else(|| GenerateError::parse_with_path("Failed to parse source code", path))
}

/// Get text for a tree-sitter node
fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Get the line number for a tree-sitter node (1-indexed)
fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

fn field_text<'a>(node: &Node, field: &str, source: &'a str) -> &'a str {
    node.child_by_field_name(field)
        .map(|child| node_text(&child, source))
        .unwrap_or_default()
}

/// Depth-first search for the first ERROR or MISSING node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn describe_error(node: &Node, source: &str) -> String {
    if node.is_missing() {
        return format!("Missing `{}`", node.kind());
    }
    let text = node_text(node, source);
    let snippet: String = text
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(40)
        .collect();
    format!("Unexpected `{}`", snippet.trim())
}

fn qualify(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) => format!("{}.{}", parent, name),
        None => name.to_string(),
    }
}

/// Walk namespace scopes collecting class declarations.
///
/// A file-scoped namespace applies to every sibling declared after it.
fn collect_classes(
    node: Node,
    source: &str,
    namespace: Option<&str>,
    out: &mut Vec<DeclaredClass>,
) {
    let mut scope = namespace.map(str::to_string);
    let mut cursor = node.walk();
    let children: Vec<_> = node.named_children(&mut cursor).collect();

    for child in children {
        match child.kind() {
            "namespace_declaration" => {
                let name = qualify(scope.as_deref(), field_text(&child, "name", source));
                if let Some(body) = child.child_by_field_name("body") {
                    collect_classes(body, source, Some(&name), out);
                }
            }
            "file_scoped_namespace_declaration" => {
                scope = Some(qualify(
                    namespace,
                    field_text(&child, "name", source),
                ));
            }
            "class_declaration" => out.push(DeclaredClass {
                namespace: scope.clone(),
                declaration: class_declaration(&child, source),
            }),
            _ => {}
        }
    }
}

fn modifiers(node: &Node, source: &str) -> Vec<String> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() == "modifier")
        .map(|child| node_text(&child, source).to_string())
        .collect()
}

/// Formal parameters in declared order.
///
/// A `params` array is not a `parameter` node: its keyword, `type` and `name`
/// sit directly in the list.
fn parameters(list: &Node, source: &str) -> Vec<Parameter> {
    let mut out = Vec::new();
    let mut params_type: Option<TypeRef> = None;
    let mut in_params = false;

    for index in 0..list.child_count() {
        let Some(child) = list.child(index) else {
            continue;
        };
        match (child.kind(), list.field_name_for_child(index as u32)) {
            ("parameter", _) => out.push(parameter(&child, source)),
            ("params", _) => in_params = true,
            (_, Some("type")) if in_params => {
                params_type = Some(TypeRef::new(node_text(&child, source)));
            }
            (_, Some("name")) if in_params => {
                let ty = params_type
                    .take()
                    .unwrap_or_else(|| TypeRef::new(IMPLICIT_PARAMETER_TYPE));
                out.push(
                    Parameter::new(node_text(&child, source), ty)
                        .with_modifier(ParameterModifier::Params),
                );
                in_params = false;
            }
            _ => {}
        }
    }
    out
}

fn parameter(node: &Node, source: &str) -> Parameter {
    let ty = node
        .child_by_field_name("type")
        .map(|ty| TypeRef::new(node_text(&ty, source)))
        .unwrap_or_else(|| TypeRef::new(IMPLICIT_PARAMETER_TYPE));
    let parameter = Parameter::new(field_text(node, "name", source), ty);

    // `ref readonly` still passes by `ref`
    let modifier = modifiers(node, source)
        .iter()
        .find_map(|keyword| ParameterModifier::from_keyword(keyword));
    match modifier {
        Some(modifier) => parameter.with_modifier(modifier),
        None => parameter,
    }
}

fn type_parameters(node: &Node, source: &str) -> Vec<String> {
    let mut cursor = node.walk();
    let Some(list) = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == "type_parameter_list")
    else {
        return Vec::new();
    };
    let mut cursor = list.walk();
    list.named_children(&mut cursor)
        .filter(|child| child.kind() == "type_parameter")
        .map(|child| field_text(&child, "name", source).to_string())
        .collect()
}

fn class_declaration(node: &Node, source: &str) -> ClassDeclaration {
    let mut class = ClassDeclaration::new(field_text(node, "name", source));
    class.type_parameters = type_parameters(node, source);
    class.modifiers = modifiers(node, source);
    class.line = node_line(node);

    // Primary constructor: `class Foo(IBar bar) { }`
    let mut cursor = node.walk();
    let primary = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == "parameter_list");
    if let Some(list) = primary {
        class.constructors.push(ConstructorDeclaration {
            modifiers: class
                .modifiers
                .iter()
                .filter(|m| ACCESS_MODIFIERS.contains(&m.as_str()))
                .cloned()
                .collect(),
            parameters: parameters(&list, source),
            line: node_line(&list),
        });
    }

    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            match member.kind() {
                "constructor_declaration" => {
                    class.constructors.push(constructor_declaration(&member, source))
                }
                "method_declaration" => class.methods.push(method_declaration(&member, source)),
                _ => {}
            }
        }
    }

    class
}

fn constructor_declaration(node: &Node, source: &str) -> ConstructorDeclaration {
    ConstructorDeclaration {
        modifiers: modifiers(node, source),
        parameters: node
            .child_by_field_name("parameters")
            .map(|list| parameters(&list, source))
            .unwrap_or_default(),
        line: node_line(node),
    }
}

fn method_declaration(node: &Node, source: &str) -> MethodDeclaration {
    MethodDeclaration {
        name: field_text(node, "name", source).to_string(),
        modifiers: modifiers(node, source),
        parameters: node
            .child_by_field_name("parameters")
            .map(|list| parameters(&list, source))
            .unwrap_or_default(),
        return_type: TypeRef::new(field_text(node, "returns", source)),
        line: node_line(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const CLASSES: &str = indoc! {r#"
        using System;

        namespace TestClasses
        {
            public interface IInterface1
            {
                int GetNum();
            }
            public class Class1
            {
                private IInterface1 interface1;
                public Class1(IInterface1 interface1)
                {
                    this.interface1 = interface1;
                }
                public string Method1(string s)
                {
                    return s + interface1.GetNum();
                }

                public void Method2()
                {
                }
            }
            public class Class2
            {
                public int Method1(int a, int b)
                {
                    return a + b;
                }

                private void Helper() { }
            }
        }
    "#};

    fn parse(text: &str) -> Result<SyntaxTree, GenerateError> {
        CSharpParser::new().parse(&SourceFile::new("Classes.cs", text))
    }

    #[test]
    fn test_parse_collects_classes_with_namespace() {
        let tree = parse(CLASSES).unwrap();

        let names: Vec<_> = tree
            .classes
            .iter()
            .map(|c| c.declaration.name.as_str())
            .collect();
        assert_eq!(names, vec!["Class1", "Class2"]);
        assert!(tree
            .classes
            .iter()
            .all(|c| c.namespace.as_deref() == Some("TestClasses")));
    }

    #[test]
    fn test_parse_extracts_constructor_and_methods() {
        let tree = parse(CLASSES).unwrap();
        let class1 = &tree.classes[0].declaration;

        assert!(class1.is_public());
        assert_eq!(class1.constructors.len(), 1);
        assert_eq!(
            class1.constructors[0].parameters,
            vec![Parameter::new("interface1", TypeRef::new("IInterface1"))]
        );

        assert_eq!(class1.methods.len(), 2);
        let method1 = &class1.methods[0];
        assert_eq!(method1.name, "Method1");
        assert_eq!(method1.return_type, TypeRef::new("string"));
        assert_eq!(method1.parameters, vec![Parameter::new("s", TypeRef::new("string"))]);
        assert!(class1.methods[1].return_type.is_void());
    }

    #[test]
    fn test_parse_keeps_private_methods_with_modifiers() {
        let tree = parse(CLASSES).unwrap();
        let class2 = &tree.classes[1].declaration;
        assert_eq!(class2.methods.len(), 2);
        assert!(class2.methods[0].is_public());
        assert!(!class2.methods[1].is_public());
        assert_eq!(class2.methods[1].modifiers, vec!["private".to_string()]);
    }

    #[test]
    fn test_parse_nested_namespaces_are_dotted() {
        let source = indoc! {r#"
            namespace Outer
            {
                namespace Inner
                {
                    public class Deep { }
                }
            }
        "#};
        let tree = parse(source).unwrap();
        assert_eq!(tree.classes.len(), 1);
        assert_eq!(tree.classes[0].namespace.as_deref(), Some("Outer.Inner"));
    }

    #[test]
    fn test_parse_file_scoped_namespace() {
        let source = indoc! {r#"
            namespace Shop.Billing;

            public class Invoice
            {
                public decimal Total() { return 0m; }
            }
        "#};
        let tree = parse(source).unwrap();
        assert_eq!(tree.classes.len(), 1);
        assert_eq!(tree.classes[0].namespace.as_deref(), Some("Shop.Billing"));
    }

    #[test]
    fn test_parse_global_namespace() {
        let tree = parse("public class Loose { public void Go() { } }").unwrap();
        assert_eq!(tree.classes.len(), 1);
        assert_eq!(tree.classes[0].namespace, None);
    }

    #[test]
    fn test_parse_primary_constructor() {
        let source = "public class Service(IClock clock, int retries) { public void Tick() { } }";
        let tree = parse(source).unwrap();
        let service = &tree.classes[0].declaration;
        assert_eq!(service.constructors.len(), 1);
        assert_eq!(service.constructors[0].parameters.len(), 2);
        assert_eq!(service.constructors[0].parameters[0].ty, TypeRef::new("IClock"));
    }

    #[test]
    fn test_parse_ignores_nested_classes() {
        let source = indoc! {r#"
            public class Outer
            {
                public class Inner { public void Run() { } }
                public void Go() { }
            }
        "#};
        let tree = parse(source).unwrap();
        assert_eq!(tree.classes.len(), 1);
        assert_eq!(tree.classes[0].declaration.methods.len(), 1);
    }

    #[test]
    fn test_parse_generic_parameter_types() {
        let source = "public class Repo { public IList<int> Find(Dictionary<string, int> map) { return null; } }";
        let tree = parse(source).unwrap();
        let method = &tree.classes[0].declaration.methods[0];
        assert_eq!(method.return_type, TypeRef::new("IList<int>"));
        assert_eq!(
            method.parameters[0].ty,
            TypeRef::new("Dictionary<string, int>")
        );
    }

    #[test]
    fn test_grammar_is_compatible_with_runtime() {
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&get_language()) {
            panic!("C# grammar rejected by tree-sitter runtime: {}", e);
        }
    }

    #[test]
    fn test_parse_modern_syntax() {
        let source = indoc! {r#"
            namespace A;

            public record Point(int X, int Y);

            public class C
            {
                public int M() => 1;

                public string Banner()
                {
                    int[] sizes = [1, 2, 3];
                    return """
                        raw "text"
                        """;
                }
            }
        "#};
        let tree = parse(source).unwrap();
        assert_eq!(tree.classes.len(), 1);
        assert_eq!(tree.classes[0].namespace.as_deref(), Some("A"));
        let methods: Vec<_> = tree.classes[0]
            .declaration
            .methods
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(methods, vec!["M", "Banner"]);
    }

    #[test]
    fn test_parse_parameter_modifiers() {
        let source = indoc! {r#"
            public class Store
            {
                public bool TryGet(string key, out int value) { value = 0; return true; }
                public void Swap(ref int a, in int b) { }
                public int Sum(int seed, params int[] values) { return seed; }
            }
        "#};
        let tree = parse(source).unwrap();
        let methods = &tree.classes[0].declaration.methods;

        assert_eq!(
            methods[0].parameters,
            vec![
                Parameter::new("key", TypeRef::new("string")),
                Parameter::new("value", TypeRef::new("int")).with_modifier(ParameterModifier::Out),
            ]
        );
        let swap: Vec<_> = methods[1].parameters.iter().map(|p| p.modifier).collect();
        assert_eq!(
            swap,
            vec![
                Some(ParameterModifier::Ref),
                Some(ParameterModifier::In),
            ]
        );
        assert_eq!(
            methods[2].parameters,
            vec![
                Parameter::new("seed", TypeRef::new("int")),
                Parameter::new("values", TypeRef::new("int[]"))
                    .with_modifier(ParameterModifier::Params),
            ]
        );
    }

    #[test]
    fn test_parse_class_type_parameters() {
        let source = "public class Cache<TKey, TValue> where TKey : notnull { public TValue Get(TKey key) { return default; } }";
        let tree = parse(source).unwrap();
        let cache = &tree.classes[0].declaration;
        assert_eq!(cache.name, "Cache");
        assert_eq!(cache.type_parameters, vec!["TKey", "TValue"]);

        let plain = parse("public class Plain { }").unwrap();
        assert!(plain.classes[0].declaration.type_parameters.is_empty());
    }

    #[test]
    fn test_parse_malformed_source_fails() {
        let err = parse("public class Broken { public void Go( { }").unwrap_err();
        assert_eq!(err.category(), "Parse");
        assert_eq!(err.path(), Some(&std::path::PathBuf::from("Classes.cs")));
    }

    #[test]
    fn test_parse_empty_source() {
        let tree = parse("").unwrap();
        assert!(tree.classes.is_empty());
    }
}

//! Identifier conventions for generated fixtures.

use std::collections::HashSet;

/// Namespace every fixture is declared in.
pub const FIXTURE_NAMESPACE: &str = "Autogenerated.Tests";

/// Namespace imported by every fixture.
pub const ROOT_NAMESPACE: &str = "Autogenerated";

/// Name of the per-test initialization method.
pub const SETUP_METHOD: &str = "SetUp";

pub const ACTUAL: &str = "actual";
pub const EXPECTED: &str = "expected";

/// `Class1` -> `Class1Test`
pub fn fixture_class_name(class_name: &str) -> String {
    format!("{}Test", class_name)
}

/// `Class1` -> `_class1UnderTest`
pub fn subject_field_name(class_name: &str) -> String {
    format!("_{}UnderTest", lower_first(class_name))
}

/// `interface1` -> `_interface1Mock`
pub fn mock_field_name(identifier: &str) -> String {
    format!("_{}Mock", lower_first(strip_verbatim(identifier)))
}

/// Identifiers that are unique within one declaration scope.
///
/// A name already handed out gets the first free numeric suffix, starting
/// at 2: `name`, `name2`, `name3`, ...
#[derive(Debug, Default)]
pub struct NameScope {
    taken: HashSet<String>,
}

impl NameScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope where `names` are already in use.
    pub fn reserving<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            taken: names.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 2;
        while !self.taken.insert(candidate.clone()) {
            candidate = format!("{}{}", base, suffix);
            suffix += 1;
        }
        candidate
    }
}

/// Mock field names for constructor parameters, in parameter order.
///
/// `log` and `Log` both map to `_logMock`; the second becomes `_logMock2`.
pub fn mock_field_names<'a>(identifiers: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut scope = NameScope::new();
    identifiers
        .into_iter()
        .map(|identifier| scope.claim(&mock_field_name(identifier)))
        .collect()
}

/// Test method names, one per input name, in input order.
///
/// The first occurrence of a name is `<Name>Test`; repeats (overloads) get a
/// running suffix starting at 2: `<Name>Test2`, `<Name>Test3`, ...
pub fn test_method_names<'a>(method_names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut scope = NameScope::new();
    method_names
        .into_iter()
        .map(|name| scope.claim(&format!("{}Test", name)))
        .collect()
}

/// Local names for the arguments of one test, avoiding `reserved`.
///
/// `Compare(int actual, int expected)` in a test that also declares
/// `actual` and `expected` gets `actual2` and `expected2`.
pub fn argument_names<'a>(
    parameters: impl IntoIterator<Item = &'a str>,
    reserved: &[&str],
) -> Vec<String> {
    let mut scope = NameScope::reserving(reserved.iter().copied());
    parameters
        .into_iter()
        .map(|name| scope.claim(name))
        .collect()
}

fn strip_verbatim(identifier: &str) -> &str {
    identifier.strip_prefix('@').unwrap_or(identifier)
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(subject_field_name("Class1"), "_class1UnderTest");
        assert_eq!(mock_field_name("interface1"), "_interface1Mock");
        assert_eq!(mock_field_name("Logger"), "_loggerMock");
        assert_eq!(mock_field_name("@event"), "_eventMock");
    }

    #[test]
    fn test_overloads_get_numeric_suffix() {
        let names = test_method_names(["Save", "Load", "Save", "Save"]);
        assert_eq!(names, vec!["SaveTest", "LoadTest", "SaveTest2", "SaveTest3"]);
    }

    #[test]
    fn test_mock_names_differing_only_in_case_stay_distinct() {
        let names = mock_field_names(["log", "Log", "clock"]);
        assert_eq!(names, vec!["_logMock", "_logMock2", "_clockMock"]);
    }

    #[test]
    fn test_name_scope_skips_taken_suffixes() {
        let mut scope = NameScope::reserving(["value", "value2"]);
        assert_eq!(scope.claim("value"), "value3");
        assert_eq!(scope.claim("other"), "other");
        assert_eq!(scope.claim("other"), "other2");
    }

    #[test]
    fn test_arguments_avoid_reserved_locals() {
        let names = argument_names(["actual", "expected", "count"], &[ACTUAL, EXPECTED]);
        assert_eq!(names, vec!["actual2", "expected2", "count"]);

        let untouched = argument_names(["actual"], &[]);
        assert_eq!(untouched, vec!["actual"]);
    }

    #[test]
    fn test_fixture_class_name() {
        assert_eq!(fixture_class_name("Class2"), "Class2Test");
    }
}

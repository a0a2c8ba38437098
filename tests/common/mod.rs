// Shared fixtures for testgen integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two public classes: one with an interface dependency, one without.
pub const TWO_CLASSES: &str = r#"
using System;

namespace TestClasses
{
    public class Class1
    {
        private readonly IInterface1 _interface1;

        public Class1(IInterface1 interface1)
        {
            _interface1 = interface1;
        }

        public string Method1(string s)
        {
            return s;
        }
    }

    public class Class2
    {
        public void Method1()
        {
        }

        public void Method2(int a, int b)
        {
        }
    }

    internal class Hidden
    {
        public void Run() {}
    }
}
"#;

/// Source and destination directories inside one temporary root.
pub struct Workspace {
    pub root: TempDir,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("create temp dir");
        let source = root.path().join("src");
        let destination = root.path().join("out");
        fs::create_dir(&source).expect("create source dir");
        fs::create_dir(&destination).expect("create destination dir");
        Self {
            root,
            source,
            destination,
        }
    }

    pub fn with_source(self, name: &str, text: &str) -> Self {
        fs::write(self.source.join(name), text).expect("write source file");
        self
    }

    pub fn output(&self, name: &str) -> String {
        fs::read_to_string(self.destination.join(name)).expect("read generated file")
    }

    pub fn output_names(&self) -> Vec<String> {
        list_names(&self.destination)
    }
}

pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// A public class with `methods` public methods named `M0..` and nothing else.
pub fn class_source(name: &str, methods: usize) -> String {
    let body: String = (0..methods)
        .map(|i| format!("        public int M{}(int x) {{ return x; }}\n", i))
        .collect();
    format!(
        "namespace Generated\n{{\n    public class {}\n    {{\n{}    }}\n}}\n",
        name, body
    )
}

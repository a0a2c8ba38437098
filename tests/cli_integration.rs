mod common;

use assert_cmd::Command;
use common::{Workspace, TWO_CLASSES};
use std::fs;

fn testgen() -> Command {
    let mut cmd = Command::cargo_bin("testgen").unwrap();
    cmd.env_remove("TESTGEN_MAX_READ")
        .env_remove("TESTGEN_MAX_GENERATE")
        .env_remove("TESTGEN_MAX_WRITE")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn writes_fixtures_and_exits_zero() {
    let ws = Workspace::new().with_source("Classes.cs", TWO_CLASSES);

    let assert = testgen()
        .current_dir(ws.root.path())
        .arg(&ws.source)
        .arg(&ws.destination)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.contains("Class1Test.cs"), "stdout: {}", stdout);
    assert!(stdout.contains("Class2Test.cs"), "stdout: {}", stdout);

    assert_eq!(ws.output_names(), vec!["Class1Test.cs", "Class2Test.cs"]);
}

#[test]
fn missing_source_exits_non_zero() {
    let ws = Workspace::new();

    let assert = testgen()
        .current_dir(ws.root.path())
        .arg(ws.root.path().join("missing"))
        .arg(&ws.destination)
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("does not exist"), "stderr: {}", stderr);

    assert!(ws.output_names().is_empty());
}

#[test]
fn missing_arguments_are_rejected() {
    testgen().assert().failure();
    testgen().arg("only-source").assert().failure();
}

#[test]
fn zero_limit_is_rejected() {
    let ws = Workspace::new().with_source("Classes.cs", TWO_CLASSES);

    testgen()
        .current_dir(ws.root.path())
        .arg(&ws.source)
        .arg(&ws.destination)
        .args(["--max-read", "0"])
        .assert()
        .failure();

    assert!(ws.output_names().is_empty());
}

#[test]
fn limits_from_environment() {
    let ws = Workspace::new().with_source("Classes.cs", TWO_CLASSES);

    testgen()
        .current_dir(ws.root.path())
        .env("TESTGEN_MAX_WRITE", "1")
        .arg(&ws.source)
        .arg(&ws.destination)
        .assert()
        .success();

    assert_eq!(ws.output_names().len(), 2);
}

#[test]
fn config_file_in_working_directory_is_used() {
    let ws = Workspace::new().with_source("Classes.cs", TWO_CLASSES);
    fs::write(
        ws.root.path().join(".testgen.toml"),
        "[output]\nframework = \"mstest\"\n",
    )
    .unwrap();

    testgen()
        .current_dir(ws.root.path())
        .arg(&ws.source)
        .arg(&ws.destination)
        .assert()
        .success();

    assert!(ws.output("Class2Test.cs").contains("[TestClass]"));
}

#[test]
fn invalid_config_file_fails() {
    let ws = Workspace::new().with_source("Classes.cs", TWO_CLASSES);
    fs::write(ws.root.path().join(".testgen.toml"), "[parallelism\n").unwrap();

    testgen()
        .current_dir(ws.root.path())
        .arg(&ws.source)
        .arg(&ws.destination)
        .assert()
        .failure();
}

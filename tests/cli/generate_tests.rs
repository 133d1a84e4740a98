//! Tests for running the berray-doc binary

use crate::common::{assert_valid_json, json_class_names, TestRepo};

const JUMP: &str = "package com.berray.components;\n\
    import com.berray.components.core.Component;\n\
    class Jump extends Component {\n\
      /** does a jump \n @type number */\n\
      public void apply(float force) {}\n\
    }\n";

fn jump_repo() -> TestRepo {
    let repo = TestRepo::with_berray_core();
    repo.add_java("com/berray/components/Jump.java", JUMP);
    repo
}

#[test]
fn test_default_output_location() {
    let repo = jump_repo();
    repo.run_cli_success(&["src"]);

    assert!(repo.file_exists("doc/doc.json"));
    let json = assert_valid_json(&repo.read_file("doc/doc.json"), "doc.json");
    assert_eq!(json_class_names(&json), vec!["Jump"]);

    let apply = &json[0]["methods"][0];
    assert_eq!(apply["name"], "apply");
    assert_eq!(apply["documentation"], "does a jump");
    assert_eq!(apply["type"], "number");
    assert_eq!(apply["modifiers"][0], "public");
    assert_eq!(apply["parameters"][0]["name"], "force");
    assert_eq!(apply["parameters"][0]["type"], "java.lang.Float");
    assert_eq!(
        json[0]["extendedClasses"],
        serde_json::json!(["com.berray.components.core.Component"])
    );
    assert!(json[0].get("classJavaDoc").is_none());
}

#[test]
fn test_output_to_stdout() {
    let repo = jump_repo();
    let stdout = repo.run_cli_success(&["src", "--output", "-", "--format", "compact"]);

    assert_eq!(stdout.lines().count(), 1);
    let json = assert_valid_json(&stdout, "stdout");
    assert_eq!(json_class_names(&json), vec!["Jump"]);
    assert!(!repo.file_exists("doc/doc.json"));
}

#[test]
fn test_custom_output_path_and_interesting_override() {
    let repo = jump_repo();
    repo.add_java("org/other/Thing.java", "package org.other; public class Thing extends Base {}")
        .add_java("org/other/Base.java", "package org.other; public class Base {}");

    repo.run_cli_success(&["src", "-o", "out/api.json", "-i", "org.other.Base"]);

    let json = assert_valid_json(&repo.read_file("out/api.json"), "out/api.json");
    assert_eq!(json_class_names(&json), vec!["Thing"]);
}

#[test]
fn test_local_config_file() {
    let repo = jump_repo();
    repo.add_file(
        "berray-doc.toml",
        "output = \"site/components.json\"\n\
         interesting_base_types = [\"com.berray.components.core.Component\"]\n",
    );

    repo.run_cli_success(&["src"]);
    let json = assert_valid_json(&repo.read_file("site/components.json"), "configured output");
    assert_eq!(json_class_names(&json), vec!["Jump"]);
}

#[test]
fn test_repeated_runs_are_identical() {
    let repo = jump_repo();
    repo.run_cli_success(&["src"]);
    let first = repo.read_file("doc/doc.json");
    repo.run_cli_success(&["src"]);
    let second = repo.read_file("doc/doc.json");
    assert_eq!(first, second);
}

#[test]
fn test_missing_argument_is_usage_error() {
    let repo = TestRepo::new();
    let (code, stderr) = repo.run_cli_failure(&[]);
    assert_eq!(code, Some(2));
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
}

#[test]
fn test_extra_argument_is_usage_error() {
    let repo = jump_repo();
    let (code, _) = repo.run_cli_failure(&["src", "other"]);
    assert_eq!(code, Some(2));
    assert!(!repo.file_exists("doc/doc.json"));
}

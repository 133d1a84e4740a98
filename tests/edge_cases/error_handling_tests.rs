//! Error Handling and Edge Case Tests

use crate::common::{assert_valid_json, TestRepo};
use berray_doc::{DocgenError, ResolveError};

// ============================================================================
// RESOLUTION FAILURES
// ============================================================================

#[test]
fn test_unresolved_supertype_writes_nothing() {
    let repo = TestRepo::with_berray_core();
    repo.add_java(
        "com/berray/components/Ok.java",
        "package com.berray.components; public class Ok extends com.berray.components.core.Component {}",
    )
    .add_java(
        "com/berray/components/Broken.java",
        "package com.berray.components; public class Broken extends MissingBase {}",
    );

    let (code, stderr) = repo.run_cli_failure(&["src"]);
    assert_eq!(code, Some(4));
    assert!(stderr.contains("MissingBase"), "stderr: {}", stderr);
    assert!(!repo.file_exists("doc/doc.json"));
}

#[test]
fn test_failed_run_keeps_previous_output() {
    let repo = TestRepo::with_berray_core();
    repo.add_file("doc/doc.json", "[]");
    repo.add_java(
        "com/berray/components/Broken.java",
        "package com.berray.components;\n\
         import com.berray.components.core.Component;\n\
         public class Broken extends Component { void use(Unknown value) {} }",
    );

    let (code, _) = repo.run_cli_failure(&["src"]);
    assert_eq!(code, Some(4));
    assert_eq!(repo.read_file("doc/doc.json"), "[]");
}

#[test]
fn test_import_without_declaration_fails_on_ancestors() {
    let repo = TestRepo::new();
    repo.add_java(
        "game/Enemy.java",
        "package game;\n\
         import org.engine.Entity;\n\
         public class Enemy extends Entity {}",
    );

    match repo.extract() {
        Err(DocgenError::Resolution { path, source }) => {
            assert_eq!(path, "game/Enemy.java");
            assert_eq!(
                source,
                ResolveError::MissingDeclaration {
                    name: "org.engine.Entity".to_string()
                }
            );
        }
        other => panic!("expected a resolution failure, got {:?}", other),
    }
}

// ============================================================================
// INPUT PROBLEMS
// ============================================================================

#[test]
fn test_missing_source_root() {
    let repo = TestRepo::new();
    let (code, stderr) = repo.run_cli_failure(&["does-not-exist"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("does-not-exist"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_config_file() {
    let repo = TestRepo::with_berray_core();
    repo.add_file("bad.toml", "interesting = [\"typo\"]\n");

    let (code, stderr) = repo.run_cli_failure(&["src", "--config", "bad.toml"]);
    assert_eq!(code, Some(5));
    assert!(stderr.contains("config"), "stderr: {}", stderr);
}

#[test]
fn test_explicit_config_must_exist() {
    let repo = TestRepo::with_berray_core();
    let (code, _) = repo.run_cli_failure(&["src", "--config", "absent.toml"]);
    assert_eq!(code, Some(5));
}

// ============================================================================
// EMPTY AND ODD SOURCES
// ============================================================================

#[test]
fn test_empty_source_root() {
    let repo = TestRepo::new();
    std::fs::create_dir_all(repo.source_root()).unwrap();

    let stdout = repo.run_cli_success(&["src", "-o", "-"]);
    let json = assert_valid_json(&stdout, "empty tree");
    assert_eq!(json, serde_json::json!([]));
}

#[test]
fn test_empty_and_broken_files_are_tolerated() {
    let repo = TestRepo::with_berray_core();
    repo.add_java("com/berray/Empty.java", "")
        .add_java("com/berray/Comments.java", "// nothing here\n/* still nothing */\n")
        .add_java(
            "com/berray/components/Half.java",
            "package com.berray.components;\n\
             import com.berray.components.core.Component;\n\
             public class Half extends Component { public void ok(int a) {} }\n\
             class {",
        );

    let extraction = repo.extract().unwrap();
    assert!(extraction.classes.iter().any(|c| c.qualified_name == "Half"));
}

#[test]
fn test_non_java_files_are_ignored() {
    let repo = TestRepo::with_berray_core();
    repo.add_java("com/berray/README.md", "class NotJava extends Nowhere {}")
        .add_java("com/berray/Script.kt", "class Kotlin : Nowhere()");

    let extraction = repo.extract().unwrap();
    assert_eq!(extraction.units, 3);
}

//! Custom assertions for integration tests

use serde_json::Value;

use berray_doc::{ClassDoc, MethodDoc};

/// Assert that output is valid JSON and return parsed value
pub fn assert_valid_json(output: &str, context: &str) -> Value {
    serde_json::from_str(output).unwrap_or_else(|e| {
        panic!(
            "Expected valid JSON ({}): {}\nOutput:\n{}",
            context, e, output
        )
    })
}

/// Find a class by its qualified name or fail with the names present
pub fn find_class<'a>(classes: &'a [ClassDoc], qualified_name: &str) -> &'a ClassDoc {
    classes
        .iter()
        .find(|c| c.qualified_name == qualified_name)
        .unwrap_or_else(|| {
            panic!(
                "Expected class '{}' in {:?}",
                qualified_name,
                class_names(classes)
            )
        })
}

pub fn find_method<'a>(class: &'a ClassDoc, name: &str) -> &'a MethodDoc {
    class
        .methods
        .iter()
        .find(|m| m.name == name)
        .unwrap_or_else(|| panic!("Expected method '{}' on {}", name, class.qualified_name))
}

pub fn class_names(classes: &[ClassDoc]) -> Vec<&str> {
    classes.iter().map(|c| c.qualified_name.as_str()).collect()
}

/// Names of the classes in a generated JSON document
pub fn json_class_names(json: &Value) -> Vec<String> {
    json.as_array()
        .unwrap_or_else(|| panic!("Expected a JSON array, got {}", json))
        .iter()
        .map(|c| c["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Assert that no ancestor list mentions java.lang.Object
pub fn assert_no_root_type(classes: &[ClassDoc]) {
    for class in classes {
        assert!(
            !class.ancestors.iter().any(|a| a == "java.lang.Object"),
            "{} reports java.lang.Object: {:?}",
            class.qualified_name,
            class.ancestors
        );
    }
}

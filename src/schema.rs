//! Documentation model data structures
//!
//! These records are passive accumulators filled in by the extraction walk.
//! The serialized key names match the `doc.json` layout consumed by the
//! berray documentation site, so they differ from the Rust field names.

use serde::{Deserialize, Serialize};

/// Documentation for one declared class, interface, enum or record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDoc {
    /// Dot-joined simple names of the enclosing classes and this class,
    /// outer to inner (`Outer.Inner`), without the package
    #[serde(rename = "name")]
    pub qualified_name: String,

    /// Free text of the class documentation comment
    #[serde(
        rename = "classJavaDoc",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Fully-qualified supertypes: each declared supertype followed by its
    /// transitive ancestors, `java.lang.Object` excluded
    #[serde(rename = "extendedClasses", default)]
    pub ancestors: Vec<String>,

    /// Methods in declaration order
    #[serde(default)]
    pub methods: Vec<MethodDoc>,
}

impl ClassDoc {
    /// Create an empty entry for a class that was just entered
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Default::default()
        }
    }

    /// Simple name of the class (last segment of the qualified name)
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }

    pub fn add_ancestor(&mut self, name: impl Into<String>) {
        self.ancestors.push(name.into());
    }

    /// Append a method and return its index
    pub fn add_method(&mut self, method: MethodDoc) -> usize {
        self.methods.push(method);
        self.methods.len() - 1
    }

    /// Whether any ancestor is one of the given type names
    pub fn extends_any<'a, I>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .any(|name| self.ancestors.iter().any(|a| a == name))
    }
}

/// Documentation for one method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDoc {
    /// Method identifier as declared
    pub name: String,

    /// Free text of the documentation comment
    #[serde(
        rename = "documentation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Payload of the first `@type` tag
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub explicit_type: Option<String>,

    /// Keyword modifiers in declared order (`public`, `static`, ...)
    #[serde(default)]
    pub modifiers: Vec<String>,

    /// Parameters in declaration order
    #[serde(default)]
    pub parameters: Vec<ParameterDoc>,
}

impl MethodDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_parameter(&mut self, name: impl Into<String>, resolved_type: Option<String>) {
        self.parameters.push(ParameterDoc {
            name: name.into(),
            resolved_type,
        });
    }
}

/// Documentation for one method parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDoc {
    /// Parameter identifier
    pub name: String,

    /// Boxed primitive name, fully-qualified reference name, an `unknown: ...`
    /// diagnostic, or absent when the type is inferred
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resolved_type: Option<String>,
}

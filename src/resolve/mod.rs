//! Symbol resolution
//!
//! The extraction walk only needs two capabilities from a resolver: turning
//! a written type into a resolved type, and enumerating every ancestor of a
//! reference type. [`SymbolResolver`] is that seam; [`SourceIndex`] is the
//! implementation backed by the parsed sources and a table of core JDK types.

pub mod index;
pub mod jdk;

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::syntax::{ImportDecl, PrimitiveType, TypeSyntax};

pub use index::SourceIndex;

/// Name of the universal root type
pub const ROOT_TYPE: &str = "java.lang.Object";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("cannot resolve type `{name}`")]
    UnknownType { name: String },

    #[error("declaration of `{name}` is not available on the lookup path")]
    MissingDeclaration { name: String },

    #[error("`{name}` is not a reference type")]
    NotAReferenceType { name: String },

    #[error("cyclic inheritance involving `{name}`")]
    CyclicInheritance { name: String },

    #[error("type is inferred and cannot be resolved from source")]
    InferredType,
}

/// A resolved type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    Primitive(PrimitiveType),
    Reference { qualified_name: String },
    Array(Box<ResolvedType>),
    TypeVariable(String),
}

impl ResolvedType {
    pub fn reference(qualified_name: impl Into<String>) -> Self {
        Self::Reference {
            qualified_name: qualified_name.into(),
        }
    }

    pub fn as_reference(&self) -> Option<ResolvedReference> {
        match self {
            Self::Reference { qualified_name } => Some(ResolvedReference::new(qualified_name)),
            _ => None,
        }
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(primitive) => f.write_str(primitive.keyword()),
            Self::Reference { qualified_name } => f.write_str(qualified_name),
            Self::Array(element) => write!(f, "{}[]", element),
            Self::TypeVariable(name) => write!(f, "typevar {}", name),
        }
    }
}

/// A resolved class or interface
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedReference {
    pub qualified_name: String,
}

impl ResolvedReference {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.qualified_name == ROOT_TYPE
    }
}

/// Imports of one source unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportTable {
    /// Simple name -> qualified name
    single_type: HashMap<String, String>,
    /// Packages and types imported with `.*`, in declaration order
    on_demand: Vec<String>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an import; static imports never name types and are skipped
    pub fn add(&mut self, import: &ImportDecl) {
        if import.is_static {
            return;
        }
        if import.on_demand {
            if !self.on_demand.contains(&import.path) {
                self.on_demand.push(import.path.clone());
            }
            return;
        }
        let simple = import
            .path
            .rsplit('.')
            .next()
            .unwrap_or(&import.path)
            .to_string();
        self.single_type.insert(simple, import.path.clone());
    }

    pub fn single_type(&self, simple_name: &str) -> Option<&str> {
        self.single_type.get(simple_name).map(String::as_str)
    }

    pub fn on_demand(&self) -> &[String] {
        &self.on_demand
    }
}

impl<'a> FromIterator<&'a ImportDecl> for ImportTable {
    fn from_iter<I: IntoIterator<Item = &'a ImportDecl>>(iter: I) -> Self {
        let mut table = Self::new();
        for import in iter {
            table.add(import);
        }
        table
    }
}

/// Names visible at one point of a source unit
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    pub package: Option<&'a str>,
    pub imports: &'a ImportTable,
    /// Fully-qualified names of the enclosing classes, outer to inner
    pub enclosing: Vec<String>,
    pub type_variables: Vec<String>,
}

impl<'a> Scope<'a> {
    pub fn new(package: Option<&'a str>, imports: &'a ImportTable) -> Self {
        Self {
            package,
            imports,
            enclosing: Vec::new(),
            type_variables: Vec::new(),
        }
    }
}

/// The capability the extraction walk consumes
pub trait SymbolResolver {
    /// Resolve a written type in the given scope
    fn resolve(&self, ty: &TypeSyntax, scope: &Scope<'_>) -> Result<ResolvedType, ResolveError>;

    /// Every transitive supertype of `reference`, depth-first in declaration
    /// order. The root type is included when the declarations reach it.
    fn all_ancestors(
        &self,
        reference: &ResolvedReference,
    ) -> Result<Vec<ResolvedReference>, ResolveError>;
}

//! Parsed source units
//!
//! A [`SourceUnit`] is one Java file lowered into a small closed tree of
//! declarations. Only the declarations that matter for documentation are
//! kept: package, imports, class-like types, methods, parameters and
//! supertype clauses. The extraction walk matches on [`Decl`] directly.

pub mod common;
pub mod java;

use std::fmt;
use std::path::PathBuf;

/// One parsed file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceUnit {
    /// Path relative to the source root
    pub path: PathBuf,
    pub decls: Vec<Decl>,
}

impl SourceUnit {
    /// Declared package, if any
    pub fn package(&self) -> Option<&str> {
        self.decls.iter().find_map(|decl| match decl {
            Decl::Package(package) => Some(package.name.as_str()),
            _ => None,
        })
    }

    pub fn imports(&self) -> impl Iterator<Item = &ImportDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Import(import) => Some(import),
            _ => None,
        })
    }

    /// Top-level type declarations
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Class(class) => Some(class),
            _ => None,
        })
    }
}

/// Declaration kinds the extraction walk understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Package(PackageDecl),
    Import(ImportDecl),
    Class(ClassDecl),
    Method(MethodDecl),
    Parameter(ParameterDecl),
    Supertype(SupertypeRef),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDecl {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    /// Dotted name as written, without the trailing `.*`
    pub path: String,
    pub is_static: bool,
    /// `import a.b.*;`
    pub on_demand: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

impl ClassKind {
    /// The implicit superclass every type of this kind extends
    pub fn implicit_superclass(&self) -> Option<&'static str> {
        match self {
            Self::Class => Some("java.lang.Object"),
            Self::Enum => Some("java.lang.Enum"),
            Self::Record => Some("java.lang.Record"),
            Self::Interface | Self::Annotation => None,
        }
    }
}

/// A class, interface, enum, record or annotation type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub kind: ClassKind,
    /// Raw `/** ... */` comment attached to the declaration
    pub doc: Option<String>,
    pub type_parameters: Vec<String>,
    /// Supertype clauses first, then body members in source order
    pub members: Vec<Decl>,
}

impl ClassDecl {
    pub fn supertypes(&self) -> impl Iterator<Item = &SupertypeRef> {
        self.members.iter().filter_map(|decl| match decl {
            Decl::Supertype(supertype) => Some(supertype),
            _ => None,
        })
    }

    /// Directly nested member types
    pub fn nested_classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.members.iter().filter_map(|decl| match decl {
            Decl::Class(class) => Some(class),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub doc: Option<String>,
    /// Keyword modifiers in declared order; annotations excluded
    pub modifiers: Vec<String>,
    pub type_parameters: Vec<String>,
    /// Formal parameters, then declarations found in the body
    pub members: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDecl {
    pub name: String,
    pub ty: TypeSyntax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupertypeClause {
    Extends,
    Implements,
}

/// A declared supertype: `extends Foo` or one entry of `implements A, B`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupertypeRef {
    pub clause: SupertypeClause,
    pub name: TypeName,
}

/// A type reference flattened to its dotted name; type arguments and type
/// annotations are dropped
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    pub segments: Vec<String>,
}

impl TypeName {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a dotted name (`java.util.List`)
    pub fn parse(dotted: &str) -> Self {
        Self::new(
            dotted
                .split('.')
                .map(str::trim)
                .filter(|segment| !segment.is_empty()),
        )
    }

    pub fn is_simple(&self) -> bool {
        self.segments.len() == 1
    }

    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "boolean" => Some(Self::Boolean),
            "byte" => Some(Self::Byte),
            "short" => Some(Self::Short),
            "char" => Some(Self::Char),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Char => "char",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Fully-qualified name of the wrapper class
    pub fn boxed_name(&self) -> &'static str {
        match self {
            Self::Boolean => "java.lang.Boolean",
            Self::Byte => "java.lang.Byte",
            Self::Short => "java.lang.Short",
            Self::Char => "java.lang.Character",
            Self::Int => "java.lang.Integer",
            Self::Long => "java.lang.Long",
            Self::Float => "java.lang.Float",
            Self::Double => "java.lang.Double",
        }
    }
}

/// Declared type of a parameter as written in source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSyntax {
    /// No type written: inferred lambda parameters and `var`
    Inferred,
    Primitive(PrimitiveType),
    Named(TypeName),
    Array {
        element: Box<TypeSyntax>,
        dimensions: usize,
    },
}

impl TypeSyntax {
    pub fn is_inferred(&self) -> bool {
        matches!(self, Self::Inferred)
    }
}

impl fmt::Display for TypeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inferred => f.write_str("var"),
            Self::Primitive(primitive) => f.write_str(primitive.keyword()),
            Self::Named(name) => write!(f, "{}", name),
            Self::Array {
                element,
                dimensions,
            } => write!(f, "{}{}", element, "[]".repeat(*dimensions)),
        }
    }
}

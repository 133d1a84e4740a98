//! Method and parameter signatures

use crate::javadoc::{DocComment, TYPE_TAG};
use crate::resolve::{ResolveError, ResolvedType, Scope, SymbolResolver};
use crate::schema::MethodDoc;
use crate::syntax::{MethodDecl, TypeSyntax};

/// Prefix of parameter types that resolved to something other than a
/// primitive or a class
pub const UNKNOWN_TYPE_PREFIX: &str = "unknown: ";

/// Free text of a raw documentation comment
pub fn description(raw: Option<&str>) -> Option<String> {
    raw.map(DocComment::parse)
        .and_then(|doc| doc.description().map(str::to_string))
}

/// A method entry without parameters: name, modifiers and comment
pub fn method_doc(method: &MethodDecl) -> MethodDoc {
    let mut doc = MethodDoc::new(&method.name);
    doc.modifiers = method.modifiers.clone();
    if let Some(raw) = &method.doc {
        let comment = DocComment::parse(raw);
        doc.description = comment.description().map(str::to_string);
        doc.explicit_type = comment.tag_content(TYPE_TAG).map(str::to_string);
    }
    doc
}

/// Display name of a resolved parameter type
pub fn type_display_name(resolved: &ResolvedType) -> String {
    match resolved {
        ResolvedType::Primitive(primitive) => primitive.boxed_name().to_string(),
        ResolvedType::Reference { qualified_name } => qualified_name.clone(),
        other => format!("{}{}", UNKNOWN_TYPE_PREFIX, other),
    }
}

/// Documented type of a parameter; `None` when no type is written
pub fn parameter_type<R>(
    resolver: &R,
    ty: &TypeSyntax,
    scope: &Scope<'_>,
) -> Result<Option<String>, ResolveError>
where
    R: SymbolResolver + ?Sized,
{
    if ty.is_inferred() {
        return Ok(None);
    }
    let resolved = resolver.resolve(ty, scope)?;
    Ok(Some(type_display_name(&resolved)))
}

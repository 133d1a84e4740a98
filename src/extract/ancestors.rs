//! Ancestor chains of declared supertypes

use crate::resolve::{ResolveError, Scope, SymbolResolver};
use crate::syntax::{TypeName, TypeSyntax};

/// Resolve a declared supertype and expand it to its full ancestry.
///
/// The supertype itself comes first, followed by its transitive ancestors in
/// the order the resolver reports them. `java.lang.Object` is never part of
/// the chain. Duplicates reported by the resolver are kept.
pub fn resolve_ancestor_chain<R>(
    resolver: &R,
    supertype: &TypeName,
    scope: &Scope<'_>,
) -> Result<Vec<String>, ResolveError>
where
    R: SymbolResolver + ?Sized,
{
    let resolved = resolver.resolve(&TypeSyntax::Named(supertype.clone()), scope)?;
    let reference = resolved
        .as_reference()
        .ok_or_else(|| ResolveError::NotAReferenceType {
            name: supertype.dotted(),
        })?;

    let mut chain = Vec::new();
    if !reference.is_root() {
        chain.push(reference.qualified_name.clone());
    }
    chain.extend(
        resolver
            .all_ancestors(&reference)?
            .into_iter()
            .filter(|ancestor| !ancestor.is_root())
            .map(|ancestor| ancestor.qualified_name),
    );
    Ok(chain)
}

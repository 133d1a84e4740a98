//! Type index over parsed sources
//!
//! [`SourceIndex`] knows every class declared in the parsed units, the core
//! JDK table and any configured extra types. Supertype clauses of declared
//! classes are resolved once, when the index is built; failures are kept and
//! only surface when the ancestors of that class are asked for.

use std::collections::HashMap;

use tracing::debug;

use super::jdk::JDK_TYPES;
use super::{
    ImportTable, ResolveError, ResolvedReference, ResolvedType, Scope, SymbolResolver, ROOT_TYPE,
};
use crate::config::KnownType;
use crate::syntax::{ClassDecl, ClassKind, Decl, SourceUnit, SupertypeClause, TypeName, TypeSyntax};

#[derive(Debug, Clone)]
struct TypeInfo {
    kind: ClassKind,
    /// Direct supertypes, superclass first
    supertypes: Vec<Result<String, ResolveError>>,
}

/// A declared class waiting for its supertypes to be resolved
struct PendingClass {
    qualified_name: String,
    kind: ClassKind,
    supertypes: Vec<(SupertypeClause, TypeName)>,
    unit: usize,
    enclosing: Vec<String>,
    type_variables: Vec<String>,
}

/// Package and imports of one parsed unit
type UnitScope = (Option<String>, ImportTable);

/// Resolver backed by the parsed source units
#[derive(Debug, Clone, Default)]
pub struct SourceIndex {
    types: HashMap<String, TypeInfo>,
}

impl SourceIndex {
    /// Index the given units on top of the JDK table and `known_types`
    pub fn build<'a, I>(units: I, known_types: &[KnownType]) -> Self
    where
        I: IntoIterator<Item = &'a SourceUnit>,
    {
        let mut index = Self::default();
        for (name, kind, superclass, interfaces) in JDK_TYPES {
            index.insert_resolved(name, *kind, *superclass, interfaces.iter().copied());
        }
        for known in known_types {
            let kind = if known.interface {
                ClassKind::Interface
            } else {
                ClassKind::Class
            };
            index.insert_resolved(
                &known.name,
                kind,
                known.superclass.as_deref(),
                known.interfaces.iter().map(String::as_str),
            );
        }

        let mut scopes = Vec::new();
        let mut pending = Vec::new();
        for unit in units {
            let package = unit.package().map(str::to_string);
            let imports: ImportTable = unit.imports().collect();
            let unit_index = scopes.len();
            for class in unit.classes() {
                declare_class(
                    class,
                    package.as_deref(),
                    unit_index,
                    &[],
                    &[],
                    &mut pending,
                );
            }
            scopes.push((package, imports));
        }

        for class in &pending {
            index.types.insert(
                class.qualified_name.clone(),
                TypeInfo {
                    kind: class.kind,
                    supertypes: Vec::new(),
                },
            );
        }

        // Member types inherited by an enclosing class are only visible once
        // that class's supertypes are in, so retry failures while they shrink
        let mut unresolved: Vec<&PendingClass> = pending.iter().collect();
        let mut passes = 0;
        loop {
            passes += 1;
            let resolved: Vec<_> = unresolved
                .iter()
                .map(|class| index.direct_supertypes(class, &scopes[class.unit]))
                .collect();

            let mut remaining = Vec::new();
            for (class, supertypes) in unresolved.iter().zip(resolved) {
                if supertypes.iter().any(Result::is_err) {
                    remaining.push(*class);
                }
                if let Some(info) = index.types.get_mut(&class.qualified_name) {
                    info.supertypes = supertypes;
                }
            }
            if remaining.is_empty() || remaining.len() == unresolved.len() {
                break;
            }
            unresolved = remaining;
        }

        debug!(
            types = index.types.len(),
            declared = pending.len(),
            passes,
            "built source index"
        );
        index
    }

    /// Whether a declaration for this fully-qualified name is known
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    /// Kind of a known type
    pub fn kind(&self, qualified_name: &str) -> Option<ClassKind> {
        self.types.get(qualified_name).map(|info| info.kind)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn insert_resolved<'s>(
        &mut self,
        name: &str,
        kind: ClassKind,
        superclass: Option<&str>,
        interfaces: impl Iterator<Item = &'s str>,
    ) {
        let superclass = match superclass {
            Some(superclass) => Some(superclass),
            None if name == ROOT_TYPE => None,
            None => kind.implicit_superclass(),
        };
        let supertypes = superclass
            .into_iter()
            .map(str::to_string)
            .chain(interfaces.map(str::to_string))
            .map(Ok)
            .collect();
        self.types
            .insert(name.to_string(), TypeInfo { kind, supertypes });
    }

    fn direct_supertypes(
        &self,
        class: &PendingClass,
        (package, imports): &UnitScope,
    ) -> Vec<Result<String, ResolveError>> {
        let scope = Scope {
            package: package.as_deref(),
            imports,
            enclosing: class.enclosing.clone(),
            type_variables: class.type_variables.clone(),
        };
        let declares_superclass = class.kind == ClassKind::Class
            && class
                .supertypes
                .iter()
                .any(|(clause, _)| *clause == SupertypeClause::Extends);

        let mut supertypes = Vec::new();
        if !declares_superclass {
            if let Some(implicit) = class.kind.implicit_superclass() {
                supertypes.push(Ok(implicit.to_string()));
            }
        }
        for (_, name) in &class.supertypes {
            supertypes.push(self.resolve_reference(name, &scope));
        }
        supertypes
    }

    fn resolve_reference(&self, name: &TypeName, scope: &Scope<'_>) -> Result<String, ResolveError> {
        match self.lookup(name, scope)? {
            ResolvedType::Reference { qualified_name } => Ok(qualified_name),
            _ => Err(ResolveError::NotAReferenceType { name: name.dotted() }),
        }
    }

    fn lookup(&self, name: &TypeName, scope: &Scope<'_>) -> Result<ResolvedType, ResolveError> {
        let Some((first, rest)) = name.segments.split_first() else {
            return Err(ResolveError::UnknownType { name: name.dotted() });
        };

        if rest.is_empty() && scope.type_variables.iter().any(|t| t == first) {
            return Ok(ResolvedType::TypeVariable(first.clone()));
        }

        let qualified_name = match self.lookup_simple(first, scope) {
            Some(base) => self.member_path(base, rest, name)?,
            None => self.lookup_qualified(name)?,
        };
        Ok(ResolvedType::reference(qualified_name))
    }

    /// Resolve the first segment of a name
    fn lookup_simple(&self, simple: &str, scope: &Scope<'_>) -> Option<String> {
        for enclosing in scope.enclosing.iter().rev() {
            if let Some(member) = self.member_type(enclosing, simple, &mut Vec::new()) {
                return Some(member);
            }
            if enclosing.rsplit('.').next() == Some(simple) {
                return Some(enclosing.clone());
            }
        }

        // Imported names are on the lookup path even without a declaration
        if let Some(imported) = scope.imports.single_type(simple) {
            return Some(imported.to_string());
        }

        let same_package = match scope.package {
            Some(package) => format!("{}.{}", package, simple),
            None => simple.to_string(),
        };
        if self.contains(&same_package) {
            return Some(same_package);
        }

        for package in scope.imports.on_demand() {
            let candidate = format!("{}.{}", package, simple);
            if self.contains(&candidate) {
                return Some(candidate);
            }
        }

        let lang = format!("java.lang.{}", simple);
        self.contains(&lang).then_some(lang)
    }

    /// `simple` as a member type of `owner`, declared there or inherited
    /// from one of its supertypes (depth-first, superclass first)
    fn member_type(&self, owner: &str, simple: &str, visited: &mut Vec<String>) -> Option<String> {
        if visited.iter().any(|v| v == owner) {
            return None;
        }
        let member = format!("{}.{}", owner, simple);
        if self.contains(&member) {
            return Some(member);
        }
        visited.push(owner.to_string());
        self.types
            .get(owner)?
            .supertypes
            .iter()
            .filter_map(|supertype| supertype.as_ref().ok())
            .find_map(|supertype| self.member_type(supertype, simple, visited))
    }

    /// Follow the remaining segments as member types of `base`
    fn member_path(
        &self,
        base: String,
        rest: &[String],
        name: &TypeName,
    ) -> Result<String, ResolveError> {
        // Nothing is known about an opaque import, take the segments as given
        if !self.contains(&base) {
            return Ok(rest
                .iter()
                .fold(base, |current, segment| format!("{}.{}", current, segment)));
        }
        let mut current = base;
        for segment in rest {
            current = self
                .member_type(&current, segment, &mut Vec::new())
                .ok_or_else(|| ResolveError::UnknownType { name: name.dotted() })?;
        }
        Ok(current)
    }

    /// A fully-qualified name: the shortest known prefix is the type, the
    /// rest are member types
    fn lookup_qualified(&self, name: &TypeName) -> Result<String, ResolveError> {
        for split in 1..=name.segments.len() {
            let prefix = name.segments[..split].join(".");
            if self.contains(&prefix) {
                return self.member_path(prefix, &name.segments[split..], name);
            }
        }
        Err(ResolveError::UnknownType { name: name.dotted() })
    }

    fn collect_ancestors(
        &self,
        qualified_name: &str,
        visiting: &mut Vec<String>,
    ) -> Result<Vec<ResolvedReference>, ResolveError> {
        if visiting.iter().any(|v| v == qualified_name) {
            return Err(ResolveError::CyclicInheritance {
                name: qualified_name.to_string(),
            });
        }
        let info = self
            .types
            .get(qualified_name)
            .ok_or_else(|| ResolveError::MissingDeclaration {
                name: qualified_name.to_string(),
            })?;

        visiting.push(qualified_name.to_string());
        let mut ancestors = Vec::new();
        for supertype in &info.supertypes {
            let supertype = supertype.clone()?;
            let inherited = self.collect_ancestors(&supertype, visiting)?;
            ancestors.push(ResolvedReference::new(supertype));
            for ancestor in inherited {
                if !ancestors.contains(&ancestor) {
                    ancestors.push(ancestor);
                }
            }
        }
        visiting.pop();
        Ok(ancestors)
    }
}

impl SymbolResolver for SourceIndex {
    fn resolve(&self, ty: &TypeSyntax, scope: &Scope<'_>) -> Result<ResolvedType, ResolveError> {
        match ty {
            TypeSyntax::Inferred => Err(ResolveError::InferredType),
            TypeSyntax::Primitive(primitive) => Ok(ResolvedType::Primitive(*primitive)),
            TypeSyntax::Named(name) => self.lookup(name, scope),
            TypeSyntax::Array {
                element,
                dimensions,
            } => {
                let mut resolved = self.resolve(element, scope)?;
                for _ in 0..*dimensions {
                    resolved = ResolvedType::Array(Box::new(resolved));
                }
                Ok(resolved)
            }
        }
    }

    fn all_ancestors(
        &self,
        reference: &ResolvedReference,
    ) -> Result<Vec<ResolvedReference>, ResolveError> {
        self.collect_ancestors(&reference.qualified_name, &mut Vec::new())
    }
}

/// Record a class, its member types and the local classes of its methods.
/// Local classes are named like members of the enclosing class, the same
/// way the class stack names them during extraction.
fn declare_class(
    class: &ClassDecl,
    package: Option<&str>,
    unit: usize,
    enclosing: &[String],
    outer_type_variables: &[String],
    pending: &mut Vec<PendingClass>,
) {
    let qualified_name = match (enclosing.last(), package) {
        (Some(outer), _) => format!("{}.{}", outer, class.name),
        (None, Some(package)) => format!("{}.{}", package, class.name),
        (None, None) => class.name.clone(),
    };

    let mut type_variables = outer_type_variables.to_vec();
    type_variables.extend(class.type_parameters.iter().cloned());

    let mut inner_enclosing = enclosing.to_vec();
    inner_enclosing.push(qualified_name.clone());
    for member in &class.members {
        match member {
            Decl::Class(nested) => declare_class(
                nested,
                package,
                unit,
                &inner_enclosing,
                &type_variables,
                pending,
            ),
            Decl::Method(method) => {
                let mut method_variables = type_variables.clone();
                method_variables.extend(method.type_parameters.iter().cloned());
                for local in method.members.iter().filter_map(|decl| match decl {
                    Decl::Class(local) => Some(local),
                    _ => None,
                }) {
                    declare_class(
                        local,
                        package,
                        unit,
                        &inner_enclosing,
                        &method_variables,
                        pending,
                    );
                }
            }
            _ => {}
        }
    }

    pending.push(PendingClass {
        qualified_name,
        kind: class.kind,
        supertypes: class
            .supertypes()
            .map(|supertype| (supertype.clause, supertype.name.clone()))
            .collect(),
        unit,
        enclosing: enclosing.to_vec(),
        type_variables,
    });
}

//! Documentation extraction
//!
//! One depth-first walk per [`SourceUnit`]: every class-like declaration
//! becomes a [`ClassDoc`], methods and their parameters are attached to the
//! class on top of the context stack, and each supertype clause appends its
//! full ancestor chain. Classes are finished in post-order (nested classes
//! before their enclosing class).
//!
//! Parameters always go to the most recently added method of the current
//! class, so a lambda in a field initializer that follows a method lands on
//! that method. Resolution failures abort the walk. Structural oddities (a
//! parameter in a class that has no method yet) are logged and the element
//! is dropped.

pub mod ancestors;
pub mod context;
pub mod signature;

use tracing::{debug, warn};

use crate::error::{DocgenError, Result};
use crate::resolve::{ResolveError, SymbolResolver};
use crate::schema::ClassDoc;
use crate::select::SelectionFilter;
use crate::syntax::{
    ClassDecl, Decl, ImportDecl, MethodDecl, PackageDecl, ParameterDecl, SourceUnit, SupertypeRef,
};

pub use ancestors::resolve_ancestor_chain;
pub use context::{ClassFrame, ClassStack, UnitContext};

/// Extract every class of one unit, in the order the classes were finished.
///
/// # Errors
///
/// Returns `DocgenError::Resolution` if a supertype or parameter type cannot
/// be resolved.
pub fn extract_unit<R>(unit: &SourceUnit, resolver: &R) -> Result<Vec<ClassDoc>>
where
    R: SymbolResolver + ?Sized,
{
    let mut walker = UnitWalker::new(resolver);
    for decl in &unit.decls {
        walker
            .visit(decl)
            .map_err(|source| DocgenError::Resolution {
                path: unit.path.display().to_string(),
                source,
            })?;
    }
    let classes = walker.finish();
    debug!(path = %unit.path.display(), classes = classes.len(), "extracted unit");
    Ok(classes)
}

/// Extract and filter a sequence of units. Stops at the first failure.
pub fn extract_units<'a, R, I>(
    units: I,
    resolver: &R,
    filter: &SelectionFilter,
) -> Result<Extraction>
where
    R: SymbolResolver + ?Sized,
    I: IntoIterator<Item = &'a SourceUnit>,
{
    let mut extraction = Extraction::default();
    for unit in units {
        let classes = extract_unit(unit, resolver)?;
        extraction.units += 1;
        extraction.seen += classes.len();
        extraction.classes.extend(filter.apply(classes));
    }
    Ok(extraction)
}

/// Result of extracting a whole source tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Kept classes, unit by unit
    pub classes: Vec<ClassDoc>,
    /// Units walked
    pub units: usize,
    /// Classes finished before filtering
    pub seen: usize,
}

struct UnitWalker<'r, R: ?Sized> {
    resolver: &'r R,
    context: UnitContext,
}

impl<'r, R> UnitWalker<'r, R>
where
    R: SymbolResolver + ?Sized,
{
    fn new(resolver: &'r R) -> Self {
        Self {
            resolver,
            context: UnitContext::new(),
        }
    }

    fn finish(self) -> Vec<ClassDoc> {
        if !self.context.classes.is_empty() {
            warn!(
                depth = self.context.classes.depth(),
                "class stack not empty at end of unit"
            );
        }
        self.context.classes.into_finished()
    }

    fn visit(&mut self, decl: &Decl) -> std::result::Result<(), ResolveError> {
        match decl {
            Decl::Package(package) => self.visit_package(package),
            Decl::Import(import) => self.visit_import(import),
            Decl::Class(class) => self.visit_class(class)?,
            Decl::Method(method) => self.visit_method(method)?,
            Decl::Parameter(parameter) => self.visit_parameter(parameter)?,
            Decl::Supertype(supertype) => self.visit_supertype(supertype)?,
        }
        Ok(())
    }

    fn visit_package(&mut self, package: &PackageDecl) {
        self.context.set_package(&package.name);
    }

    fn visit_import(&mut self, import: &ImportDecl) {
        self.context.imports.add(import);
    }

    fn visit_class(&mut self, class: &ClassDecl) -> std::result::Result<(), ResolveError> {
        let description = signature::description(class.doc.as_deref());
        self.context.classes.enter(&class.name, description);
        let mark = self.context.push_type_variables(&class.type_parameters);

        let result = class.members.iter().try_for_each(|member| self.visit(member));

        self.context.pop_type_variables(mark);
        self.context.classes.exit();
        result
    }

    fn visit_method(&mut self, method: &MethodDecl) -> std::result::Result<(), ResolveError> {
        let Some(frame) = self.context.classes.current_mut() else {
            warn!(method = %method.name, "method outside of any class, dropped");
            return Ok(());
        };
        let index = frame.doc.add_method(signature::method_doc(method));
        // Stays set after the body: later parameters go to the latest method
        frame.current_method = Some(index);
        let mark = self.context.push_type_variables(&method.type_parameters);

        let result = method.members.iter().try_for_each(|member| self.visit(member));

        self.context.pop_type_variables(mark);
        result
    }

    fn visit_parameter(&mut self, parameter: &ParameterDecl) -> std::result::Result<(), ResolveError> {
        let Some(frame) = self.context.classes.current() else {
            warn!(parameter = %parameter.name, "parameter outside of any class, dropped");
            return Ok(());
        };
        let Some(method) = frame.current_method else {
            warn!(
                class = %frame.doc.qualified_name,
                parameter = %parameter.name,
                "parameter with no current method, dropped"
            );
            return Ok(());
        };

        let resolved_type = {
            let scope = self.context.scope(true);
            signature::parameter_type(self.resolver, &parameter.ty, &scope)?
        };
        if let Some(frame) = self.context.classes.current_mut() {
            frame.doc.methods[method].add_parameter(&parameter.name, resolved_type);
        }
        Ok(())
    }

    fn visit_supertype(&mut self, supertype: &SupertypeRef) -> std::result::Result<(), ResolveError> {
        if self.context.classes.is_empty() {
            warn!(supertype = %supertype.name, "supertype clause outside of any class, dropped");
            return Ok(());
        }

        let chain = {
            let scope = self.context.scope(false);
            resolve_ancestor_chain(self.resolver, &supertype.name, &scope)?
        };
        if let Some(frame) = self.context.classes.current_mut() {
            frame.doc.ancestors.extend(chain);
        }
        Ok(())
    }
}

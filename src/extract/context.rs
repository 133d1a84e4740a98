//! Per-unit traversal state
//!
//! A [`UnitContext`] is created fresh for every source unit and dropped when
//! the unit is done; nothing in it outlives one traversal.

use crate::resolve::{ImportTable, Scope};
use crate::schema::ClassDoc;

/// One class being documented
#[derive(Debug, Clone)]
pub struct ClassFrame {
    pub doc: ClassDoc,
    /// Package-qualified name, used for name lookup
    pub fqn: String,
    /// Index of the most recently added method in `doc.methods`
    pub current_method: Option<usize>,
}

/// Stack of the classes enclosing the current position
#[derive(Debug, Default)]
pub struct ClassStack {
    package: Option<String>,
    frames: Vec<ClassFrame>,
    finished: Vec<ClassDoc>,
}

impl ClassStack {
    pub fn new(package: Option<String>) -> Self {
        Self {
            package,
            frames: Vec::new(),
            finished: Vec::new(),
        }
    }

    pub fn set_package(&mut self, package: impl Into<String>) {
        self.package = Some(package.into());
    }

    /// Push a new class; its name is joined onto the enclosing class names
    pub fn enter(&mut self, simple_name: &str, description: Option<String>) -> &mut ClassFrame {
        let qualified_name = match self.frames.last() {
            Some(outer) => format!("{}.{}", outer.doc.qualified_name, simple_name),
            None => simple_name.to_string(),
        };
        let fqn = match &self.package {
            Some(package) => format!("{}.{}", package, qualified_name),
            None => qualified_name.clone(),
        };

        let mut doc = ClassDoc::new(qualified_name);
        doc.description = description;
        self.frames.push(ClassFrame {
            doc,
            fqn,
            current_method: None,
        });
        let index = self.frames.len() - 1;
        &mut self.frames[index]
    }

    /// Pop the current class into the finished collection
    pub fn exit(&mut self) -> Option<&ClassDoc> {
        let frame = self.frames.pop()?;
        self.finished.push(frame.doc);
        self.finished.last()
    }

    pub fn current(&self) -> Option<&ClassFrame> {
        self.frames.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut ClassFrame> {
        self.frames.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Package-qualified names of the stacked classes, outer to inner.
    /// `include_current` decides whether the top frame is part of it.
    pub fn enclosing_names(&self, include_current: bool) -> Vec<String> {
        let take = if include_current {
            self.frames.len()
        } else {
            self.frames.len().saturating_sub(1)
        };
        self.frames[..take]
            .iter()
            .map(|frame| frame.fqn.clone())
            .collect()
    }

    /// Finished classes in the order they were exited
    pub fn finished(&self) -> &[ClassDoc] {
        &self.finished
    }

    pub fn into_finished(self) -> Vec<ClassDoc> {
        self.finished
    }
}

/// Traversal state of one source unit
#[derive(Debug, Default)]
pub struct UnitContext {
    pub package: Option<String>,
    pub imports: ImportTable,
    pub classes: ClassStack,
    type_variables: Vec<String>,
}

impl UnitContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_package(&mut self, package: &str) {
        self.package = Some(package.to_string());
        self.classes.set_package(package);
    }

    /// Bring type parameters into scope; returns the mark to pop back to
    pub fn push_type_variables(&mut self, names: &[String]) -> usize {
        let mark = self.type_variables.len();
        self.type_variables.extend(names.iter().cloned());
        mark
    }

    pub fn pop_type_variables(&mut self, mark: usize) {
        self.type_variables.truncate(mark);
    }

    /// Lookup scope at the current position
    pub fn scope(&self, include_current: bool) -> Scope<'_> {
        Scope {
            package: self.package.as_deref(),
            imports: &self.imports,
            enclosing: self.classes.enclosing_names(include_current),
            type_variables: self.type_variables.clone(),
        }
    }
}

//! Parsing of Java sources into [`SourceUnit`]s.
//!
//! This module owns the tree-sitter parser setup. Lowering the syntax tree
//! into declarations lives in [`crate::syntax::java`].
//!
//! # Example
//!
//! ```ignore
//! use berray_doc::parsing::parse_source_unit;
//! use std::path::Path;
//!
//! let source = "package com.berray; class Jump extends Component {}";
//! let unit = parse_source_unit(Path::new("Jump.java"), source)?;
//! assert_eq!(unit.package(), Some("com.berray"));
//! ```

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{DocgenError, Result};
use crate::syntax::java::lower_program;
use crate::syntax::SourceUnit;

/// Parse Java source text into a source unit.
///
/// # Errors
///
/// Returns `DocgenError::ParseFailure` if the grammar cannot be loaded or
/// tree-sitter gives up on the input. Syntax errors inside the file are
/// tolerated and only logged.
pub fn parse_source_unit(path: &Path, source: &str) -> Result<SourceUnit> {
    parse_source_unit_with_options(path, source, false)
}

/// Parse Java source text, optionally dumping the syntax tree to stderr.
pub fn parse_source_unit_with_options(
    path: &Path,
    source: &str,
    print_ast: bool,
) -> Result<SourceUnit> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_java::LANGUAGE.into())
        .map_err(|e| DocgenError::ParseFailure {
            message: format!("Failed to set language for {}: {:?}", path.display(), e),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| DocgenError::ParseFailure {
            message: format!("Failed to parse file: {}", path.display()),
        })?;

    if print_ast {
        eprintln!("=== AST for {} ===", path.display());
        eprintln!("{}", tree.root_node().to_sexp());
        eprintln!("=================");
    }

    let root = tree.root_node();
    if root.has_error() {
        warn!(path = %path.display(), "syntax errors in source, extracting what parsed");
    }

    Ok(SourceUnit {
        path: path.to_path_buf(),
        decls: lower_program(&root, source),
    })
}

/// Read and parse one file. The unit path is relative to `root`.
pub fn parse_file(root: &Path, path: &Path, print_ast: bool) -> Result<SourceUnit> {
    let source = fs::read_to_string(path).map_err(|e| DocgenError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let relative = path.strip_prefix(root).unwrap_or(path);
    parse_source_unit_with_options(relative, &source, print_ast)
}

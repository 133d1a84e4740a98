//! berray-doc: documentation extractor for the berray game framework
//!
//! Walks a tree of Java sources with tree-sitter, documents every class that
//! derives from one of the framework's base types (game objects, components,
//! actions) and writes the result as a single JSON document.
//!
//! # Example
//!
//! ```ignore
//! use berray_doc::{document_tree, DocConfig, OutputFormat};
//! use std::path::Path;
//!
//! let config = DocConfig::default();
//! let extraction = document_tree(Path::new("src/main/java"), &config, false)?;
//! let json = berray_doc::output::render(&extraction.classes, OutputFormat::Pretty)?;
//! println!("{}", json);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod fs_utils;
pub mod javadoc;
pub mod output;
pub mod parsing;
pub mod resolve;
pub mod schema;
pub mod select;
pub mod syntax;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use commands::{document_tree, run_generate, GenerateReport};
pub use config::{DocConfig, KnownType};
pub use error::{DocgenError, Result};
pub use extract::{extract_unit, extract_units, Extraction};
pub use parsing::parse_source_unit;
pub use resolve::{ResolveError, SourceIndex, SymbolResolver};
pub use schema::{ClassDoc, MethodDoc, ParameterDoc};
pub use select::SelectionFilter;

//! Command implementations for the berray-doc CLI
//!
//! berray-doc has a single command: document a source tree. The handler
//! takes the parsed `Cli` and the loaded `DocConfig`; everything below it is
//! library code that the integration tests call directly.

pub mod generate;

pub use generate::{document_tree, render_tree, run_generate, GenerateReport};

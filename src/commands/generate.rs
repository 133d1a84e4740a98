//! Generate command implementation
//!
//! Discover sources, parse them in parallel, index the declared types, walk
//! every unit and write the kept classes. Nothing is written unless every
//! unit was extracted.

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::config::DocConfig;
use crate::error::Result;
use crate::extract::{extract_units, Extraction};
use crate::fs_utils;
use crate::output::{self, OutputTarget};
use crate::parsing::parse_file;
use crate::resolve::SourceIndex;
use crate::select::SelectionFilter;
use crate::syntax::SourceUnit;

/// Summary of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub units: usize,
    pub seen: usize,
    pub kept: usize,
    pub target: OutputTarget,
}

/// Run the generate command
pub fn run_generate(cli: &Cli, mut config: DocConfig) -> Result<GenerateReport> {
    apply_overrides(&mut config, cli);

    let extraction = document_tree(&cli.source_root, &config, cli.print_ast)?;
    let content = output::render(&extraction.classes, cli.format)?;
    let target = OutputTarget::from_path(&config.output);
    output::emit(&target, &content)?;

    Ok(GenerateReport {
        units: extraction.units,
        seen: extraction.seen,
        kept: extraction.classes.len(),
        target,
    })
}

/// Command-line options win over the configuration file
fn apply_overrides(config: &mut DocConfig, cli: &Cli) {
    if !cli.interesting.is_empty() {
        config.interesting_base_types = cli.interesting.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
}

/// Parse, index and extract every `.java` file below `root`.
///
/// # Errors
///
/// - `SourceRootNotFound` if `root` is not a directory
/// - `IoError` / `ParseFailure` for the first file that cannot be read or parsed
/// - `Resolution` for the first unresolvable supertype or parameter type
pub fn document_tree(root: &Path, config: &DocConfig, print_ast: bool) -> Result<Extraction> {
    let files = fs_utils::collect_java_files(root)?;
    debug!(root = %root.display(), files = files.len(), "collected sources");

    // AST dumps go to stderr, keep them in file order
    let units: Vec<SourceUnit> = if print_ast {
        files
            .iter()
            .map(|path| parse_file(root, path, true))
            .collect::<Result<_>>()?
    } else {
        files
            .par_iter()
            .map(|path| parse_file(root, path, false))
            .collect::<Result<_>>()?
    };

    let index = SourceIndex::build(&units, &config.known_types);
    let filter = SelectionFilter::from_config(config);
    let extraction = extract_units(&units, &index, &filter)?;

    info!(
        units = extraction.units,
        seen = extraction.seen,
        kept = extraction.classes.len(),
        "extracted documentation"
    );
    Ok(extraction)
}

/// Render without writing; used when only the document text is needed
pub fn render_tree(root: &Path, config: &DocConfig, format: OutputFormat) -> Result<String> {
    let extraction = document_tree(root, config, false)?;
    output::render(&extraction.classes, format)
}

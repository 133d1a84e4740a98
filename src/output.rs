//! Serialized documentation output

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::error::{DocgenError, Result};
use crate::fs_utils;
use crate::schema::ClassDoc;

/// Where the document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` means stdout, anything else is a file path
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Stdout => "stdout".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Encode the kept classes as JSON
pub fn render(classes: &[ClassDoc], format: OutputFormat) -> Result<String> {
    let encoded = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(classes),
        OutputFormat::Compact => serde_json::to_string(classes),
    };
    encoded.map_err(|e| DocgenError::Serialization {
        message: e.to_string(),
    })
}

/// Write a rendered document to its target
pub fn emit(target: &OutputTarget, content: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
            Ok(())
        }
        OutputTarget::File(path) => fs_utils::write_atomic(path, content),
    }
}

//! Filesystem helpers
//!
//! - `collect_java_files`: deterministic discovery of `.java` sources
//! - `write_atomic`: write through a temporary sibling and rename into place
//! - `atomic_rename`: handles atomic file replacement (Windows requires explicit delete)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::error::{DocgenError, Result};

/// Find every `.java` file below `root`, sorted by path.
///
/// Hidden files and anything excluded by `.gitignore` / `.ignore` are
/// skipped. Symlinks are not followed.
pub fn collect_java_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(DocgenError::SourceRootNotFound {
            path: root.display().to_string(),
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder.hidden(true);
    builder.follow_links(false);
    // Respect .gitignore even outside a git checkout
    builder.require_git(false);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        let path = entry.path();
        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        if is_file && path.extension().is_some_and(|ext| ext == "java") {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Write `content` to `path` atomically, creating the parent directory.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DocgenError::IoError {
            path: parent.to_path_buf(),
            message: e.to_string(),
        })?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);
    fs::write(&temp_path, content).map_err(|e| DocgenError::IoError {
        path: temp_path.clone(),
        message: e.to_string(),
    })?;

    atomic_rename(&temp_path, path).map_err(|e| DocgenError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Cross-platform atomic rename that handles Windows file replacement.
///
/// On Unix, `fs::rename` atomically replaces the target if it exists.
/// On Windows, `fs::rename` fails if the target exists, so the target is
/// deleted first.
pub fn atomic_rename(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if dst.exists() {
            fs::remove_file(dst)?;
        }
    }
    fs::rename(src, dst)
}

use crate::parser::FileType;
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use log::warn;
use std::path::{Path, PathBuf};

/// Expand CLI paths into the files to check.
///
/// Files are kept as given, whatever their extension. Directories are walked
/// honouring `.gitignore`, keeping only Markdown and plain text files.
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(walk_dir(path)?);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            warn!("File not found: {}", path.display());
        }
    }

    Ok(files)
}

fn walk_dir(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkBuilder::new(root).hidden(true).git_ignore(true).build();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let path = entry.path();

        if path.is_file() && FileType::is_supported(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

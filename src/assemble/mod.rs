//! Output document assembly
//!
//! Orchestrates discovery and rendering, then writes the combined Markdown
//! document in one pass.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::domain::TargetFile;
use crate::render;
use crate::scan;

/// Discover target files under `root`, render each one, and write the
/// combined document to `output_path` (parent directories are created as
/// needed). Returns the resolved absolute output path.
///
/// Per-file render failures become a visible note inside that file's section;
/// only the final write is fatal.
pub fn generate_markdown(
    root: &Path,
    output_path: &Path,
    ignored_extensions: &HashSet<String>,
) -> Result<PathBuf> {
    let root = root
        .canonicalize()
        .with_context(|| format!("cannot access root directory {}", root.display()))?;
    anyhow::ensure!(root.is_dir(), "root path {} is not a directory", root.display());

    let files = scan::find_target_files(&root, ignored_extensions);
    info!(files = files.len(), root = %root.display(), "discovered target files");

    let title = root.file_name().and_then(|n| n.to_str()).unwrap_or("code");
    let mut document = format!("# {title}\n\n");
    for file in &files {
        document.push_str("## ./");
        document.push_str(&file.relative_path);
        document.push_str("\n\n");
        document.push_str(&section_body(file));
        document.push('\n');
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create output directory {}", parent.display()))?;
        }
    }
    fs::write(output_path, &document)
        .with_context(|| format!("cannot write output file {}", output_path.display()))?;

    output_path
        .canonicalize()
        .with_context(|| format!("cannot resolve output path {}", output_path.display()))
}

fn section_body(file: &TargetFile) -> String {
    match render::render(file) {
        Ok(body) => body,
        Err(err) => {
            warn!(path = %file.relative_path, %err, "could not render file");
            format!("> Skipped: {err}.\n")
        }
    }
}

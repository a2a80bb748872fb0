// ui5-nwabap-deployer/src/utils/files.rs
use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::classify::SourceFile;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Collects the files below `root` whose relative path matches `pattern`.
///
/// # Arguments
/// * `root` - The resource directory, usually the build output.
/// * `pattern` - A glob matched against `/`-separated paths relative to `root`.
///
/// # Returns
/// The matching files with their raw content, sorted by path.
pub fn collect_files(root: &Path, pattern: &str) -> Result<Vec<SourceFile>> {
    if !root.is_dir() {
        return Err(anyhow::anyhow!(
            "Resource path is not a directory: {}",
            root.display()
        ));
    }
    let matcher = Pattern::new(pattern)
        .with_context(|| format!("Invalid resource pattern: {}", pattern))?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).with_context(|| {
            format!(
                "Failed to strip prefix {} from {}",
                root.display(),
                entry.path().display()
            )
        })?;
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if !matcher.matches_with(&relative, MATCH_OPTIONS) {
            continue;
        }

        let content = fs::read(entry.path())
            .with_context(|| format!("Failed to read resource file: {}", entry.path().display()))?;
        files.push(SourceFile::new(relative, content));
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

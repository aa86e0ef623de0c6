//! Component discovery below `<project>/templates`.
//!
//! GitLab accepts two layouts for a component:
//!
//! - a lone file directly inside `templates/` (`templates/build.yml`)
//! - a directory bundle with a `template.yaml`/`template.yml` entry point
//!   (`templates/deploy/template.yml`), at any depth
//!
//! Anything else under `templates/` is ignored.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File names marking a directory bundle.
pub const BUNDLE_FILE_NAMES: &[&str] = &["template.yaml", "template.yml"];

/// Extensions accepted for lone component files.
const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// True when `path` is named like a bundle entry point (case-sensitive).
pub fn is_bundle_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| BUNDLE_FILE_NAMES.contains(&n))
}

/// Find every component spec below `templates_dir`.
///
/// The glob patterns encode the selection rule, so every regular file they
/// match is a component. Results are sorted component-wise and deduplicated,
/// which yields the same order as a lexical directory walk.
pub fn discover(templates_dir: &Path) -> Result<Vec<PathBuf>> {
    if !templates_dir.is_dir() {
        return Err(Error::TemplatesNotFound {
            path: templates_dir.to_path_buf(),
        });
    }

    let root = glob::Pattern::escape(&templates_dir.to_string_lossy());
    let mut patterns: Vec<String> = YAML_EXTENSIONS
        .iter()
        .map(|ext| format!("{}/*.{}", root, ext))
        .collect();
    patterns.extend(
        BUNDLE_FILE_NAMES
            .iter()
            .map(|name| format!("{}/**/{}", root, name)),
    );

    let mut files = Vec::new();
    for pattern in &patterns {
        let entries = glob::glob(pattern).map_err(|e| Error::Pattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        for entry in entries {
            let path = entry.map_err(walk_error)?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    // Sort for deterministic output
    files.sort();
    files.dedup();

    if files.is_empty() {
        warn!(path = %templates_dir.display(), "no components found");
    }
    for file in &files {
        debug!(path = %file.display(), "discovered component");
    }
    Ok(files)
}

/// An unreadable directory met during the walk.
fn walk_error(err: glob::GlobError) -> Error {
    let path = err.path().to_path_buf();
    Error::io(path, err.into_error())
}

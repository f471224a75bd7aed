//! Locating the workspace manifest by walking parent directories.

use std::fs;
use std::path::{Path, PathBuf};

/// Walk up from the project file looking for a `Cargo.toml` that declares a
/// `[workspace]` table.
///
/// A directory containing `.git` stops the search before that directory is
/// examined, so the walk never escapes the repository of a nested checkout.
/// Returns `None` for a missing project file or when nothing is found.
pub fn find_workspace_manifest(project_file: &Path) -> Option<PathBuf> {
    if !project_file.is_file() {
        return None;
    }

    let mut dir = project_file.parent()?;
    loop {
        if dir.join(".git").exists() {
            log::debug!("workspace search stopped at {}", dir.display());
            return None;
        }

        let candidate = dir.join("Cargo.toml");
        if candidate.is_file() {
            if let Ok(text) = fs::read_to_string(&candidate) {
                if text.contains("[workspace]") {
                    return Some(candidate);
                }
            }
        }

        dir = dir.parent()?;
    }
}

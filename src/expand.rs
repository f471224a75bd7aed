//! Expansion of glob-style inclusion patterns into concrete file lists.
//!
//! Patterns may contain `*`, `?`, and a recursive `**` segment. Separators
//! are normalized so `\` and `/` are both accepted; everything downstream
//! sees forward slashes. Missing search directories yield empty results, not
//! errors.

use crate::error::{Error, Result};
use globset::{Glob, GlobMatcher};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Expand every inclusion pattern against `base`, then union, deduplicate,
/// and sort the results. This is the path list the rest of the pipeline
/// operates on.
pub fn expand_patterns(patterns: &[String], base: &Path) -> Result<Vec<String>> {
    let mut matched = BTreeSet::new();
    for pattern in patterns {
        for path in expand_pattern(pattern, base)? {
            matched.insert(path);
        }
    }
    Ok(matched.into_iter().collect())
}

/// Expand a single inclusion pattern into the sorted list of base-relative
/// paths that exist on disk and match it.
pub fn expand_pattern(pattern: &str, base: &Path) -> Result<Vec<String>> {
    let pattern = normalize_separators(pattern);

    if !base.is_dir() {
        log::debug!("base directory {} does not exist", base.display());
        return Ok(Vec::new());
    }

    if !pattern.contains('*') && !pattern.contains('?') {
        // No wildcards: a plain existence probe.
        let exists = base.join(&pattern).is_file();
        return Ok(if exists { vec![pattern] } else { Vec::new() });
    }

    let segments: Vec<&str> = pattern.split('/').collect();
    let mut paths = if let Some(pos) = segments.iter().position(|s| *s == "**") {
        expand_recursive(&segments[..pos].join("/"), &segments[pos + 1..].join("/"), base)?
    } else {
        expand_single_directory(&pattern, base)?
    };
    paths.sort();
    Ok(paths)
}

/// `**` pattern: the prefix before the recursive segment names a concrete
/// search directory; the suffix is the search pattern (match everything when
/// empty), applied to each descendant's search-relative path.
fn expand_recursive(before: &str, after: &str, base: &Path) -> Result<Vec<String>> {
    let search_dir = if before.is_empty() {
        base.to_path_buf()
    } else {
        base.join(before)
    };
    if !search_dir.is_dir() {
        return Ok(Vec::new());
    }

    let suffix = if after.is_empty() { "*" } else { after };
    let matcher = compile(&format!("**/{suffix}"))?;

    let mut paths = Vec::new();
    for entry in WalkDir::new(&search_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = match entry.path().strip_prefix(&search_dir) {
            Ok(rel) => to_slash(rel),
            Err(_) => continue,
        };
        if matcher.is_match(&relative) {
            paths.push(if before.is_empty() {
                relative
            } else {
                format!("{before}/{relative}")
            });
        }
    }
    Ok(paths)
}

/// Wildcards confined to the final segment: match file names within exactly
/// the named subdirectory, non-recursively.
fn expand_single_directory(pattern: &str, base: &Path) -> Result<Vec<String>> {
    let (dir_part, file_part) = match pattern.rsplit_once('/') {
        Some((dir, file)) => (dir, file),
        None => ("", pattern),
    };
    let search_dir = if dir_part.is_empty() {
        base.to_path_buf()
    } else {
        base.join(dir_part)
    };
    if !search_dir.is_dir() {
        return Ok(Vec::new());
    }

    let matcher = compile(file_part)?;
    let mut paths = Vec::new();
    for entry in fs::read_dir(&search_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if matcher.is_match(&name) {
            paths.push(if dir_part.is_empty() {
                name
            } else {
                format!("{dir_part}/{name}")
            });
        }
    }
    Ok(paths)
}

fn compile(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|g| g.compile_matcher())
        .map_err(|source| Error::Glob {
            pattern: pattern.to_string(),
            source,
        })
}

/// Normalize to forward slashes and strip any trailing separator.
pub fn normalize_separators(pattern: &str) -> String {
    pattern.replace('\\', "/").trim_end_matches('/').to_string()
}

fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}

//! Detection of generated names colliding with the reserved default
//! properties.
//!
//! Only the first segment of each path matters: its extension-stripped,
//! sanitized identifier must not match one of the four reserved names. A
//! conflicting path is excluded from generation rather than renamed. Every
//! descendant of a conflicting top-level directory shares that first segment
//! and is therefore reported and excluded itself; no cascade is needed.

use crate::ident::{sanitize, split_stem_ext};

/// The four identifiers produced by the default-property injector, which
/// top-level generated names must not shadow. Matched case-insensitively.
pub const RESERVED_NAMES: [&str; 4] = [
    "ProjectDirectory",
    "ProjectFile",
    "SolutionDirectory",
    "SolutionFile",
];

/// One reserved-name collision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// The offending relative path.
    pub path: String,
    /// The identifier it would have generated.
    pub identifier: String,
    /// True when the reserved name collides with a directory (the path has
    /// more than one segment) rather than a bare top-level file.
    pub is_directory: bool,
}

/// Split a path list into the conflict-free remainder and the detected
/// conflicts, preserving input order.
pub fn resolve_conflicts(paths: &[String]) -> (Vec<String>, Vec<Conflict>) {
    let mut filtered = Vec::with_capacity(paths.len());
    let mut conflicts = Vec::new();

    for path in paths {
        let Some(first) = path.split('/').next().filter(|s| !s.is_empty()) else {
            continue;
        };
        let (stem, _) = split_stem_ext(first);
        let identifier = sanitize(stem);

        if RESERVED_NAMES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(&identifier))
        {
            conflicts.push(Conflict {
                path: path.clone(),
                identifier,
                is_directory: path.contains('/'),
            });
        } else {
            filtered.push(path.clone());
        }
    }

    (filtered, conflicts)
}

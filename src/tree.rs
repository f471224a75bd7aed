//! Construction of an ordered directory tree from a flat path list.
//!
//! One tree is built per generation pass and consumed read-only by both
//! emitters; children are kept in sorted maps so every walk is deterministic
//! regardless of input order.

use crate::cancel::CancelToken;
use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet};

/// One directory level.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirNode {
    /// Full relative path to this directory; a top-level directory's path
    /// equals its own name.
    pub path: String,
    /// 0 for top-level directories, incrementing per nesting level. Only
    /// used to disambiguate a name collision with the parent directory.
    pub depth: usize,
    /// Children keyed by their original, unsanitized name.
    pub dirs: BTreeMap<String, DirNode>,
    /// Full relative paths of files whose immediate parent is this directory.
    pub files: BTreeSet<String>,
}

/// The whole tree: top-level directories plus files sitting at the root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileTree {
    pub roots: BTreeMap<String, DirNode>,
    pub root_files: Vec<String>,
}

impl FileTree {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.root_files.is_empty()
    }
}

/// Build the tree from a sorted list of forward-slash relative paths.
///
/// A single-segment path is a root file. A multi-segment path walks or
/// creates one node per intermediate segment (map semantics: created on
/// first reference, reused after) and lands in the final directory's file
/// set. O(total path segments), no backtracking.
pub fn build_file_tree(paths: &[String], cancel: &CancelToken) -> Result<FileTree> {
    let mut tree = FileTree::default();

    for path in paths {
        cancel.checkpoint()?;

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.len() {
            0 => continue,
            1 => {
                tree.root_files.push(path.clone());
                continue;
            }
            _ => {}
        }

        let top = segments[0];
        let mut current = tree.roots.entry(top.to_string()).or_insert_with(|| DirNode {
            path: top.to_string(),
            depth: 0,
            ..DirNode::default()
        });

        let mut current_path = top.to_string();
        for (i, segment) in segments[1..segments.len() - 1].iter().enumerate() {
            cancel.checkpoint()?;
            current_path = format!("{current_path}/{segment}");
            let child_path = current_path.clone();
            current = current
                .dirs
                .entry((*segment).to_string())
                .or_insert_with(|| DirNode {
                    path: child_path,
                    depth: i + 1,
                    ..DirNode::default()
                });
        }

        current.files.insert(path.clone());
    }

    Ok(tree)
}

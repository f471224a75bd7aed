//! Path-segment emitter: renders the tree as a flat set of composable
//! `PathNode` fragments.
//!
//! Every distinct directory name anywhere in the tree becomes one fragment,
//! deduplicated globally by original name. Every distinct file stem becomes
//! a group module holding one fragment per extension observed for that stem;
//! files without an extension are skipped, since their fragment would be
//! indistinguishable from the group itself.

use crate::cancel::CancelToken;
use crate::error::Result;
use crate::ident::{sanitize, split_stem_ext};
use crate::scopes::{escape, line};
use crate::templates::PATH_NODE_BODY;
use crate::tree::{DirNode, FileTree};
use std::collections::{BTreeMap, BTreeSet};

/// Render the path-segment artifact.
pub fn emit_segments(tree: &FileTree, cancel: &CancelToken) -> Result<String> {
    let (dirs, stems) = collect(tree, cancel)?;

    let mut out = String::new();
    out.push_str("// @generated by deploygen. Do not edit by hand.\n\n");
    out.push_str("#[allow(nonstandard_style)]\n");
    out.push_str("pub mod project_paths {\n");
    out.push_str(PATH_NODE_BODY);

    for dir in &dirs {
        cancel.checkpoint()?;
        out.push('\n');
        line(&mut out, 1, &format!("/// Fragment for the `{dir}` directory."));
        line(
            &mut out,
            1,
            &format!(
                "pub const {}: PathNode = PathNode::lit(\"{}\");",
                sanitize(dir),
                escape(dir)
            ),
        );
    }

    for (stem, extensions) in &stems {
        cancel.checkpoint()?;
        out.push('\n');
        line(
            &mut out,
            1,
            &format!("/// Fragments for `{stem}` files, one per extension."),
        );
        line(&mut out, 1, &format!("pub mod {} {{", sanitize(stem)));
        line(&mut out, 2, "use super::PathNode;");
        for ext in extensions {
            out.push('\n');
            line(
                &mut out,
                2,
                &format!(
                    "pub const {}: PathNode = PathNode::lit(\"{}\");",
                    sanitize(ext),
                    escape(&format!("{stem}.{ext}"))
                ),
            );
        }
        line(&mut out, 1, "}");
    }

    out.push_str("}\n");
    Ok(out)
}

type StemGroups = BTreeMap<String, BTreeSet<String>>;

/// Gather every directory name and every (stem, extension) pair in the
/// tree. Dedup keys are the original names, not the sanitized identifiers.
fn collect(tree: &FileTree, cancel: &CancelToken) -> Result<(BTreeSet<String>, StemGroups)> {
    let mut dirs = BTreeSet::new();
    let mut stems = StemGroups::new();

    for path in &tree.root_files {
        record_file(path, &mut stems);
    }
    for (name, node) in &tree.roots {
        collect_node(name, node, &mut dirs, &mut stems, cancel)?;
    }

    Ok((dirs, stems))
}

fn collect_node(
    name: &str,
    node: &DirNode,
    dirs: &mut BTreeSet<String>,
    stems: &mut StemGroups,
    cancel: &CancelToken,
) -> Result<()> {
    cancel.checkpoint()?;
    dirs.insert(name.to_string());

    for path in &node.files {
        record_file(path, stems);
    }
    for (child_name, child) in &node.dirs {
        collect_node(child_name, child, dirs, stems, cancel)?;
    }

    Ok(())
}

fn record_file(path: &str, stems: &mut StemGroups) {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let (stem, extension) = split_stem_ext(file_name);
    if let Some(ext) = extension {
        stems
            .entry(stem.to_string())
            .or_default()
            .insert(ext.to_string());
    }
}

//! Nested-scope emitter: renders the tree as nested container types with
//! leaf `ProjectFile` constants, prefixed by the default-property accessors.
//!
//! Output layout, in order: support-type bodies, the `ProjectFiles` entry
//! struct (default properties, then root files, then top-level directory
//! accessors), then a `scopes` module holding one container type per
//! directory. All sibling iteration runs over sorted structures so
//! regeneration is byte-identical.

use crate::cancel::CancelToken;
use crate::error::Result;
use crate::ident::{file_ident, sanitize};
use crate::templates::{PROJECT_DIR_BODY, PROJECT_FILE_BODY};
use crate::tree::{DirNode, FileTree};

/// Fixed top-level entries for the project and solution, rendered before any
/// tree output. Paths are absolute and forward-slashed; directories carry a
/// trailing slash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultProperties {
    pub project: Option<DefaultEntry>,
    pub solution: Option<DefaultEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultEntry {
    pub directory: String,
    pub file: String,
}

impl DefaultProperties {
    pub fn is_empty(&self) -> bool {
        self.project.is_none() && self.solution.is_none()
    }
}

/// Render the nested-scope artifact.
pub fn emit_scopes(
    tree: &FileTree,
    defaults: &DefaultProperties,
    cancel: &CancelToken,
) -> Result<String> {
    let mut out = String::new();
    out.push_str("// @generated by deploygen. Do not edit by hand.\n\n");
    out.push_str("#[allow(nonstandard_style)]\n");
    out.push_str("pub mod project_files {\n");
    out.push_str(PROJECT_FILE_BODY);
    out.push('\n');
    out.push_str(PROJECT_DIR_BODY);
    out.push('\n');

    line(
        &mut out,
        1,
        "/// Strongly-typed accessors for files named in the deploy manifest.",
    );
    line(&mut out, 1, "pub struct ProjectFiles;");

    let has_members = !defaults.is_empty() || !tree.is_empty();
    if has_members {
        out.push('\n');
        line(&mut out, 1, "impl ProjectFiles {");
        emit_entry_members(&mut out, tree, defaults, cancel)?;
        line(&mut out, 1, "}");
    }

    if !tree.roots.is_empty() {
        out.push('\n');
        line(&mut out, 1, "/// One container type per generated directory scope.");
        line(&mut out, 1, "pub mod scopes {");
        let mut first = true;
        for (name, node) in &tree.roots {
            cancel.checkpoint()?;
            if !first {
                out.push('\n');
            }
            first = false;
            emit_scope(&mut out, name, node, None, 1, 2, cancel)?;
        }
        line(&mut out, 1, "}");
    }

    out.push_str("}\n");
    Ok(out)
}

fn emit_entry_members(
    out: &mut String,
    tree: &FileTree,
    defaults: &DefaultProperties,
    cancel: &CancelToken,
) -> Result<()> {
    if let Some(project) = &defaults.project {
        emit_default_entry(out, "Project", project);
    }
    if let Some(solution) = &defaults.solution {
        emit_default_entry(out, "Solution", solution);
    }

    if !defaults.is_empty() && !tree.is_empty() {
        out.push('\n');
    }

    for path in &tree.root_files {
        cancel.checkpoint()?;
        line(
            out,
            2,
            &format!(
                "pub const {}: ProjectFile = ProjectFile::new(\"{}\");",
                file_ident(path),
                escape(path)
            ),
        );
    }

    if !tree.root_files.is_empty() && !tree.roots.is_empty() {
        out.push('\n');
    }

    for name in tree.roots.keys() {
        cancel.checkpoint()?;
        let ident = sanitize(name);
        line(
            out,
            2,
            &format!("pub const {ident}: scopes::{ident}Type = scopes::{ident}Type;"),
        );
    }

    Ok(())
}

fn emit_default_entry(out: &mut String, prefix: &str, entry: &DefaultEntry) {
    line(
        out,
        2,
        &format!(
            "pub const {prefix}Directory: ProjectDir = ProjectDir::new(\"{}\");",
            escape(&entry.directory)
        ),
    );
    line(
        out,
        2,
        &format!(
            "pub const {prefix}File: ProjectFile = ProjectFile::new(\"{}\");",
            escape(&entry.file)
        ),
    );
}

/// Emit the container type for one directory, then a child module holding
/// its subdirectory containers.
///
/// A subdirectory whose sanitized name matches its parent's (case
/// insensitively) gets a container type suffixed with its depth; the
/// accessor constant keeps the plain name.
fn emit_scope(
    out: &mut String,
    name: &str,
    node: &DirNode,
    parent_ident: Option<&str>,
    supers: usize,
    indent: usize,
    cancel: &CancelToken,
) -> Result<()> {
    cancel.checkpoint()?;

    let ident = sanitize(name);
    let type_name = scope_type_name(&ident, node.depth, parent_ident);
    let up = "super::".repeat(supers);

    line(out, indent, &format!("pub struct {type_name};"));
    out.push('\n');
    line(out, indent, &format!("impl {type_name} {{"));
    line(
        out,
        indent + 1,
        &format!(
            "pub const DIR: {up}ProjectDir = {up}ProjectDir::new(\"{}\");",
            escape(&node.path)
        ),
    );

    if !node.dirs.is_empty() {
        out.push('\n');
        for (child_name, child) in &node.dirs {
            cancel.checkpoint()?;
            let child_ident = sanitize(child_name);
            let child_type = scope_type_name(&child_ident, child.depth, Some(&ident));
            line(
                out,
                indent + 1,
                &format!("pub const {child_ident}: {ident}::{child_type} = {ident}::{child_type};"),
            );
        }
    }

    if !node.files.is_empty() {
        out.push('\n');
        for path in &node.files {
            cancel.checkpoint()?;
            line(
                out,
                indent + 1,
                &format!(
                    "pub const {}: {up}ProjectFile = {up}ProjectFile::new(\"{}\");",
                    file_ident(path),
                    escape(path)
                ),
            );
        }
    }

    line(out, indent, "}");

    if !node.dirs.is_empty() {
        out.push('\n');
        line(out, indent, &format!("pub mod {ident} {{"));
        let mut first = true;
        for (child_name, child) in &node.dirs {
            if !first {
                out.push('\n');
            }
            first = false;
            emit_scope(
                out,
                child_name,
                child,
                Some(&ident),
                supers + 1,
                indent + 1,
                cancel,
            )?;
        }
        line(out, indent, "}");
    }

    Ok(())
}

/// Container type name for a directory scope, depth-suffixed when it would
/// shadow its declaring scope's name.
fn scope_type_name(ident: &str, depth: usize, parent_ident: Option<&str>) -> String {
    match parent_ident {
        Some(parent) if ident.eq_ignore_ascii_case(parent) => {
            format!("{ident}_Level{depth}Type")
        }
        _ => format!("{ident}Type"),
    }
}

pub(crate) fn line(out: &mut String, indent: usize, text: &str) {
    for _ in 0..indent {
        out.push_str("    ");
    }
    out.push_str(text);
    out.push('\n');
}

pub(crate) fn escape(path: &str) -> String {
    path.replace('\\', "\\\\").replace('"', "\\\"")
}

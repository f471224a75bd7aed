//! Pipeline orchestration: one immutable path list in, one set of rendered
//! artifacts out. Stateless per pass; independent passes may run
//! concurrently since nothing here is shared.

use crate::cancel::CancelToken;
use crate::conflict::resolve_conflicts;
use crate::diagnostics::{edition_too_old, reserved_name_conflict, Diagnostic};
use crate::error::Result;
use crate::expand::expand_patterns;
use crate::manifest::parse_manifest;
use crate::scopes::{emit_scopes, DefaultEntry, DefaultProperties};
use crate::segments::emit_segments;
use crate::solution::find_workspace_manifest;
use crate::templates::PRELUDE_LINE;
use crate::tree::build_file_tree;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Rust edition the generated code targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Edition {
    E2015,
    E2018,
    E2021,
    E2024,
}

impl Edition {
    /// Oldest edition the generated accessors compile under.
    pub const MINIMUM: Edition = Edition::E2021;

    pub fn year(self) -> u16 {
        match self {
            Edition::E2015 => 2015,
            Edition::E2018 => 2018,
            Edition::E2021 => 2021,
            Edition::E2024 => 2024,
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

impl FromStr for Edition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2015" => Ok(Edition::E2015),
            "2018" => Ok(Edition::E2018),
            "2021" => Ok(Edition::E2021),
            "2024" => Ok(Edition::E2024),
            other => Err(format!("unknown edition '{other}'")),
        }
    }
}

/// Externally supplied host configuration, immutable for the whole pass.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub project_file: Option<PathBuf>,
    pub solution_file: Option<PathBuf>,
    pub emit_prelude: bool,
    pub edition: Edition,
}

impl Default for ProjectContext {
    fn default() -> Self {
        Self {
            project_file: None,
            solution_file: None,
            emit_prelude: false,
            edition: Edition::MINIMUM,
        }
    }
}

/// The rendered artifacts of a successful pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    pub scopes: String,
    pub segments: String,
    pub prelude: Option<String>,
}

/// Outcome of a pass: artifacts (absent after a configuration-fatal
/// diagnostic) plus all diagnostics raised along the way.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub output: Option<GeneratedOutput>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the full pipeline over an already-expanded path list.
pub fn generate(
    paths: &[String],
    context: &ProjectContext,
    cancel: &CancelToken,
) -> Result<GenerateResult> {
    if context.edition < Edition::MINIMUM {
        log::warn!(
            "edition {} is below the supported minimum; no source generated",
            context.edition
        );
        return Ok(GenerateResult {
            output: None,
            diagnostics: vec![edition_too_old(context.edition)],
        });
    }

    let (filtered, conflicts) = resolve_conflicts(paths);
    let diagnostics: Vec<Diagnostic> = conflicts.iter().map(reserved_name_conflict).collect();
    if !conflicts.is_empty() {
        log::warn!("{} path(s) excluded by reserved-name conflicts", conflicts.len());
    }

    let tree = build_file_tree(&filtered, cancel)?;
    let defaults = default_properties(context);

    let scopes = emit_scopes(&tree, &defaults, cancel)?;
    let segments = emit_segments(&tree, cancel)?;
    let prelude = context.emit_prelude.then(|| PRELUDE_LINE.to_string());

    log::info!(
        "generated accessors for {} path(s) ({} root file(s), {} top-level scope(s))",
        filtered.len(),
        tree.root_files.len(),
        tree.roots.len()
    );

    Ok(GenerateResult {
        output: Some(GeneratedOutput {
            scopes,
            segments,
            prelude,
        }),
        diagnostics,
    })
}

/// Convenience entry: parse the manifest, expand its patterns against
/// `base`, and run [`generate`].
pub fn generate_from_manifest(
    xml: &str,
    base: &Path,
    context: &ProjectContext,
    cancel: &CancelToken,
) -> Result<GenerateResult> {
    let patterns = parse_manifest(xml)?;
    let paths = expand_patterns(&patterns, base)?;
    generate(&paths, context, cancel)
}

/// Fixed top-level entries for the project and solution. When no solution
/// file was supplied but a project file was, the workspace finder fills the
/// gap. Independent of the conflict resolver: the four reserved names exist
/// because of what this injects.
fn default_properties(context: &ProjectContext) -> DefaultProperties {
    let project = context.project_file.as_deref().map(default_entry);

    let solution_file = context.solution_file.clone().or_else(|| {
        context
            .project_file
            .as_deref()
            .and_then(find_workspace_manifest)
    });
    let solution = solution_file.as_deref().map(default_entry);

    DefaultProperties { project, solution }
}

fn default_entry(file: &Path) -> DefaultEntry {
    let file_str = path_to_slash(file);
    let directory = match file_str.rfind('/') {
        Some(idx) => file_str[..=idx].to_string(),
        None => String::new(),
    };
    DefaultEntry {
        directory,
        file: file_str,
    }
}

fn path_to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

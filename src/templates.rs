//! Fixed support-type bodies spliced into the generated artifacts.
//!
//! The bodies live as real source files under `templates/`, indented one
//! level to sit inside the generated top module. `include_str!` splices
//! the exact bytes into the emitters; the test module compiles the same
//! files directly, so the types behave as the generated code will.

/// `ProjectFile` accessor type, emitted into the nested-scope artifact.
pub const PROJECT_FILE_BODY: &str = include_str!("templates/project_file.rs");

/// `ProjectDir` accessor type, emitted into the nested-scope artifact.
pub const PROJECT_DIR_BODY: &str = include_str!("templates/project_dir.rs");

/// `PathNode` fragment type, emitted into the path-segment artifact. Empty
/// is the identity of `/` on either side; joining two non-empty fragments
/// inserts exactly one separator.
pub const PATH_NODE_BODY: &str = include_str!("templates/path_node.rs");

/// Single-line prelude artifact importing the generated namespace.
pub const PRELUDE_LINE: &str = "pub use self::project_files::*;\n";

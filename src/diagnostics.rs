//! Diagnostics attached to a generation pass.

use crate::conflict::Conflict;
use crate::generator::Edition;

/// Reserved name collided with a top-level file.
pub const RESERVED_FILE_CONFLICT: &str = "DEPLOY001";
/// Reserved name collided with a top-level directory.
pub const RESERVED_DIRECTORY_CONFLICT: &str = "DEPLOY002";
/// The requested edition is below the minimum the generated code needs.
pub const EDITION_TOO_OLD: &str = "DEPLOY003";

/// `Warning` diagnostics report degraded output (excluded paths); `Error`
/// diagnostics mean no output was produced and the run should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// An informational artifact of the pass; never retried, never interactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.code, self.message)
    }
}

/// One diagnostic per reserved-name collision, identifying the offending
/// path and the colliding identifier. A warning: the offender is excluded
/// and generation continues.
pub fn reserved_name_conflict(conflict: &Conflict) -> Diagnostic {
    if conflict.is_directory {
        Diagnostic {
            code: RESERVED_DIRECTORY_CONFLICT,
            severity: Severity::Warning,
            message: format!(
                "directory '{}' would generate accessor '{}', which is reserved; \
                 rename the directory or remove its files from the deploy manifest",
                conflict.path, conflict.identifier
            ),
        }
    } else {
        Diagnostic {
            code: RESERVED_FILE_CONFLICT,
            severity: Severity::Warning,
            message: format!(
                "file '{}' would generate accessor '{}', which is reserved; \
                 rename the file or remove it from the deploy manifest",
                conflict.path, conflict.identifier
            ),
        }
    }
}

/// Fatal configuration diagnostic: below this edition no source is emitted.
pub fn edition_too_old(found: Edition) -> Diagnostic {
    Diagnostic {
        code: EDITION_TOO_OLD,
        severity: Severity::Error,
        message: format!(
            "generated accessors require edition {} or newer (requested: {})",
            Edition::MINIMUM,
            found
        ),
    }
}

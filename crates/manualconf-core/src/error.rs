//! Resolution error types.
//!
//! Absence is not an error: a source with nothing to contribute returns
//! `Ok(None)` from `try_resolve`. Everything in this enum is a hard
//! failure that aborts the documentation build.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a build-time value.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The version helper executable could not be located.
    #[error("Version helper {0} not found")]
    HelperNotFound(PathBuf),

    /// The version helper ran but exited unsuccessfully.
    #[error("Version helper {path} failed ({status}): {stderr}")]
    HelperFailed {
        path: PathBuf,
        status: String,
        stderr: String,
    },

    /// The version helper wrote bytes that are not valid UTF-8.
    #[error("Version helper {0} wrote non-UTF-8 output")]
    HelperOutputNotUtf8(PathBuf),

    /// The version helper exited successfully but wrote nothing usable.
    #[error("Version helper {0} produced no output")]
    HelperEmptyOutput(PathBuf),

    /// The build-description file could not be read at all.
    #[error("Cannot read build description {path}: {reason}")]
    BuildFileUnreadable { path: PathBuf, reason: String },

    /// The build-description file was read but contains no version declaration.
    #[error("No version declaration found in {0}")]
    NoVersionDeclaration(PathBuf),

    /// The bundled theme's resources are missing from the theme root.
    #[error("Bundled theme '{name}' missing at {path}")]
    BundledThemeMissing { name: String, path: PathBuf },

    /// Every configured source declared absence.
    #[error("No {what} candidate produced a value")]
    Exhausted { what: &'static str },
}

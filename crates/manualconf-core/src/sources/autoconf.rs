//! Build-description file parsing.

use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ResolveError;
use crate::resolver::{CandidateSource, Resolution, ValueOrigin};

/// Matches an autoconf `AC_INIT(name, version, ...)` declaration and
/// captures the version field. Optional m4 `[...]` quoting is tolerated
/// around either field.
static AC_INIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*AC_INIT\(\s*\[?[^,\]]*\]?\s*,\s*\[?([^,)\]]*)\]?")
        .expect("AC_INIT pattern is valid")
});

/// Extracts the version literal embedded in a build-description file.
///
/// Scans the file line by line and returns the version field of the
/// first matching declaration. This source is the version chain's last
/// resort, so an unreadable file and a file with no matching declaration
/// are both hard failures, kept as distinct error variants so the build
/// log distinguishes a wrong path from a stale file.
pub struct BuildFileSource {
    path: PathBuf,
}

impl BuildFileSource {
    /// Create a source over the given build-description file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn extract(&self, content: &str) -> Option<String> {
        content
            .lines()
            .find_map(|line| AC_INIT_RE.captures(line))
            .map(|caps| caps[1].trim().to_string())
    }
}

impl CandidateSource for BuildFileSource {
    fn describe(&self) -> &'static str {
        "build_file"
    }

    fn try_resolve(&self) -> Result<Option<Resolution>, ResolveError> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| ResolveError::BuildFileUnreadable {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        match self.extract(&content) {
            Some(version) => Ok(Some(Resolution::new(version, ValueOrigin::BuildFile))),
            None => Err(ResolveError::NoVersionDeclaration(self.path.clone())),
        }
    }
}

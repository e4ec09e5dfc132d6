//! External helper script source.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ResolveError;
use crate::resolver::{CandidateSource, Resolution, ValueOrigin};

/// Invokes an external helper that independently computes a version
/// string (typically from repository metadata).
///
/// The helper is run with no arguments and blocks the calling thread
/// until it exits. Its stdout is captured as text and trailing
/// whitespace is trimmed. Reaching this source already implies no
/// earlier source succeeded, so every problem here is a hard failure:
/// missing executable, non-zero exit, non-UTF-8 output, empty output.
pub struct HelperScriptSource {
    program: PathBuf,
}

impl HelperScriptSource {
    /// Create a source for the given helper, either a bare program name
    /// resolved on `PATH` or an explicit path.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn locate(&self) -> Result<PathBuf, ResolveError> {
        which::which(&self.program)
            .map_err(|_| ResolveError::HelperNotFound(self.program.clone()))
    }

    fn run(&self, program: &Path) -> Result<String, ResolveError> {
        let output = Command::new(program).output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ResolveError::HelperNotFound(self.program.clone())
            } else {
                ResolveError::HelperFailed {
                    path: self.program.clone(),
                    status: e.kind().to_string(),
                    stderr: e.to_string(),
                }
            }
        })?;

        if !output.status.success() {
            return Err(ResolveError::HelperFailed {
                path: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| ResolveError::HelperOutputNotUtf8(self.program.clone()))?;
        let version = stdout.trim_end();
        if version.is_empty() {
            return Err(ResolveError::HelperEmptyOutput(self.program.clone()));
        }
        Ok(version.to_string())
    }
}

impl CandidateSource for HelperScriptSource {
    fn describe(&self) -> &'static str {
        "helper_script"
    }

    fn try_resolve(&self) -> Result<Option<Resolution>, ResolveError> {
        let program = self.locate()?;
        let version = self.run(&program)?;
        Ok(Some(Resolution::new(version, ValueOrigin::HelperScript)))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn write_helper(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn stdout_is_captured_and_trimmed() {
        let dir = TempDir::new().unwrap();
        let helper = write_helper(&dir, "version.sh", "printf '4.2.3\\n'");
        let resolved = HelperScriptSource::new(helper)
            .try_resolve()
            .unwrap()
            .unwrap();
        assert_eq!(resolved.value, "4.2.3");
        assert_eq!(resolved.origin, ValueOrigin::HelperScript);
    }

    #[test]
    fn leading_whitespace_survives_trailing_does_not() {
        let dir = TempDir::new().unwrap();
        let helper = write_helper(&dir, "version.sh", "printf '  4.2.3  \\n\\n'");
        let resolved = HelperScriptSource::new(helper)
            .try_resolve()
            .unwrap()
            .unwrap();
        assert_eq!(resolved.value, "  4.2.3");
    }

    #[test]
    fn missing_helper_is_a_hard_failure() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-helper.sh");
        let err = HelperScriptSource::new(missing).try_resolve().unwrap_err();
        assert!(matches!(err, ResolveError::HelperNotFound(_)));
    }

    #[test]
    fn non_zero_exit_is_a_hard_failure() {
        let dir = TempDir::new().unwrap();
        let helper = write_helper(&dir, "version.sh", "echo 'boom' >&2; exit 3");
        let err = HelperScriptSource::new(helper).try_resolve().unwrap_err();
        match err {
            ResolveError::HelperFailed { stderr, .. } => assert_eq!(stderr, "boom"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_output_is_a_hard_failure() {
        let dir = TempDir::new().unwrap();
        let helper = write_helper(&dir, "version.sh", "printf '\\n'");
        let err = HelperScriptSource::new(helper).try_resolve().unwrap_err();
        assert!(matches!(err, ResolveError::HelperEmptyOutput(_)));
    }
}

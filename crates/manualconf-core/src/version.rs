//! Release version resolution chain.

use std::path::PathBuf;

use crate::error::ResolveError;
use crate::resolver::{Resolution, Resolver};
use crate::sources::{BuildFileSource, HelperScriptSource, PlaceholderSource};

/// Literal token a preprocessor replaces with the release version.
pub const VERSION_PLACEHOLDER: &str = "@DOC_VERSION@";

/// Deployment-mode switch for the version chain's second tier.
///
/// Exactly one probe is active per deployment: builds driven by a
/// preprocessing build system ship a helper script, plain autoconf trees
/// parse the build-description file. This is decided at construction,
/// never a runtime fallback between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionProbe {
    /// Invoke an external helper and capture its stdout.
    HelperScript(PathBuf),
    /// Extract the version literal from a build-description file.
    BuildFile(PathBuf),
}

/// Resolve the release version string.
///
/// Priority: substituted placeholder first, then the configured probe.
pub fn resolve_version(
    version_text: &str,
    probe: &VersionProbe,
) -> Result<Resolution, ResolveError> {
    let resolver = Resolver::new("version")
        .with_source(PlaceholderSource::new(version_text, VERSION_PLACEHOLDER));
    match probe {
        VersionProbe::HelperScript(program) => resolver
            .with_source(HelperScriptSource::new(program.clone()))
            .resolve(),
        VersionProbe::BuildFile(path) => resolver
            .with_source(BuildFileSource::new(path.clone()))
            .resolve(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ValueOrigin;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn substituted_placeholder_skips_the_probe() {
        // The probe points nowhere; it must never be consulted.
        let probe = VersionProbe::BuildFile(PathBuf::from("/nonexistent/configure.ac"));
        let resolved = resolve_version("4.2.3", &probe).unwrap();
        assert_eq!(resolved.value, "4.2.3");
        assert_eq!(resolved.origin, ValueOrigin::Placeholder);
    }

    #[test]
    fn build_file_probe_extracts_the_declaration() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("configure.ac");
        fs::write(&path, "AC_INIT(appname, 4.2.3, bugs@example.com)\n").unwrap();

        let probe = VersionProbe::BuildFile(path);
        let resolved = resolve_version(VERSION_PLACEHOLDER, &probe).unwrap();
        assert_eq!(resolved.value, "4.2.3");
        assert_eq!(resolved.origin, ValueOrigin::BuildFile);
    }

    #[test]
    fn probe_failure_aborts_resolution() {
        let dir = TempDir::new().unwrap();
        let probe = VersionProbe::BuildFile(dir.path().join("configure.ac"));
        let err = resolve_version(VERSION_PLACEHOLDER, &probe).unwrap_err();
        assert!(matches!(err, ResolveError::BuildFileUnreadable { .. }));
    }
}

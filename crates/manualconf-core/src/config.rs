//! Resolved documentation configuration handed to the renderer.
//!
//! This struct is the system's only externally visible contract: the
//! renderer consumes it as simple named configuration fields, either via
//! the `Display` dump (`key = value` lines) or serialized as JSON.

use std::path::PathBuf;

use serde::Serialize;

use crate::env::EnvProvider;
use crate::error::ResolveError;
use crate::resolver::ValueOrigin;
use crate::theme::{PresentationConfig, resolve_theme};
use crate::version::{VersionProbe, resolve_version};

/// Inputs for one build invocation.
pub struct BuildContext<'a> {
    /// Possibly-substituted version placeholder text.
    pub version_text: &'a str,
    /// Possibly-substituted theme placeholder text.
    pub theme_text: &'a str,
    /// Second-tier version source for this deployment mode.
    pub version_probe: VersionProbe,
    /// Directory holding bundled theme resources.
    pub theme_root: PathBuf,
    /// Environment access, injected for testability.
    pub env: &'a dyn EnvProvider,
}

/// All resolved build-time values captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocConfig {
    /// Full release string, e.g. `4.2.3`.
    pub release: String,
    /// Short version, the first two components of the release, e.g. `4.2`.
    pub version: String,
    /// How the release string was resolved.
    pub version_origin: ValueOrigin,
    /// HTML theme identifier.
    pub html_theme: String,
    /// How the theme was resolved.
    pub theme_origin: ValueOrigin,
    /// Presentation options; present only when the bundled default won.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_theme_options: Option<PresentationConfig>,
}

impl DocConfig {
    /// Resolve both build-time values for one invocation.
    pub fn resolve(ctx: &BuildContext<'_>) -> Result<Self, ResolveError> {
        let version = resolve_version(ctx.version_text, &ctx.version_probe)?;
        let theme = resolve_theme(ctx.theme_text, ctx.env, &ctx.theme_root)?;

        Ok(Self {
            version: short_version(&version.value),
            release: version.value,
            version_origin: version.origin,
            html_theme: theme.value,
            theme_origin: theme.origin,
            html_theme_options: theme.presentation,
        })
    }
}

impl std::fmt::Display for DocConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "release = {}", self.release)?;
        writeln!(f, "version = {}", self.version)?;
        writeln!(f, "version_origin = {}", self.version_origin)?;
        writeln!(f, "html_theme = {}", self.html_theme)?;
        write!(f, "theme_origin = {}", self.theme_origin)?;
        if let Some(options) = &self.html_theme_options {
            writeln!(f)?;
            writeln!(f, "static_assets = {}", options.static_assets.join(", "))?;
            writeln!(f, "show_header = {}", options.show_header)?;
            writeln!(f, "link_color = {}", options.link_color)?;
            write!(f, "visited_link_color = {}", options.visited_link_color)?;
        }
        Ok(())
    }
}

/// Derive the short version from a full release string.
///
/// Takes the first two dot-separated components (`4.2.3` becomes `4.2`);
/// a release with fewer components is returned unchanged.
fn short_version(release: &str) -> String {
    let mut parts = release.splitn(3, '.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => format!("{major}.{minor}"),
        _ => release.to_string(),
    }
}

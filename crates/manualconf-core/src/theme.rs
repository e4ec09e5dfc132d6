//! Theme resolution chain and the bundled theme's presentation options.

use std::path::Path;

use serde::Serialize;

use crate::env::EnvProvider;
use crate::error::ResolveError;
use crate::resolver::{Resolution, Resolver};
use crate::sources::{BundledThemeSource, EnvironmentSource, PlaceholderSource};

/// Literal token a preprocessor replaces with the theme name.
pub const THEME_PLACEHOLDER: &str = "@DOC_THEME@";

/// Environment variable consulted when no placeholder was substituted.
pub const THEME_ENV_VAR: &str = "DOC_HTML_THEME";

/// Reserved sentinel meaning "variable deliberately disabled".
pub const THEME_DISABLED_SENTINEL: &str = "none";

/// Identifier of the bundled default theme.
pub const DEFAULT_THEME: &str = "classic";

/// Presentation options emitted alongside the bundled default theme.
///
/// External themes carry their own styling; only the bundled theme needs
/// these inline parameters, so the bundle exists exactly when the
/// bundled default won the resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationConfig {
    /// Stylesheet files shipped with the bundled theme.
    pub static_assets: Vec<String>,
    /// Whether the page header bar is shown.
    pub show_header: bool,
    /// Hyperlink color.
    pub link_color: String,
    /// Visited hyperlink color.
    pub visited_link_color: String,
}

impl PresentationConfig {
    /// The fixed options for the bundled default theme.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            static_assets: vec![format!("{DEFAULT_THEME}.css")],
            show_header: false,
            link_color: "#0000ee".to_string(),
            visited_link_color: "#551a8b".to_string(),
        }
    }
}

/// Resolve the HTML theme.
///
/// Priority: substituted placeholder, then the `DOC_HTML_THEME` variable
/// (unset, empty, and `none` all mean absent), then the bundled default,
/// which must be present under `theme_root` or resolution fails.
pub fn resolve_theme(
    theme_text: &str,
    env: &dyn EnvProvider,
    theme_root: &Path,
) -> Result<Resolution, ResolveError> {
    Resolver::new("theme")
        .with_source(PlaceholderSource::new(theme_text, THEME_PLACEHOLDER))
        .with_source(EnvironmentSource::new(
            env,
            THEME_ENV_VAR,
            THEME_DISABLED_SENTINEL,
        ))
        .with_source(BundledThemeSource::new(theme_root))
        .resolve()
}

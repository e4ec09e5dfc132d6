//! Bundled default theme source.

use std::path::PathBuf;

use crate::error::ResolveError;
use crate::resolver::{CandidateSource, Resolution, ValueOrigin};
use crate::theme::{DEFAULT_THEME, PresentationConfig};

/// Must-succeed terminator of the theme chain.
///
/// Selects the bundled default theme after verifying its resources are
/// actually present under the theme root; the manual cannot render
/// without a theme, so a missing bundle aborts the build. This is the
/// only source that emits a side-configuration bundle: the bundled theme
/// needs inline visual parameters, external themes are assumed
/// self-configuring.
pub struct BundledThemeSource {
    theme_root: PathBuf,
}

impl BundledThemeSource {
    /// Create a source looking for the bundled theme under `theme_root`.
    #[must_use]
    pub fn new(theme_root: impl Into<PathBuf>) -> Self {
        Self {
            theme_root: theme_root.into(),
        }
    }
}

impl CandidateSource for BundledThemeSource {
    fn describe(&self) -> &'static str {
        "bundled_default"
    }

    fn try_resolve(&self) -> Result<Option<Resolution>, ResolveError> {
        let theme_dir = self.theme_root.join(DEFAULT_THEME);
        if !theme_dir.is_dir() {
            return Err(ResolveError::BundledThemeMissing {
                name: DEFAULT_THEME.to_string(),
                path: theme_dir,
            });
        }
        Ok(Some(
            Resolution::new(DEFAULT_THEME, ValueOrigin::BundledDefault)
                .with_presentation(PresentationConfig::bundled()),
        ))
    }
}

//! Build-time value resolution for the manual generator.
//!
//! Two values feed the documentation build: a release version string and
//! an HTML presentation theme. Each is resolved by walking an ordered
//! chain of candidate sources (substituted placeholder, environment
//! variable, external helper script, build-description file, bundled
//! default) and taking the first non-absent value.
//!
//! # Design
//!
//! - Absence is `Ok(None)` and falls through; a source error is fatal
//!   and propagates immediately
//! - Environment access goes through the [`EnvProvider`] port so tests
//!   inject values instead of mutating process state
//! - Everything is synchronous and run-to-completion; the only blocking
//!   call is the helper process spawn

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod env;
pub mod error;
pub mod resolver;
pub mod sources;
pub mod theme;
pub mod version;

// Re-export commonly used types for convenience
pub use config::{BuildContext, DocConfig};
pub use env::{EnvProvider, ProcessEnv};
pub use error::ResolveError;
pub use resolver::{CandidateSource, Resolution, Resolver, ValueOrigin};
pub use sources::{
    BuildFileSource, BundledThemeSource, EnvironmentSource, HelperScriptSource, PlaceholderSource,
};
pub use theme::{
    DEFAULT_THEME, PresentationConfig, THEME_DISABLED_SENTINEL, THEME_ENV_VAR, THEME_PLACEHOLDER,
    resolve_theme,
};
pub use version::{VERSION_PLACEHOLDER, VersionProbe, resolve_version};

// Silence unused dev-dependency warnings; serde_json is exercised by the
// integration tests only
#[cfg(test)]
use serde_json as _;

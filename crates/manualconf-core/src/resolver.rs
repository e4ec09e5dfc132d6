//! Ordered fallback-chain evaluator.
//!
//! A [`Resolver`] walks its candidate sources in priority order and
//! returns the first non-absent value. The one subtle rule lives here:
//! absence (`Ok(None)`) is expected and chainable, while a source error
//! propagates immediately and aborts the whole resolution.

use serde::Serialize;

use crate::error::ResolveError;
use crate::theme::PresentationConfig;

/// How a resolved value was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueOrigin {
    /// A preprocessor substituted a real value over the placeholder token.
    Placeholder,
    /// The value came from a process-wide environment variable.
    Environment,
    /// An external helper script computed the value.
    HelperScript,
    /// The value was extracted from the build-description file.
    BuildFile,
    /// The bundled default theme was selected.
    BundledDefault,
}

impl std::fmt::Display for ValueOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Placeholder => "placeholder",
            Self::Environment => "environment",
            Self::HelperScript => "helper_script",
            Self::BuildFile => "build_file",
            Self::BundledDefault => "bundled_default",
        };
        f.write_str(label)
    }
}

/// A successfully resolved build-time value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved value, opaque to the resolver itself.
    pub value: String,
    /// Which source produced it.
    pub origin: ValueOrigin,
    /// Side-configuration bundle; only set by the bundled-theme source.
    pub presentation: Option<PresentationConfig>,
}

impl Resolution {
    /// Create a resolution with no side-configuration bundle.
    pub fn new(value: impl Into<String>, origin: ValueOrigin) -> Self {
        Self {
            value: value.into(),
            origin,
            presentation: None,
        }
    }

    /// Attach a side-configuration bundle.
    #[must_use]
    pub fn with_presentation(mut self, presentation: PresentationConfig) -> Self {
        self.presentation = Some(presentation);
        self
    }
}

/// One strategy capable of producing a value or declaring absence.
///
/// `Ok(None)` means "nothing to offer, try the next source". `Err(_)`
/// means the source was reached and failed internally; the resolver
/// never falls through past a failure.
pub trait CandidateSource {
    /// Short label used in log output.
    fn describe(&self) -> &'static str;

    /// Attempt to produce a value.
    fn try_resolve(&self) -> Result<Option<Resolution>, ResolveError>;
}

/// Ordered fallback chain for a single build-time value.
///
/// The source list is fixed at construction; order is the core invariant
/// (earlier sources strictly shadow later ones).
pub struct Resolver<'a> {
    what: &'static str,
    sources: Vec<Box<dyn CandidateSource + 'a>>,
}

impl<'a> Resolver<'a> {
    /// Create an empty resolver for the named value (used in log output).
    #[must_use]
    pub fn new(what: &'static str) -> Self {
        Self {
            what,
            sources: Vec::new(),
        }
    }

    /// Append a source at the lowest priority so far.
    #[must_use]
    pub fn with_source(mut self, source: impl CandidateSource + 'a) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Walk the chain and return the first non-absent value.
    pub fn resolve(&self) -> Result<Resolution, ResolveError> {
        for source in &self.sources {
            match source.try_resolve()? {
                Some(resolution) => {
                    tracing::debug!(
                        what = self.what,
                        source = source.describe(),
                        value = %resolution.value,
                        "resolved"
                    );
                    return Ok(resolution);
                }
                None => {
                    tracing::trace!(
                        what = self.what,
                        source = source.describe(),
                        "absent, falling through"
                    );
                }
            }
        }
        Err(ResolveError::Exhausted { what: self.what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl CandidateSource for Fixed {
        fn describe(&self) -> &'static str {
            "fixed"
        }

        fn try_resolve(&self) -> Result<Option<Resolution>, ResolveError> {
            Ok(Some(Resolution::new(self.0, ValueOrigin::Placeholder)))
        }
    }

    struct Absent;

    impl CandidateSource for Absent {
        fn describe(&self) -> &'static str {
            "absent"
        }

        fn try_resolve(&self) -> Result<Option<Resolution>, ResolveError> {
            Ok(None)
        }
    }

    struct Failing;

    impl CandidateSource for Failing {
        fn describe(&self) -> &'static str {
            "failing"
        }

        fn try_resolve(&self) -> Result<Option<Resolution>, ResolveError> {
            Err(ResolveError::Exhausted { what: "inner" })
        }
    }

    #[test]
    fn earlier_sources_shadow_later_ones() {
        let resolved = Resolver::new("value")
            .with_source(Absent)
            .with_source(Fixed("first"))
            .with_source(Fixed("second"))
            .with_source(Failing)
            .resolve()
            .unwrap();
        assert_eq!(resolved.value, "first");
    }

    #[test]
    fn absence_falls_through() {
        let resolved = Resolver::new("value")
            .with_source(Absent)
            .with_source(Absent)
            .with_source(Fixed("tail"))
            .resolve()
            .unwrap();
        assert_eq!(resolved.value, "tail");
    }

    #[test]
    fn source_error_propagates_instead_of_falling_through() {
        let err = Resolver::new("value")
            .with_source(Absent)
            .with_source(Failing)
            .with_source(Fixed("unreachable"))
            .resolve()
            .unwrap_err();
        assert!(matches!(err, ResolveError::Exhausted { what: "inner" }));
    }

    #[test]
    fn all_absent_exhausts_the_chain() {
        let err = Resolver::new("theme")
            .with_source(Absent)
            .with_source(Absent)
            .resolve()
            .unwrap_err();
        assert!(matches!(err, ResolveError::Exhausted { what: "theme" }));
    }
}

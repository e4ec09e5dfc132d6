//! Placeholder substitution detection.

use crate::error::ResolveError;
use crate::resolver::{CandidateSource, Resolution, ValueOrigin};

/// Detects whether a preprocessor substituted a real value over a
/// placeholder token.
///
/// The configuration text either still equals the literal token (no
/// preprocessor ran, absent) or holds whatever the preprocessor wrote,
/// which is returned verbatim. An empty string is a valid substituted
/// value; only exact equality with the token means absent.
pub struct PlaceholderSource<'a> {
    text: &'a str,
    token: &'a str,
}

impl<'a> PlaceholderSource<'a> {
    /// Create a source over the possibly-substituted `text` with the
    /// reserved literal `token`.
    #[must_use]
    pub const fn new(text: &'a str, token: &'a str) -> Self {
        Self { text, token }
    }
}

impl CandidateSource for PlaceholderSource<'_> {
    fn describe(&self) -> &'static str {
        "placeholder"
    }

    fn try_resolve(&self) -> Result<Option<Resolution>, ResolveError> {
        if self.text == self.token {
            return Ok(None);
        }
        Ok(Some(Resolution::new(self.text, ValueOrigin::Placeholder)))
    }
}

//! Environment variable source.

use crate::env::EnvProvider;
use crate::error::ResolveError;
use crate::resolver::{CandidateSource, Resolution, ValueOrigin};

/// Reads a named process-wide variable through an injected provider.
///
/// Unset, empty, and the reserved sentinel word all mean "not set" for
/// resolution purposes; any other literal value is returned as-is.
pub struct EnvironmentSource<'a> {
    provider: &'a dyn EnvProvider,
    key: &'a str,
    sentinel: &'a str,
}

impl<'a> EnvironmentSource<'a> {
    /// Create a source over `key`, treating `sentinel` as "disabled".
    #[must_use]
    pub const fn new(provider: &'a dyn EnvProvider, key: &'a str, sentinel: &'a str) -> Self {
        Self {
            provider,
            key,
            sentinel,
        }
    }
}

impl CandidateSource for EnvironmentSource<'_> {
    fn describe(&self) -> &'static str {
        "environment"
    }

    fn try_resolve(&self) -> Result<Option<Resolution>, ResolveError> {
        match self.provider.var(self.key) {
            Some(value) if !value.is_empty() && value != self.sentinel => {
                Ok(Some(Resolution::new(value, ValueOrigin::Environment)))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeEnv(HashMap<String, String>);

    impl FakeEnv {
        fn with(key: &str, value: &str) -> Self {
            let mut vars = HashMap::new();
            vars.insert(key.to_string(), value.to_string());
            Self(vars)
        }

        fn empty() -> Self {
            Self(HashMap::new())
        }
    }

    impl EnvProvider for FakeEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    #[test]
    fn unset_variable_is_absent() {
        let env = FakeEnv::empty();
        let source = EnvironmentSource::new(&env, "DOC_HTML_THEME", "none");
        assert_eq!(source.try_resolve().unwrap(), None);
    }

    #[test]
    fn empty_value_is_absent() {
        let env = FakeEnv::with("DOC_HTML_THEME", "");
        let source = EnvironmentSource::new(&env, "DOC_HTML_THEME", "none");
        assert_eq!(source.try_resolve().unwrap(), None);
    }

    #[test]
    fn sentinel_value_is_absent() {
        let env = FakeEnv::with("DOC_HTML_THEME", "none");
        let source = EnvironmentSource::new(&env, "DOC_HTML_THEME", "none");
        assert_eq!(source.try_resolve().unwrap(), None);
    }

    #[test]
    fn anything_else_is_returned_literally() {
        let env = FakeEnv::with("DOC_HTML_THEME", "my-theme");
        let source = EnvironmentSource::new(&env, "DOC_HTML_THEME", "none");
        let resolved = source.try_resolve().unwrap().unwrap();
        assert_eq!(resolved.value, "my-theme");
        assert_eq!(resolved.origin, ValueOrigin::Environment);
    }

    #[test]
    fn sentinel_match_is_exact() {
        // " none" and "None" are not the sentinel.
        let env = FakeEnv::with("DOC_HTML_THEME", "None");
        let source = EnvironmentSource::new(&env, "DOC_HTML_THEME", "none");
        let resolved = source.try_resolve().unwrap().unwrap();
        assert_eq!(resolved.value, "None");
    }
}

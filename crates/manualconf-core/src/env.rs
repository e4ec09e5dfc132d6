//! Environment access port.
//!
//! Resolution logic never touches the process environment directly; it
//! goes through this trait so tests can substitute deterministic values
//! instead of mutating real process state.

/// Read-only view of named process-wide variables.
pub trait EnvProvider {
    /// Return the variable's value, or `None` when it is unset
    /// (or not valid Unicode).
    fn var(&self, key: &str) -> Option<String>;
}

/// Production provider backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

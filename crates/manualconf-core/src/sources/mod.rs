//! Candidate source implementations.
//!
//! Each source is one strategy for producing a build-time value. They
//! share no state; a resolver composes them into a priority chain.

mod autoconf;
mod bundled;
mod environment;
mod placeholder;
mod script;

pub use autoconf::BuildFileSource;
pub use bundled::BundledThemeSource;
pub use environment::EnvironmentSource;
pub use placeholder::PlaceholderSource;
pub use script::HelperScriptSource;

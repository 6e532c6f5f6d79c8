//! Search-path probing for the tool invoker and fallback interpreters
//!
//! A probe only checks that an executable exists on `PATH` and may be
//! executed. It never runs the binary.

use std::path::PathBuf;

/// Answers whether a named executable is available to launch
pub trait RuntimeAvailability {
    /// Full path of `name` if it is on the search path and executable
    fn locate(&self, name: &str) -> Option<PathBuf>;

    fn is_available(&self, name: &str) -> bool {
        self.locate(name).is_some()
    }
}

/// Probe backed by the real `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct PathProbe;

impl RuntimeAvailability for PathProbe {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        let found = which::which(name).ok();
        tracing::debug!(binary = name, path = ?found, "probed search path");
        found
    }
}

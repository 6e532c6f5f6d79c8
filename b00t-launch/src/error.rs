//! Errors raised before control is handed to the server
//!
//! Every variant is fatal: the launcher prints it and exits non-zero
//! without launching anything.

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LaunchError {
    /// The fallback interpreter could not install the server packages
    /// (interpreter missing, or the package manager exited non-zero)
    #[snafu(display("Dependency install failed: {command}"))]
    DependencyEnsure {
        command: String,
        source: std::io::Error,
    },

    /// The server executable could not replace the launcher
    #[snafu(display("Failed to launch {executable}"))]
    Launch {
        executable: String,
        source: std::io::Error,
    },
}

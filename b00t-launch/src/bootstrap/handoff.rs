//! Process handoff: the launcher becomes the server
//!
//! On unix the launcher's image is replaced with `exec`, so the PID,
//! open descriptors and signal routing belong to the server from then
//! on and its exit code is the launcher's exit code. Elsewhere the
//! server runs as a child and its exit code is propagated.

use crate::bootstrap::plan::LaunchPlan;
use crate::error::LaunchError;
use std::convert::Infallible;
use std::io::Write;
use std::process::Command;
use tracing::{info, warn};

/// Hand control to `plan`. Only returns on failure.
pub fn handoff(plan: &LaunchPlan) -> Result<Infallible, LaunchError> {
    info!(%plan, "handing off to server");

    // Buffered output would be lost with the old image
    if let Err(e) = std::io::stdout().flush() {
        warn!(error = %e, "failed to flush stdout before handoff");
    }

    let mut command = Command::new(&plan.executable);
    command.args(&plan.args);

    replace_process(command, &plan.executable)
}

#[cfg(unix)]
fn replace_process(mut command: Command, executable: &str) -> Result<Infallible, LaunchError> {
    use crate::error::LaunchSnafu;
    use snafu::IntoError;
    use std::os::unix::process::CommandExt;

    let source = command.exec();
    Err(LaunchSnafu { executable }.into_error(source))
}

#[cfg(not(unix))]
fn replace_process(mut command: Command, executable: &str) -> Result<Infallible, LaunchError> {
    use crate::error::LaunchSnafu;
    use snafu::ResultExt;

    let status = command.status().context(LaunchSnafu { executable })?;

    // 🤓 killed without a code still has to look like a failure
    std::process::exit(status.code().unwrap_or(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_is_launch_failure() {
        let plan = LaunchPlan::new("b00t-no-such-server", ["--port", "8080"]);
        let Err(err) = handoff(&plan);

        assert!(matches!(err, LaunchError::Launch { .. }));
        assert_eq!(err.to_string(), "Failed to launch b00t-no-such-server");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_file_is_launch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server");
        std::fs::write(&path, "#!/bin/sh\necho hi\n").unwrap();

        let plan = LaunchPlan::new(path.to_string_lossy(), Vec::<String>::new());
        let Err(err) = handoff(&plan);

        match err {
            LaunchError::Launch { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

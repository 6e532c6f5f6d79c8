//! Dependency install for the fallback interpreter
//!
//! When uv is missing, the server packages are upgraded with pip before
//! launch. The install blocks until pip exits; a failure aborts the
//! bootstrap.

use crate::bootstrap::plan::LaunchPlan;
use crate::error::{DependencyEnsureSnafu, LaunchError};
use snafu::ResultExt;
use std::io;
use tracing::info;

pub const PACKAGE_MANAGER: &str = "pip";

/// Server runtime and web framework, in install order
pub const SERVER_PACKAGES: [&str; 2] = ["uvicorn", "fastapi"];

/// Runs a command to completion
pub trait CommandRunner {
    /// Ok only if the command ran and exited zero
    fn run(&self, command: &LaunchPlan) -> io::Result<()>;
}

/// Runs commands for real, with stdin and stderr inherited
///
/// The command's stdout is sent to stderr so the server owns stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct DuctRunner;

impl CommandRunner for DuctRunner {
    fn run(&self, command: &LaunchPlan) -> io::Result<()> {
        duct::cmd(command.executable.as_str(), command.args.iter())
            .stdout_to_stderr()
            .run()
            .map(|_| ())
    }
}

/// Reports on stderr what would run instead of running it
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, command: &LaunchPlan) -> io::Result<()> {
        eprintln!("⏭️  Would run: {command}");
        Ok(())
    }
}

/// `<interpreter> -m pip install --upgrade uvicorn fastapi`
pub fn install_command(interpreter: &str) -> LaunchPlan {
    let mut args = vec!["-m", PACKAGE_MANAGER, "install", "--upgrade"];
    args.extend(SERVER_PACKAGES);
    LaunchPlan::new(interpreter, args)
}

/// Upgrade the server packages for `interpreter`
pub fn ensure_dependencies(
    runner: &dyn CommandRunner,
    interpreter: &str,
) -> Result<(), LaunchError> {
    let command = install_command(interpreter);

    // stderr, alongside pip's own output
    eprintln!("🔧 Ensuring {}...", SERVER_PACKAGES.join(", "));
    info!(%command, "installing server packages");

    runner.run(&command).context(DependencyEnsureSnafu {
        command: command.to_string(),
    })?;

    info!(interpreter, "server packages ready");
    Ok(())
}

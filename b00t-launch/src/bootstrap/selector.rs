//! Runtime selector: uv when present, otherwise a bare interpreter
//!
//! Priority order: uv > python3 > python. uv resolves the project's
//! dependencies itself at launch, so only the interpreter path installs
//! packages first.

use crate::bootstrap::config::ResolvedConfig;
use crate::bootstrap::installer::{CommandRunner, ensure_dependencies};
use crate::bootstrap::plan::LaunchPlan;
use crate::bootstrap::prereq::RuntimeAvailability;
use crate::error::LaunchError;
use serde::Serialize;
use std::ffi::OsString;
use tracing::{debug, warn};

/// Preferred tool invoker
pub const TOOL_INVOKER: &str = "uv";

/// Interpreters tried in order when uv is missing
pub const FALLBACK_INTERPRETERS: [&str; 2] = ["python3", "python"];

pub const SERVER_LAUNCHER: &str = "uvicorn";

/// ASGI app object served by uvicorn (`module:attribute`)
pub const APP_TARGET: &str = "app:app";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// `uv run uvicorn ...`
    Primary,
    /// `<interpreter> -m uvicorn ...` after a pip upgrade
    Fallback,
}

/// The chosen strategy and the plan it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub strategy: Strategy,
    pub plan: LaunchPlan,
}

/// Pick a strategy and build its launch plan
///
/// On the fallback path this runs the dependency install through `runner`
/// exactly once, before returning. An install failure is fatal.
pub fn select(
    config: &ResolvedConfig,
    availability: &dyn RuntimeAvailability,
    runner: &dyn CommandRunner,
) -> Result<Selection, LaunchError> {
    if availability.is_available(TOOL_INVOKER) {
        debug!(tool = TOOL_INVOKER, "tool invoker found, skipping dependency install");
        return Ok(Selection {
            strategy: Strategy::Primary,
            plan: primary_plan(config),
        });
    }

    let interpreter = fallback_interpreter(availability);
    warn!(
        tool = TOOL_INVOKER,
        interpreter, "tool invoker not found, falling back to interpreter"
    );

    ensure_dependencies(runner, interpreter)?;

    Ok(Selection {
        strategy: Strategy::Fallback,
        plan: fallback_plan(interpreter, config),
    })
}

/// First interpreter on the search path; python3 if none is
///
/// A missing interpreter is reported by the install step, not here.
fn fallback_interpreter(availability: &dyn RuntimeAvailability) -> &'static str {
    FALLBACK_INTERPRETERS
        .into_iter()
        .find(|name| availability.is_available(name))
        .unwrap_or(FALLBACK_INTERPRETERS[0])
}

/// `uv run uvicorn app:app --host <HOST> --port <PORT>`
pub fn primary_plan(config: &ResolvedConfig) -> LaunchPlan {
    let mut args = vec![OsString::from("run"), OsString::from(SERVER_LAUNCHER)];
    args.extend(server_args(config));
    LaunchPlan::new(TOOL_INVOKER, args)
}

/// `<interpreter> -m uvicorn app:app --host <HOST> --port <PORT>`
pub fn fallback_plan(interpreter: &str, config: &ResolvedConfig) -> LaunchPlan {
    let mut args = vec![OsString::from("-m"), OsString::from(SERVER_LAUNCHER)];
    args.extend(server_args(config));
    LaunchPlan::new(interpreter, args)
}

fn server_args(config: &ResolvedConfig) -> [OsString; 5] {
    [
        OsString::from(APP_TARGET),
        OsString::from("--host"),
        config.host.clone(),
        OsString::from("--port"),
        config.port.clone(),
    ]
}

//! Launch report printed by `--dry-run`

use crate::bootstrap::config::ResolvedConfig;
use crate::bootstrap::selector::{Selection, Strategy};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What the launcher would run, and why
///
/// Non-unicode host, port or args are rendered lossily; the plan itself
/// keeps the original bytes.
#[derive(Debug, Serialize)]
pub struct LaunchReport<'a> {
    pub generated: String,
    pub strategy: Strategy,
    pub host: String,
    pub port: String,
    pub executable: &'a str,
    pub args: Vec<String>,
}

impl<'a> LaunchReport<'a> {
    pub fn new(config: &ResolvedConfig, selection: &'a Selection, at: DateTime<Utc>) -> Self {
        Self {
            generated: at.to_rfc3339(),
            strategy: selection.strategy,
            host: config.host.to_string_lossy().into_owned(),
            port: config.port.to_string_lossy().into_owned(),
            executable: &selection.plan.executable,
            args: selection.plan.display_args(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize launch report")
    }
}

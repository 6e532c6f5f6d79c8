//! Launch command: resolve, select, hand off
//!
//! Every step before the handoff is fail-fast. Once the handoff
//! succeeds the launcher is gone and the server's exit code is ours.

use crate::bootstrap::{
    DryRunRunner, DuctRunner, LaunchReport, PathProbe, ResolvedConfig, handoff, resolve, select,
};
use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "b00t-launch",
    version,
    about = "Start the Graphiti MCP server with uv, or python as a fallback"
)]
pub struct LaunchArgs {
    /// Print the launch plan as JSON on stdout without installing or launching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Debug diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Handle the launch command
pub fn handle_launch_command(args: &LaunchArgs) -> Result<()> {
    let config = resolve();

    // Printed before selection so the intended bind survives a later failure
    let status = format!("🥾 Starting Graphiti MCP Server on {}", config.bind_address());

    if args.dry_run {
        // stdout carries only the JSON report
        eprintln!("{status}");
        return dry_run(&config);
    }

    println!("{status}");

    let selection = select(&config, &PathProbe, &DuctRunner)
        .context("Failed to prepare server runtime")?;

    println!("🚀 Launching: {}", selection.plan);

    let never = handoff(&selection.plan).context("Failed to hand off to server")?;
    match never {}
}

fn dry_run(config: &ResolvedConfig) -> Result<()> {
    let selection = select(config, &PathProbe, &DryRunRunner)
        .context("Failed to prepare server runtime")?;

    let report = LaunchReport::new(config, &selection, Utc::now());
    println!("{}", report.to_json()?);

    Ok(())
}

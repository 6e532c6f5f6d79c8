//! Bootstrap module for launching the Graphiti MCP server
//!
//! Runs strictly in order:
//! - Configuration (HOST/PORT with defaults)
//! - Runtime selection (uv, or python plus a pip upgrade)
//! - Handoff (exec into the server)

pub mod config;
pub mod handoff;
pub mod installer;
pub mod plan;
pub mod prereq;
pub mod report;
pub mod selector;

pub use config::{ResolvedConfig, load_config, resolve};
pub use handoff::handoff;
pub use installer::{CommandRunner, DryRunRunner, DuctRunner, ensure_dependencies};
pub use plan::LaunchPlan;
pub use prereq::{PathProbe, RuntimeAvailability};
pub use report::LaunchReport;
pub use selector::{Selection, Strategy, select};

//! b00t-launch: bootstrap launcher for the Graphiti MCP server
//!
//! Resolves `HOST`/`PORT`, runs the server through `uv` when it is on
//! `PATH`, otherwise upgrades `uvicorn` and `fastapi` with pip and runs
//! it through python, then replaces itself with the server process.

pub mod bootstrap;
pub mod commands;
pub mod error;

pub use error::LaunchError;

pub mod launch;

pub use launch::{LaunchArgs, handle_launch_command};

//! Configuration resolver for the launcher
//!
//! Only two knobs exist: `HOST` and `PORT`. Both are read once at startup,
//! fall back to fixed defaults when unset or empty, and are otherwise
//! passed through verbatim, byte for byte. The port is never parsed here;
//! a bad value is the server's problem to report.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8080";

/// Bind address and port handed to the server
///
/// Values are kept as `OsString` so a non-unicode `HOST` reaches the
/// server as given instead of being widened to the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub host: OsString,
    pub port: OsString,
}

impl ResolvedConfig {
    /// `host:port`, as shown in the startup status line (lossy)
    pub fn bind_address(&self) -> String {
        format!(
            "{}:{}",
            self.host.to_string_lossy(),
            self.port.to_string_lossy()
        )
    }
}

/// Build the config from an explicit environment mapping
pub fn load_config(env: &HashMap<String, OsString>) -> ResolvedConfig {
    ResolvedConfig {
        host: value_or_default(env, HOST_VAR, DEFAULT_HOST),
        port: value_or_default(env, PORT_VAR, DEFAULT_PORT),
    }
}

/// Build the config from the real process environment
pub fn resolve() -> ResolvedConfig {
    let env: HashMap<String, OsString> = [HOST_VAR, PORT_VAR]
        .into_iter()
        .filter_map(|key| std::env::var_os(key).map(|value| (key.to_string(), value)))
        .collect();

    load_config(&env)
}

fn value_or_default(env: &HashMap<String, OsString>, key: &str, default: &str) -> OsString {
    env.get(key)
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| OsStr::new(default).to_os_string())
}

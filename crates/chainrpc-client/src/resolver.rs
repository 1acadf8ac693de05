// Copyright 2025 ChainRPC Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Filesystem discovery of locally configured daemon instances.
//!
//! A chaind installation keeps one subdirectory per instance under a base
//! directory. Each instance directory carries two flat files:
//!
//! - `chaind.conf` holds the RPC credentials, `rpcuser=<user>` on the
//!   first line and `rpcpassword=<pass>` on the second, in that fixed order
//! - `params.dat` holds daemon parameters, scanned line by line for the
//!   `default-rpc-port=<port>` entry
//!
//! The resolver turns an instance name into fully populated
//! [`ConnectOptions`]. It is the only filesystem-facing piece of the
//! client; everything network-facing consumes its output.

use std::fs;
use std::path::{Path, PathBuf};

use chainrpc_common::protocol::{ChainrpcError, ConnectOptions, Result};

/// Name of the daemon's own directory inside the base dir; never an instance.
pub const DAEMON_DIR: &str = "chaind";

/// Per-instance credentials file.
pub const CONF_FILE: &str = "chaind.conf";

/// Per-instance daemon parameter file.
pub const PARAMS_FILE: &str = "params.dat";

/// Environment override for the base directory.
pub const HOME_ENV: &str = "CHAIND_HOME";

/// Resolves instance names to connection options.
///
/// The base directory is held as an explicit value: resolve it once (via
/// [`InstanceResolver::from_env`] or [`default_base_dir`]) and pass it in,
/// rather than reading a global path constant at each use.
#[derive(Debug, Clone)]
pub struct InstanceResolver {
    base_dir: PathBuf,
}

impl InstanceResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        InstanceResolver {
            base_dir: base_dir.into(),
        }
    }

    /// Resolver over the platform's conventional base directory, honoring
    /// the `CHAIND_HOME` override.
    pub fn from_env() -> Self {
        Self::new(default_base_dir())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Enumerate candidate instance names.
    ///
    /// One subdirectory per instance; hidden entries, plain files, and the
    /// daemon's own [`DAEMON_DIR`] are excluded. Names come back sorted.
    pub fn instances(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if name.starts_with('.') || name == DAEMON_DIR {
                continue;
            }
            names.push(name.to_string());
        }

        names.sort();
        Ok(names)
    }

    /// Resolve connection options for a named instance.
    ///
    /// An unknown name fails with [`ChainrpcError::InvalidInstance`] before
    /// any config file is opened. A known name yields options with user,
    /// pass, and port all populated.
    pub fn resolve(&self, name: &str) -> Result<ConnectOptions> {
        if !self.instances()?.iter().any(|candidate| candidate == name) {
            return Err(ChainrpcError::InvalidInstance(name.to_string()));
        }

        let dir = self.base_dir.join(name);
        let (user, pass) = read_credentials(&dir.join(CONF_FILE))?;
        let port = read_rpc_port(&dir.join(PARAMS_FILE))?;

        tracing::debug!(instance = name, port, "resolved instance");
        Ok(ConnectOptions::new("127.0.0.1", port).with_auth(user, pass))
    }
}

/// Reads the credentials file: `rpcuser=<user>` then `rpcpassword=<pass>`,
/// first two lines, in that fixed order.
fn read_credentials(path: &Path) -> Result<(String, String)> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines();

    let user = conf_value(lines.next(), "rpcuser", path)?;
    let pass = conf_value(lines.next(), "rpcpassword", path)?;
    Ok((user, pass))
}

fn conf_value(line: Option<&str>, key: &str, path: &Path) -> Result<String> {
    let line = line.ok_or_else(|| {
        ChainrpcError::Config(format!("{}: missing {} line", path.display(), key))
    })?;
    let (_, value) = line.split_once('=').ok_or_else(|| {
        ChainrpcError::Config(format!("{}: malformed {} line", path.display(), key))
    })?;
    Ok(value.trim().to_string())
}

/// Scans the parameter file for `default-rpc-port=<value>`; the first
/// whitespace-delimited token after `=` is the port.
fn read_rpc_port(path: &Path) -> Result<u16> {
    let text = fs::read_to_string(path)?;

    for line in text.lines() {
        let Some((key, rest)) = line.split_once('=') else {
            continue;
        };
        if key.trim() != "default-rpc-port" {
            continue;
        }
        let token = rest.split_whitespace().next().ok_or_else(|| {
            ChainrpcError::Config(format!("{}: empty default-rpc-port value", path.display()))
        })?;
        return token.parse::<u16>().map_err(|_| {
            ChainrpcError::Config(format!(
                "{}: invalid default-rpc-port '{token}'",
                path.display()
            ))
        });
    }

    Err(ChainrpcError::Config(format!(
        "{}: no default-rpc-port entry",
        path.display()
    )))
}

/// Platform base directory for instance discovery, resolved once.
///
/// Priority: `CHAIND_HOME` env var, then `%APPDATA%\ChainD` on Windows or
/// `~/.chaind` elsewhere.
pub fn default_base_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(dir);
    }
    if cfg!(windows) {
        dirs::config_dir()
            .map(|dir| dir.join("ChainD"))
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        dirs::home_dir()
            .map(|dir| dir.join(".chaind"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

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

//! # ChainRPC CLI Entry Point
//!
//! Command-line interface for calling chaind daemon instances configured
//! on the local machine.
//!
//! ## Usage
//!
//! ```bash
//! # List configured instances
//! chainrpc instances
//!
//! # Call a method (outputs raw JSON)
//! chainrpc call mainnet getinfo
//!
//! # Call with parameters; each is parsed as JSON, bare strings ride along
//! chainrpc call mainnet getbalance '"savings"' 6
//!
//! # Pipe output to jq for processing
//! chainrpc call mainnet getinfo | jq '.result.blocks'
//! ```
//!
//! Instances are discovered under the platform base directory
//! (`~/.chaind`, or `%APPDATA%\ChainD` on Windows), overridable with the
//! `CHAIND_HOME` environment variable or the `--dir` flag.

use anyhow::Result;
use argh::FromArgs;
use serde_json::Value;
use std::time::Duration;

use chainrpc_client::{chaind_commands, InstanceResolver, MethodCasing, RpcClient};

/// Main CLI structure parsed from command-line arguments.
///
/// Uses `argh` for declarative argument parsing. The top-level command
/// dispatches to one of the two subcommands: instances or call.
#[derive(FromArgs)]
/// ChainRPC - JSON-RPC client for locally configured chaind instances
struct Cli {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Commands {
    Instances(InstancesArgs),
    Call(CallArgs),
}

/// Arguments for listing configured instances.
///
/// Prints one instance name per line, sorted, suitable for shell loops.
#[derive(FromArgs)]
#[argh(subcommand, name = "instances")]
/// list configured daemon instances
struct InstancesArgs {
    /// base directory to search instead of the platform default
    #[argh(option, long = "dir")]
    dir: Option<String>,
}

/// Arguments for making a single RPC call.
///
/// The `call` command resolves the named instance, makes one RPC call, and
/// outputs the response as raw JSON to stdout. This makes it suitable for
/// scripting and integration with other tools (e.g., `jq`, `awk`, etc.).
///
/// # Output Format
///
/// Outputs raw JSON (no pretty-printing) to stdout. Errors are reported
/// to stderr with non-zero exit code.
#[derive(FromArgs)]
#[argh(subcommand, name = "call")]
/// call an RPC method on a configured instance
struct CallArgs {
    /// name of the configured instance to call
    #[argh(positional)]
    instance: String,

    /// name of the RPC method to call
    #[argh(positional)]
    method: String,

    /// method parameters, each parsed as JSON with bare-string fallback
    #[argh(positional)]
    params: Vec<String>,

    /// base directory to search instead of the platform default
    #[argh(option, long = "dir")]
    dir: Option<String>,

    /// method-name casing policy: lower (default), upper, or unchanged
    #[argh(option, long = "casing", default = "\"lower\".into()")]
    casing: String,

    /// per-request timeout in milliseconds
    ///
    /// The client imposes no timeout of its own; without this flag the
    /// call waits as long as the transport does.
    #[argh(option, long = "timeout-ms")]
    timeout_ms: Option<u64>,
}

fn resolver_for(dir: Option<&str>) -> InstanceResolver {
    match dir {
        Some(dir) => InstanceResolver::new(dir),
        None => InstanceResolver::from_env(),
    }
}

/// Each CLI param is parsed as JSON first so numbers, booleans, and
/// structured values survive; anything unparsable rides along as a string.
fn parse_param(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    // call keeps stdout clean for unix tool usage (piping to jq, etc.)
    if !matches!(cli.command, Commands::Call(_)) {
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .init();
    }

    match cli.command {
        Commands::Instances(args) => {
            let resolver = resolver_for(args.dir.as_deref());
            for name in resolver.instances()? {
                println!("{name}");
            }
        }
        Commands::Call(args) => {
            let resolver = resolver_for(args.dir.as_deref());
            let mut options = resolver.resolve(&args.instance)?;
            if let Some(ms) = args.timeout_ms {
                options = options.with_timeout(Duration::from_millis(ms));
            }

            let mut client = RpcClient::with_commands(options, chaind_commands())?;
            client.set_casing(MethodCasing::from_policy(&args.casing));

            let params: Vec<Value> = args.params.iter().map(|p| parse_param(p)).collect();
            let result = client.call(&args.method, &params).await?;

            println!("{result}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_param_json_values() {
        assert_eq!(parse_param("6"), json!(6));
        assert_eq!(parse_param("true"), json!(true));
        assert_eq!(parse_param("null"), json!(null));
        assert_eq!(parse_param("\"savings\""), json!("savings"));
        assert_eq!(parse_param("{\"a\":1}"), json!({"a": 1}));
        assert_eq!(parse_param("[1,2]"), json!([1, 2]));
    }

    #[test]
    fn test_parse_param_bare_string_fallback() {
        assert_eq!(parse_param("savings"), json!("savings"));
        assert_eq!(parse_param("1abc"), json!("1abc"));
    }
}

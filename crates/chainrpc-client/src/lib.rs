//! ChainRPC Client
//!
//! JSON-RPC client for chaind daemon instances configured on the local
//! machine.
//!
//! # Overview
//!
//! A [`RpcClient`] owns a connection configuration and a command schema.
//! Every call flows through [`RpcClient::call`]: parameters are validated
//! and defaulted against the schema, the method name is normalized by the
//! casing policy, and the exchange is delegated to the HTTP(S) transport
//! in `chainrpc-common`.
//!
//! # Components
//!
//! - [`client`] - The RPC client and its bound per-method invokers
//! - [`schema`] - Command schema types and parameter resolution
//! - [`casing`] - Method-name casing policies
//! - [`commands`] - The built-in chaind command table
//! - [`resolver`] - Filesystem discovery of configured daemon instances
//!
//! # Example
//!
//! ```no_run
//! use chainrpc_client::{chaind_commands, InstanceResolver, RpcClient};
//! use chainrpc_client::ConnectOptions;
//!
//! # async fn run() -> chainrpc_client::Result<()> {
//! let resolver = InstanceResolver::from_env();
//! let mut client = RpcClient::with_commands(ConnectOptions::default(), chaind_commands())?;
//! client.connect_instance(&resolver, "mainnet")?;
//!
//! let info = client.call("getinfo", &[]).await?;
//! println!("{info}");
//! # Ok(())
//! # }
//! ```

pub mod casing;
pub mod client;
pub mod commands;
pub mod resolver;
pub mod schema;

pub use casing::MethodCasing;
pub use client::{BoundCommand, RpcClient};
pub use commands::chaind_commands;
pub use resolver::InstanceResolver;
pub use schema::{CommandSchema, ParamSpec};

pub use chainrpc_common::protocol::{ChainrpcError, ConnectOptions, Protocol, Result};

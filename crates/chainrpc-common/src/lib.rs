//! ChainRPC Common Types and Transport
//!
//! This crate provides the protocol definitions and HTTP(S) transport layer
//! for the ChainRPC client.
//!
//! # Overview
//!
//! ChainRPC is a JSON-RPC 2.0 client for chaind daemon instances configured
//! on the local machine. This crate contains the shared infrastructure used
//! by the client and CLI:
//!
//! - **Protocol Layer**: the request envelope, connection options, and error
//!   handling
//! - **Transport Layer**: one HTTP(S) POST exchange per call, JSON in and out
//!
//! # Architecture
//!
//! The wire protocol is plain JSON-RPC over HTTP:
//! - **Transport**: HTTP or HTTPS POST, selected by the connection options
//! - **Serialization**: JSON
//! - **Request Format**: `{"id": ..., "method": ..., "params": [...], "jsonrpc": "2.0"}`
//! - **Authentication**: HTTP basic auth when credentials are configured
//!
//! # Components
//!
//! - [`protocol`] - Core protocol types (request envelope, options, errors)
//! - [`transport`] - The HTTP(S) transport
//!
//! # Example
//!
//! ```no_run
//! use chainrpc_common::protocol::ConnectOptions;
//! use chainrpc_common::transport::HttpTransport;
//! use serde_json::json;
//!
//! # async fn run() -> chainrpc_common::protocol::Result<()> {
//! let options = ConnectOptions::new("127.0.0.1", 8570)
//!     .with_auth("rpcuser", "rpcpass");
//!
//! let transport = HttpTransport::new();
//! let response = transport.send("getinfo", vec![], &options).await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

pub mod protocol;
pub mod transport;

pub use protocol::*;

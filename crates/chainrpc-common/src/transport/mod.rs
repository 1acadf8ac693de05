//! ChainRPC Transport Layer
//!
//! This module performs the HTTP(S) exchange for a single RPC call.
//!
//! # Architecture
//!
//! Each call is one independent request/response round trip:
//! - **Transport**: HTTP or HTTPS POST, scheme chosen by the connection options
//! - **Serialization**: JSON
//! - **Request Body**: `{"id": ..., "method": ..., "params": [...], "jsonrpc": "2.0"}`
//!
//! There is no connection pooling policy, no retry, and no timeout beyond
//! one the caller injects through the connection options.
//!
//! # Example
//!
//! ```no_run
//! use chainrpc_common::protocol::ConnectOptions;
//! use chainrpc_common::transport::HttpTransport;
//! use serde_json::json;
//!
//! # async fn run() -> chainrpc_common::protocol::Result<()> {
//! let transport = HttpTransport::new();
//! let options = ConnectOptions::new("127.0.0.1", 8570).with_auth("u", "p");
//!
//! let balance = transport
//!     .send("getbalance", vec![json!("*"), json!(1)], &options)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod http;

pub use http::HttpTransport;

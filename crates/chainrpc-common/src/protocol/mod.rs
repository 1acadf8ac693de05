pub mod error;
pub mod options;
pub mod request;

#[cfg(test)]
mod tests;

pub use error::{ChainrpcError, Result};
pub use options::{ConnectOptions, Protocol, DEFAULT_RPC_PORT};
pub use request::{MethodName, RpcParams, RpcRequest, JSONRPC_VERSION};

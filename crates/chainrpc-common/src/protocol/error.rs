use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainrpcError {
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    #[error("invalid instance configuration: {0}")]
    Config(String),

    #[error("missing required parameter {position} for method '{method}'")]
    MissingParameter { method: String, position: usize },

    /// Non-200 response carrying a JSON body; the body is surfaced verbatim.
    #[error("rpc error: {0}")]
    Rpc(Value),

    /// Non-200 response without a JSON body.
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// Network-level failure, forwarded unmodified.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("method name '{0}' collides with a client operation")]
    ReservedMethodName(String),
}

pub type Result<T> = std::result::Result<T, ChainrpcError>;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

pub type MethodName = String;
pub type RpcParams = Vec<Value>;

/// Fixed protocol-version literal placed on every request.
pub const JSONRPC_VERSION: &str = "2.0";

static REQUEST_SEQ: AtomicU64 = AtomicU64::new(0);

/// A JSON-RPC request envelope.
///
/// Field order matches the wire format:
/// `{"id": ..., "method": ..., "params": [...], "jsonrpc": "2.0"}`.
/// One envelope is built fresh per call and discarded once the matching
/// response has been consumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcRequest {
    /// Unique correlation token, time-ordered.
    pub id: String,
    /// Wire method name (casing already applied by the caller).
    pub method: MethodName,
    /// Positional parameters.
    pub params: RpcParams,
    /// Always [`JSONRPC_VERSION`].
    pub jsonrpc: String,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: RpcParams) -> Self {
        RpcRequest {
            id: generate_request_id(),
            method: method.into(),
            params,
            jsonrpc: JSONRPC_VERSION.into(),
        }
    }
}

fn generate_request_id() -> String {
    // Millisecond timestamp keeps ids time-ordered; the counter breaks
    // ties between requests issued within the same millisecond.
    let timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    let counter = REQUEST_SEQ.fetch_add(1, Ordering::SeqCst);

    format!("{timestamp}-{counter}")
}

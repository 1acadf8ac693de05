//! HTTP(S) transport for JSON-RPC exchanges.

use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;

use crate::protocol::{ChainrpcError, ConnectOptions, Result, RpcParams, RpcRequest};

/// Issues one HTTP(S) POST per call and interprets the response.
///
/// # Response Interpretation
///
/// - **200**: the body is parsed as JSON and returned verbatim. A JSON-RPC
///   `error` field inside a 200 body is NOT inspected here; daemon methods
///   that signal soft failure through it are interpreted by the caller.
/// - **Non-200 with a JSON body**: rejected with the parsed body verbatim
///   ([`ChainrpcError::Rpc`]).
/// - **Non-200 otherwise**: rejected with the bare status code
///   ([`ChainrpcError::HttpStatus`]).
/// - **Network failure**: the underlying error, unmodified
///   ([`ChainrpcError::Transport`]).
///
/// Cloning is cheap; clones share the underlying connection handling but
/// no per-call state.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            http: reqwest::Client::new(),
        }
    }

    /// Send one request and await its response.
    ///
    /// Builds a fresh [`RpcRequest`] envelope around `method` and `params`,
    /// POSTs it to the endpoint described by `options` with
    /// `Content-Type: application/json` and a correct `Content-Length`,
    /// and attaches basic auth when both credentials are present.
    ///
    /// Exactly one outbound exchange happens per call; failures are never
    /// retried here.
    pub async fn send(
        &self,
        method: &str,
        params: RpcParams,
        options: &ConnectOptions,
    ) -> Result<Value> {
        let request = RpcRequest::new(method, params);
        let body = serde_json::to_vec(&request)?;

        tracing::debug!(method, id = %request.id, endpoint = %options, "dispatching rpc request");

        let mut builder = self
            .http
            .post(options.url())
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_LENGTH, body.len());

        if let (Some(user), Some(pass)) = (&options.user, &options.pass) {
            builder = builder.basic_auth(user, Some(pass));
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.body(body).send().await?;
        let status = response.status();

        if status == StatusCode::OK {
            let bytes = response.bytes().await?;
            return Ok(serde_json::from_slice(&bytes)?);
        }

        // Content-Type decides whether the failure body is a protocol-level
        // error to surface verbatim or an opaque HTTP failure.
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/json"))
            .unwrap_or(false);

        let bytes = response.bytes().await?;

        if is_json {
            if let Ok(value) = serde_json::from_slice::<Value>(&bytes) {
                return Err(ChainrpcError::Rpc(value));
            }
        }

        Err(ChainrpcError::HttpStatus(status.as_u16()))
    }
}

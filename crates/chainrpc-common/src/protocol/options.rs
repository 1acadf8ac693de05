use std::fmt;
use std::time::Duration;

/// Port used by a chaind daemon that has no `default-rpc-port` override.
pub const DEFAULT_RPC_PORT: u16 = 8570;

/// Transport scheme for the HTTP exchange.
///
/// Plain HTTP is the default; only an explicit `https` selects the
/// encrypted scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl Protocol {
    /// Map a scheme string onto a protocol. Anything other than an explicit
    /// `https` (case-insensitive) is plain HTTP.
    pub fn from_scheme(scheme: &str) -> Self {
        if scheme.eq_ignore_ascii_case("https") {
            Protocol::Https
        } else {
            Protocol::Http
        }
    }

    pub fn scheme(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

/// Connection configuration for one daemon endpoint.
///
/// Owned by a single client and mutated only through explicit
/// reconfiguration; the transport receives a by-value snapshot for each
/// exchange, so an in-flight call never observes a half-applied change.
///
/// # Example
///
/// ```
/// use chainrpc_common::protocol::{ConnectOptions, Protocol};
///
/// let options = ConnectOptions::new("10.0.0.5", 9570)
///     .with_auth("rpcuser", "rpcpass")
///     .with_protocol(Protocol::Https);
///
/// assert_eq!(options.url(), "https://10.0.0.5:9570/");
/// assert!(options.has_auth());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectOptions {
    pub protocol: Protocol,
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub pass: Option<String>,
    /// Optional per-request timeout enforced by the transport. The core
    /// itself imposes none.
    pub timeout: Option<Duration>,
}

impl ConnectOptions {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        ConnectOptions {
            protocol: Protocol::default(),
            host: host.into(),
            port,
            user: None,
            pass: None,
            timeout: None,
        }
    }

    pub fn with_auth(mut self, user: impl Into<String>, pass: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.pass = Some(pass.into());
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Endpoint URL for the POST exchange.
    pub fn url(&self) -> String {
        format!("{}://{}:{}/", self.protocol.scheme(), self.host, self.port)
    }

    /// Basic auth is sent only when both credentials are present.
    pub fn has_auth(&self) -> bool {
        self.user.is_some() && self.pass.is_some()
    }
}

impl Default for ConnectOptions {
    fn default() -> Self {
        ConnectOptions::new("127.0.0.1", DEFAULT_RPC_PORT)
    }
}

impl fmt::Display for ConnectOptions {
    /// Displays the endpoint with the password masked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user {
            Some(user) => write!(
                f,
                "{}://{}:*****@{}:{}",
                self.protocol.scheme(),
                user,
                self.host,
                self.port
            ),
            None => write!(
                f,
                "{}://{}:{}",
                self.protocol.scheme(),
                self.host,
                self.port
            ),
        }
    }
}

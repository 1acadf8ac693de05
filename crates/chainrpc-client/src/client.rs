//! The RPC client and its bound per-method invokers.

use serde_json::Value;

use chainrpc_common::protocol::{ChainrpcError, ConnectOptions, Result};
use chainrpc_common::transport::HttpTransport;

use crate::casing::MethodCasing;
use crate::resolver::InstanceResolver;
use crate::schema::{self, CommandSchema};

/// Client operation names a command schema key must not shadow.
const RESERVED_NAMES: &[&str] = &[
    "call",
    "command",
    "commands",
    "set_commands",
    "options",
    "set_options",
    "casing",
    "set_casing",
    "connect_instance",
];

/// JSON-RPC client for one chaind endpoint.
///
/// Owns the connection configuration, the command schema, and the casing
/// policy (lowercase by default). [`RpcClient::call`] is the sole path to
/// the network; [`BoundCommand`] handles obtained from [`RpcClient::command`]
/// forward to it.
///
/// Concurrent calls from one client are independent: each builds its own
/// request envelope, and the connection options are snapshotted by value at
/// the start of every call. Reconfiguration takes `&mut self`, so it cannot
/// overlap an outstanding `&self` call.
///
/// # Example
///
/// ```no_run
/// use chainrpc_client::{chaind_commands, ConnectOptions, RpcClient};
///
/// # async fn run() -> chainrpc_client::Result<()> {
/// let options = ConnectOptions::new("127.0.0.1", 8570).with_auth("u", "p");
/// let client = RpcClient::with_commands(options, chaind_commands())?;
///
/// // Generic entry point; omitted params take their schema defaults.
/// let balance = client.call("getbalance", &[]).await?;
///
/// // Bound invoker for a schema method.
/// let info = client.command("getinfo").unwrap().invoke(&[]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RpcClient {
    transport: HttpTransport,
    options: ConnectOptions,
    schema: CommandSchema,
    casing: MethodCasing,
}

impl RpcClient {
    /// Create a client with an empty command schema.
    pub fn new(options: ConnectOptions) -> Self {
        RpcClient {
            transport: HttpTransport::new(),
            options,
            schema: CommandSchema::new(),
            casing: MethodCasing::default(),
        }
    }

    /// Create a client with a command schema installed.
    pub fn with_commands(options: ConnectOptions, schema: CommandSchema) -> Result<Self> {
        let mut client = Self::new(options);
        client.set_commands(schema)?;
        Ok(client)
    }

    /// Point this client at the named instance resolved through `resolver`.
    ///
    /// Reconfiguration is an explicit, fallible operation: on any resolver
    /// failure the previous configuration stays in place untouched.
    pub fn connect_instance(&mut self, resolver: &InstanceResolver, name: &str) -> Result<()> {
        let options = resolver.resolve(name)?;
        tracing::info!(instance = name, endpoint = %options, "client reconfigured");
        self.options = options;
        Ok(())
    }

    pub fn options(&self) -> &ConnectOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ConnectOptions) {
        self.options = options;
    }

    pub fn casing(&self) -> MethodCasing {
        self.casing
    }

    pub fn set_casing(&mut self, casing: MethodCasing) {
        self.casing = casing;
    }

    pub fn commands(&self) -> &CommandSchema {
        &self.schema
    }

    /// Install a new command schema, replacing the old one atomically.
    ///
    /// Every key is validated against the client's reserved operation names
    /// first; on a collision the schema is rejected with
    /// [`ChainrpcError::ReservedMethodName`] and the previous schema (and
    /// its bindings) stays in effect. Keys present in both the old and new
    /// schema re-bind idempotently; removed keys stop resolving through
    /// [`RpcClient::command`].
    pub fn set_commands(&mut self, schema: CommandSchema) -> Result<()> {
        for name in schema.keys() {
            if RESERVED_NAMES.contains(&name.as_str()) {
                return Err(ChainrpcError::ReservedMethodName(name.clone()));
            }
        }
        self.schema = schema;
        Ok(())
    }

    /// Look up the bound invoker for a schema method.
    ///
    /// Bindings are always 1:1 with the current schema's keys: a name
    /// absent from the schema has no invoker.
    pub fn command(&self, name: &str) -> Option<BoundCommand<'_>> {
        if self.schema.contains_key(name) {
            Some(BoundCommand {
                client: self,
                name: name.to_string(),
            })
        } else {
            None
        }
    }

    /// Call a remote method. The sole path to the network.
    ///
    /// Methods present in the schema get their params validated and
    /// defaulted; the schema is advisory, so unknown methods pass their
    /// params through unchanged. The casing policy is applied to the method
    /// name last, just before dispatch.
    pub async fn call(&self, method: &str, params: &[Value]) -> Result<Value> {
        let resolved = match self.schema.get(method) {
            Some(specs) => schema::resolve_params(method, specs, params)?,
            None => params.to_vec(),
        };

        let wire_method = self.casing.apply(method);

        // Options are captured by value for the duration of the exchange.
        let options = self.options.clone();
        self.transport.send(&wire_method, resolved, &options).await
    }
}

/// Invoker bound to one schema method of a client.
///
/// Obtained through [`RpcClient::command`]; forwards its call-time params
/// to [`RpcClient::call`] under the bound name.
#[derive(Debug)]
pub struct BoundCommand<'a> {
    client: &'a RpcClient,
    name: String,
}

impl BoundCommand<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn invoke(&self, params: &[Value]) -> Result<Value> {
        self.client.call(&self.name, params).await
    }
}

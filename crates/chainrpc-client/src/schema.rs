//! Command schema types and parameter resolution.
//!
//! A command schema is a data-driven table mapping method names to ordered
//! parameter descriptors. It is client-side configuration only: the schema
//! drives validation and default substitution, but the transport never
//! enforces it, and methods absent from the schema can still be called.
//!
//! # Descriptor Grammar
//!
//! In the external JSON table form, each descriptor is either:
//! - any non-object value, marking the position as required, or
//! - a single-entry object `{"display-name": <default>}`, supplying the
//!   default substituted when the caller leaves the position absent.
//!
//! ```
//! use chainrpc_client::schema::{CommandSchema, ParamSpec};
//!
//! let table: CommandSchema = serde_json::from_str(r#"{
//!     "getblock":   ["hash", {"verbose": true}],
//!     "getbalance": [{"account": "*"}, {"minconf": 1}]
//! }"#).unwrap();
//!
//! assert_eq!(table["getblock"][0], ParamSpec::Required);
//! ```

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use chainrpc_common::protocol::{ChainrpcError, Result};

/// One parameter position of a remote method.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamSpec {
    /// The caller must supply this position.
    Required,
    /// Substituted when the caller leaves the position absent. `name` is
    /// the default's display name in the external table form.
    Default { name: String, value: Value },
}

impl ParamSpec {
    pub fn required() -> Self {
        ParamSpec::Required
    }

    pub fn with_default(name: impl Into<String>, value: Value) -> Self {
        ParamSpec::Default {
            name: name.into(),
            value,
        }
    }
}

impl<'de> Deserialize<'de> for ParamSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Object(map) => {
                let mut entries = map.into_iter();
                match (entries.next(), entries.next()) {
                    (Some((name, value)), None) => Ok(ParamSpec::Default { name, value }),
                    _ => Err(de::Error::custom(
                        "default descriptor must be a single-entry object",
                    )),
                }
            }
            _ => Ok(ParamSpec::Required),
        }
    }
}

impl Serialize for ParamSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ParamSpec::Required => serializer.serialize_unit(),
            ParamSpec::Default { name, value } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, value)?;
                map.end()
            }
        }
    }
}

/// Mapping from method name to its ordered parameter descriptors.
pub type CommandSchema = BTreeMap<String, Vec<ParamSpec>>;

/// Truthiness presence test, kept for compatibility with existing callers:
/// `null`, `false`, `0` and `""` all count as absent, so a schema default
/// overrides them even when the caller meant the falsy value. Callers that
/// need a literal falsy argument must target a required position.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Resolve caller params against one schema entry.
///
/// The result always holds exactly `specs.len()` positions: defaults fill
/// absent positions and extra caller positions are dropped. A required
/// position with no present caller value fails with
/// [`ChainrpcError::MissingParameter`] before any I/O happens.
pub fn resolve_params(method: &str, specs: &[ParamSpec], supplied: &[Value]) -> Result<Vec<Value>> {
    let mut resolved = Vec::with_capacity(specs.len());

    for (position, spec) in specs.iter().enumerate() {
        let given = supplied.get(position).filter(|value| is_present(value));

        match (spec, given) {
            (_, Some(value)) => resolved.push(value.clone()),
            (ParamSpec::Default { value, .. }, None) => resolved.push(value.clone()),
            (ParamSpec::Required, None) => {
                return Err(ChainrpcError::MissingParameter {
                    method: method.to_string(),
                    position,
                });
            }
        }
    }

    Ok(resolved)
}

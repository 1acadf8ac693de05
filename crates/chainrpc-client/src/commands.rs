//! Built-in chaind command table.
//!
//! Data-driven description of the daemon's RPC surface: each entry maps a
//! method name to its ordered parameter descriptors, with the defaults the
//! daemon documents. The client only consumes this table; installing a
//! custom one via [`RpcClient::set_commands`](crate::RpcClient::set_commands)
//! works the same way.

use serde_json::json;

use crate::schema::{CommandSchema, ParamSpec};

/// The daemon's standard command table.
pub fn chaind_commands() -> CommandSchema {
    let mut table = CommandSchema::new();

    // Chain state
    table.insert("getinfo".into(), vec![]);
    table.insert("getblockcount".into(), vec![]);
    table.insert("getbestblockhash".into(), vec![]);
    table.insert("getdifficulty".into(), vec![]);
    table.insert("getblockhash".into(), vec![ParamSpec::required()]);
    table.insert(
        "getblock".into(),
        vec![
            ParamSpec::required(),
            ParamSpec::with_default("verbose", json!(true)),
        ],
    );
    table.insert(
        "getrawtransaction".into(),
        vec![
            ParamSpec::required(),
            ParamSpec::with_default("verbose", json!(0)),
        ],
    );
    table.insert("sendrawtransaction".into(), vec![ParamSpec::required()]);

    // Wallet
    table.insert(
        "getnewaddress".into(),
        vec![ParamSpec::with_default("account", json!(""))],
    );
    table.insert(
        "getbalance".into(),
        vec![
            ParamSpec::with_default("account", json!("*")),
            ParamSpec::with_default("minconf", json!(1)),
        ],
    );
    table.insert(
        "listtransactions".into(),
        vec![
            ParamSpec::with_default("account", json!("*")),
            ParamSpec::with_default("count", json!(10)),
            ParamSpec::with_default("from", json!(0)),
        ],
    );
    table.insert(
        "listunspent".into(),
        vec![
            ParamSpec::with_default("minconf", json!(1)),
            ParamSpec::with_default("maxconf", json!(999999)),
        ],
    );
    table.insert(
        "sendtoaddress".into(),
        vec![
            ParamSpec::required(),
            ParamSpec::required(),
            ParamSpec::with_default("comment", json!("")),
            ParamSpec::with_default("comment-to", json!("")),
        ],
    );
    table.insert(
        "sendfrom".into(),
        vec![
            ParamSpec::required(),
            ParamSpec::required(),
            ParamSpec::required(),
            ParamSpec::with_default("minconf", json!(1)),
            ParamSpec::with_default("comment", json!("")),
        ],
    );
    table.insert("gettransaction".into(), vec![ParamSpec::required()]);
    table.insert("validateaddress".into(), vec![ParamSpec::required()]);
    table.insert(
        "signmessage".into(),
        vec![ParamSpec::required(), ParamSpec::required()],
    );
    table.insert(
        "verifymessage".into(),
        vec![
            ParamSpec::required(),
            ParamSpec::required(),
            ParamSpec::required(),
        ],
    );
    table.insert(
        "importprivkey".into(),
        vec![
            ParamSpec::required(),
            ParamSpec::with_default("label", json!("")),
            ParamSpec::with_default("rescan", json!(true)),
        ],
    );
    table.insert("dumpprivkey".into(), vec![ParamSpec::required()]);
    table.insert(
        "walletpassphrase".into(),
        vec![ParamSpec::required(), ParamSpec::required()],
    );
    table.insert("walletlock".into(), vec![]);
    table.insert("backupwallet".into(), vec![ParamSpec::required()]);
    table.insert("encryptwallet".into(), vec![ParamSpec::required()]);

    // Network
    table.insert("getpeerinfo".into(), vec![]);
    table.insert("getconnectioncount".into(), vec![]);
    table.insert("getnetworkinfo".into(), vec![]);
    table.insert("getmininginfo".into(), vec![]);

    // Control
    table.insert(
        "help".into(),
        vec![ParamSpec::with_default("command", json!(""))],
    );
    table.insert("stop".into(), vec![]);

    table
}

//! Instance Resolver Integration Tests
//!
//! Exercises instance discovery and config-file parsing against real
//! directories built with `tempfile`.

use std::fs;
use std::path::Path;

use chainrpc_client::resolver::{default_base_dir, InstanceResolver, HOME_ENV};
use chainrpc_common::protocol::ChainrpcError;

fn make_instance(base: &Path, name: &str, user: &str, pass: &str, port: u16) {
    let dir = base.join(name);
    fs::create_dir(&dir).unwrap();
    fs::write(
        dir.join("chaind.conf"),
        format!("rpcuser={user}\nrpcpassword={pass}\n"),
    )
    .unwrap();
    fs::write(
        dir.join("params.dat"),
        format!("chain-protocol=main\ndefault-rpc-port={port}  # rpc\n"),
    )
    .unwrap();
}

#[test]
fn test_instances_lists_subdirectories_sorted() {
    let base = tempfile::tempdir().unwrap();
    make_instance(base.path(), "testnet", "u", "p", 7571);
    make_instance(base.path(), "mainnet", "u", "p", 7570);

    let resolver = InstanceResolver::new(base.path());
    assert_eq!(resolver.instances().unwrap(), vec!["mainnet", "testnet"]);
}

#[test]
fn test_instances_excludes_hidden_files_and_daemon_dir() {
    let base = tempfile::tempdir().unwrap();
    make_instance(base.path(), "mainnet", "u", "p", 7570);

    // Hidden entry, the reserved daemon dir, and a plain file: all skipped.
    fs::create_dir(base.path().join(".cache")).unwrap();
    fs::create_dir(base.path().join("chaind")).unwrap();
    fs::write(base.path().join("chaind.log"), "log line\n").unwrap();

    let resolver = InstanceResolver::new(base.path());
    assert_eq!(resolver.instances().unwrap(), vec!["mainnet"]);
}

#[test]
fn test_resolve_populates_options_fully() {
    let base = tempfile::tempdir().unwrap();
    make_instance(base.path(), "mainnet", "alice", "s3cret", 9570);

    let resolver = InstanceResolver::new(base.path());
    let options = resolver.resolve("mainnet").unwrap();

    assert_eq!(options.host, "127.0.0.1");
    assert_eq!(options.port, 9570);
    assert_eq!(options.user.as_deref(), Some("alice"));
    assert_eq!(options.pass.as_deref(), Some("s3cret"));
    assert!(options.has_auth());
}

#[test]
fn test_resolve_unknown_instance_fails_before_reading_files() {
    let base = tempfile::tempdir().unwrap();
    // "empty" is listed but carries no config files: resolving IT would be
    // an IO error, while resolving an unknown name must fail on the name
    // alone without ever opening a file.
    fs::create_dir(base.path().join("empty")).unwrap();

    let resolver = InstanceResolver::new(base.path());

    let err = resolver.resolve("ghost").unwrap_err();
    assert!(matches!(err, ChainrpcError::InvalidInstance(name) if name == "ghost"));

    let err = resolver.resolve("empty").unwrap_err();
    assert!(matches!(err, ChainrpcError::Io(_)));
}

#[test]
fn test_resolve_missing_port_entry_is_config_error() {
    let base = tempfile::tempdir().unwrap();
    let dir = base.path().join("mainnet");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("chaind.conf"), "rpcuser=u\nrpcpassword=p\n").unwrap();
    fs::write(dir.join("params.dat"), "chain-protocol=main\n").unwrap();

    let resolver = InstanceResolver::new(base.path());
    let err = resolver.resolve("mainnet").unwrap_err();
    assert!(matches!(err, ChainrpcError::Config(_)));
}

#[test]
fn test_missing_base_dir_is_io_error() {
    let base = tempfile::tempdir().unwrap();
    let resolver = InstanceResolver::new(base.path().join("does-not-exist"));
    assert!(matches!(
        resolver.instances().unwrap_err(),
        ChainrpcError::Io(_)
    ));
}

#[test]
fn test_default_base_dir_honors_env_override() {
    std::env::set_var(HOME_ENV, "/tmp/chaind-test-home");
    assert_eq!(
        default_base_dir(),
        std::path::PathBuf::from("/tmp/chaind-test-home")
    );
    std::env::remove_var(HOME_ENV);

    // Without the override the platform convention applies.
    let fallback = default_base_dir();
    assert!(!fallback.as_os_str().is_empty());
}

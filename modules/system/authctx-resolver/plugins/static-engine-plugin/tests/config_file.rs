#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;

use authctx_resolver::AuthCtxResolverConfig;
use authctx_resolver_sdk::{AuthCtxResolverError, ContextFlags, ValueKind};
use static_engine_plugin::{Service, StaticEnginePluginConfig};

const ENGINE_YAML: &str = r"
context:
  username: alice
  uid: 501
  authentication_authority:
    kind: Kerberosv5
    realm: EXAMPLE.COM
hints:
  suggested_user: alice
";

#[test]
fn loads_yaml_file_and_resolves() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("create temp config");
    file.write_all(ENGINE_YAML.as_bytes()).unwrap();

    let cfg = StaticEnginePluginConfig::load(file.path()).expect("config loads");
    let resolver = Service::from_config(&cfg).into_resolver(&AuthCtxResolverConfig::default());

    let username = resolver.resolve_context("username").unwrap();
    assert_eq!(username.value.payload(), b"alice");
    assert_eq!(username.flags, ContextFlags::EXTRACTABLE);

    let authority = resolver.resolve_context("authenticationAuthority").unwrap();
    assert_eq!(authority.value.kind(), ValueKind::Record);

    let err: AuthCtxResolverError = resolver.resolve_context("password").unwrap_err().into();
    assert!(matches!(err, AuthCtxResolverError::ValueUnavailable { .. }));
}

#[test]
fn missing_file_is_empty_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = StaticEnginePluginConfig::load(&dir.path().join("absent.yaml")).unwrap();

    assert!(cfg.context.username.is_none());
    assert!(cfg.hints.suggested_user.is_none());
}

#[test]
fn malformed_file_reports_path() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(b"context:\n  uid: not-a-number\n").unwrap();

    let err = StaticEnginePluginConfig::load(file.path()).expect_err("uid must be numeric");
    let message = format!("{err:#}");
    assert!(
        message.contains(&file.path().display().to_string()),
        "expected path in error, got: {message}"
    );
}

//! Service implementation for the static engine plugin.

use authctx_core::ResolverState;
use authctx_resolver::AuthCtxResolverConfig;
use tracing::info;

use crate::config::StaticEnginePluginConfig;

/// Static session driver.
///
/// Holds the resolver state built from configuration until it is frozen
/// into a resolver with [`Service::into_resolver`].
pub struct Service {
    state: ResolverState,
}

impl Service {
    /// Populate resolver state from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticEnginePluginConfig) -> Self {
        let ctx = &cfg.context;
        let hints = &cfg.hints;
        let mut builder = ResolverState::builder();

        if let Some(username) = &ctx.username {
            builder = builder.username(username.clone());
        }
        if let Some(password) = &ctx.password {
            builder = builder.password(password.clone());
        }
        if let Some(authority) = &ctx.authentication_authority {
            builder = builder.authentication_authority(authority.clone());
        }
        if let Some(uid) = ctx.uid {
            builder = builder.uid(uid);
        }
        if let Some(gid) = ctx.gid {
            builder = builder.gid(gid);
        }

        if let Some(token_name) = &hints.token_name {
            builder = builder.token_name(token_name.clone());
        }
        if let Some(right) = &hints.authorize_right {
            builder = builder.authorize_right(right.clone());
        }
        if let Some(user) = &hints.suggested_user {
            builder = builder.suggested_user(user.clone());
        }
        if let Some(path) = &hints.client_path {
            builder = builder.client_path(path.clone());
        }

        let state = builder.build();
        info!(
            username = state.username().is_some(),
            password = state.password().is_some(),
            uid = state.uid().is_some(),
            suggested_user = state.suggested_user().is_some(),
            "Static engine state populated"
        );

        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> &ResolverState {
        &self.state
    }

    /// End the population phase and hand the state to a resolver.
    #[must_use]
    pub fn into_resolver(self, cfg: &AuthCtxResolverConfig) -> authctx_resolver::Service {
        authctx_resolver::Service::new(self.state, cfg)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use authctx_core::{Record, Value, unmarshal};
    use secrecy::ExposeSecret;

    use super::*;

    fn config(yaml: &str) -> StaticEnginePluginConfig {
        StaticEnginePluginConfig::from_yaml_str(yaml).unwrap()
    }

    #[test]
    fn default_config_yields_empty_state() {
        let service = Service::from_config(&StaticEnginePluginConfig::default());
        let state = service.state();

        assert!(state.username().is_none());
        assert!(state.password().is_none());
        assert!(state.authentication_authority().is_none());
        assert!(state.uid().is_none());
        assert!(state.gid().is_none());
        assert!(state.token_name().is_none());
        assert!(state.authorize_right().is_none());
        assert!(state.suggested_user().is_none());
        assert!(state.client_path().is_none());
    }

    #[test]
    fn configured_values_are_copied() {
        let service = Service::from_config(&config(
            r"
context:
  username: alice
  password: pw
  uid: 501
  gid: 20
  authentication_authority:
    kind: LocalCachedUser
hints:
  token_name: pivtoken
  authorize_right: authenticate
  suggested_user: alice
  client_path: /usr/bin/sudo
",
        ));
        let state = service.state();

        assert_eq!(state.username(), Some("alice"));
        assert_eq!(
            state.password().map(ExposeSecret::expose_secret),
            Some("pw")
        );
        assert_eq!(state.uid(), Some(501));
        assert_eq!(state.gid(), Some(20));
        assert_eq!(
            state.authentication_authority(),
            Some(&Record::new().with("kind", "LocalCachedUser"))
        );
        assert_eq!(state.token_name(), Some("pivtoken"));
        assert_eq!(state.authorize_right(), Some("authenticate"));
        assert_eq!(state.suggested_user(), Some("alice"));
        assert_eq!(state.client_path(), Some("/usr/bin/sudo"));
    }

    #[test]
    fn into_resolver_serves_configured_values() {
        let resolver = Service::from_config(&config("context:\n  uid: 0\n"))
            .into_resolver(&AuthCtxResolverConfig::default());

        let found = resolver.resolve_context("uid").unwrap();
        assert_eq!(unmarshal(&found.value).unwrap(), Value::Numeric(0));
        assert!(resolver.resolve_context("gid").is_err());
    }
}

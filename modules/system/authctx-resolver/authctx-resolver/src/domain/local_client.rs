//! Local (in-process) client for the `AuthCtx` resolver.

use std::sync::Arc;

use authctx_core::TypedValue;
use authctx_resolver_sdk::{AuthCtxResolverClient, AuthCtxResolverError, ContextValue};

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Handed to mechanism code once the session driver has populated the state.
pub struct AuthCtxResolverLocalClient {
    svc: Arc<Service>,
}

impl AuthCtxResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> AuthCtxResolverError {
    match &e {
        DomainError::Marshal { .. } => {
            tracing::error!(operation = op, error = %e, "authctx_resolver call failed");
        }
        DomainError::UnknownKey { .. } | DomainError::ValueUnavailable { .. } => {
            tracing::debug!(operation = op, error = %e, "authctx_resolver lookup missed");
        }
    }
    e.into()
}

impl AuthCtxResolverClient for AuthCtxResolverLocalClient {
    fn context_value(&self, key: &str) -> Result<ContextValue, AuthCtxResolverError> {
        self.svc
            .resolve_context(key)
            .map_err(|e| log_and_convert("context_value", e))
    }

    fn hint_value(&self, key: &str) -> Result<TypedValue, AuthCtxResolverError> {
        self.svc
            .resolve_hint(key)
            .map_err(|e| log_and_convert("hint_value", e))
    }
}

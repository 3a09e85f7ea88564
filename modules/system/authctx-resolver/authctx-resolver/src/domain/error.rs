//! Domain errors for the `AuthCtx` resolver.

use authctx_core::MarshalError;
use authctx_resolver_sdk::{AuthCtxResolverError, Namespace};

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("unknown {namespace} key '{key}'")]
    UnknownKey { namespace: Namespace, key: String },

    #[error("no value available for '{key}'")]
    ValueUnavailable { key: &'static str },

    #[error("failed to marshal '{key}': {source}")]
    Marshal {
        key: &'static str,
        #[source]
        source: MarshalError,
    },
}

impl From<DomainError> for AuthCtxResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UnknownKey { namespace, key } => Self::UnknownKey { namespace, key },
            DomainError::ValueUnavailable { key } => Self::ValueUnavailable {
                key: key.to_owned(),
            },
            DomainError::Marshal { key, source } => Self::MarshalFailure {
                key: key.to_owned(),
                reason: source.to_string(),
            },
        }
    }
}

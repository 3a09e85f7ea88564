//! Error types for the `AuthCtx` resolver module.

use thiserror::Error;

use crate::keys::Namespace;

/// Errors that can occur when looking up context or hint values.
#[derive(Debug, Error)]
pub enum AuthCtxResolverError {
    /// The key does not name any field in the target namespace.
    #[error("unknown {namespace} key '{key}'")]
    UnknownKey { namespace: Namespace, key: String },

    /// The key is valid but the field was not populated for this attempt.
    #[error("no value available for '{key}'")]
    ValueUnavailable { key: String },

    /// The field's value could not be encoded. Fatal to the current attempt.
    #[error("failed to marshal '{key}': {reason}")]
    MarshalFailure { key: String, reason: String },
}

impl AuthCtxResolverError {
    /// Whether the current authentication attempt must be aborted.
    ///
    /// `UnknownKey` and `ValueUnavailable` are ordinary outcomes callers
    /// branch on; only `MarshalFailure` is fatal.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MarshalFailure { .. })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn only_marshal_failure_is_fatal() {
        let unknown = AuthCtxResolverError::UnknownKey {
            namespace: Namespace::Hint,
            key: "username".to_owned(),
        };
        let unavailable = AuthCtxResolverError::ValueUnavailable {
            key: "password".to_owned(),
        };
        let marshal = AuthCtxResolverError::MarshalFailure {
            key: "authenticationAuthority".to_owned(),
            reason: "record nesting exceeds depth limit 8".to_owned(),
        };

        assert!(!unknown.is_fatal());
        assert!(!unavailable.is_fatal());
        assert!(marshal.is_fatal());
    }

    #[test]
    fn messages_name_key_and_namespace() {
        let err = AuthCtxResolverError::UnknownKey {
            namespace: Namespace::Context,
            key: "tokenName".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown context key 'tokenName'");
    }
}

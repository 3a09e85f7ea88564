//! Domain service for the `AuthCtx` resolver.

use authctx_core::{ResolverState, TypedValue, ValueRef, marshal_with_depth};
use authctx_resolver_sdk::{ContextValue, Namespace};
use tracing::debug;

use super::error::DomainError;
use super::table;
use crate::config::AuthCtxResolverConfig;

/// `AuthCtx` resolver service.
///
/// Owns a populated [`ResolverState`] and answers lookups against it. The
/// state cannot change after construction, so a `Service` can be shared
/// between any number of concurrent readers.
pub struct Service {
    state: ResolverState,
    max_record_depth: usize,
}

impl Service {
    #[must_use]
    pub fn new(state: ResolverState, cfg: &AuthCtxResolverConfig) -> Self {
        Self {
            state,
            max_record_depth: cfg.max_record_depth,
        }
    }

    /// Depth limit applied when marshaling records.
    ///
    /// Pass it to `unmarshal_with_depth` to decode record values produced by
    /// this service.
    #[must_use]
    pub fn max_record_depth(&self) -> usize {
        self.max_record_depth
    }

    /// Resolve a context key to its value and static flags.
    ///
    /// # Errors
    ///
    /// - `UnknownKey` if no context field is named `key`
    /// - `ValueUnavailable` if the field is unset
    /// - `Marshal` if the value cannot be encoded
    #[tracing::instrument(skip_all, fields(key = %key))]
    pub fn resolve_context(&self, key: &str) -> Result<ContextValue, DomainError> {
        let field = table::context_field(key).ok_or_else(|| DomainError::UnknownKey {
            namespace: Namespace::Context,
            key: key.to_owned(),
        })?;
        let name = field.key.as_str();

        let current =
            (field.read)(&self.state).ok_or(DomainError::ValueUnavailable { key: name })?;
        let value = self.marshal(name, current)?;

        if field.sensitive {
            debug!(kind = %value.kind(), "Resolved sensitive context value");
        } else {
            debug!(
                kind = %value.kind(),
                len = value.len(),
                flags = field.flags.bits(),
                "Resolved context value"
            );
        }

        Ok(ContextValue {
            flags: field.flags,
            value,
        })
    }

    /// Resolve a hint key to its value.
    ///
    /// # Errors
    ///
    /// - `UnknownKey` if no hint field is named `key`
    /// - `ValueUnavailable` if the field is unset
    /// - `Marshal` if the value cannot be encoded
    #[tracing::instrument(skip_all, fields(key = %key))]
    pub fn resolve_hint(&self, key: &str) -> Result<TypedValue, DomainError> {
        let field = table::hint_field(key).ok_or_else(|| DomainError::UnknownKey {
            namespace: Namespace::Hint,
            key: key.to_owned(),
        })?;
        let name = field.key.as_str();

        let current =
            (field.read)(&self.state).ok_or(DomainError::ValueUnavailable { key: name })?;
        let value = self.marshal(name, current)?;

        debug!(kind = %value.kind(), len = value.len(), "Resolved hint value");
        Ok(value)
    }

    fn marshal(&self, key: &'static str, value: ValueRef<'_>) -> Result<TypedValue, DomainError> {
        marshal_with_depth(value, self.max_record_depth)
            .map_err(|source| DomainError::Marshal { key, source })
    }
}

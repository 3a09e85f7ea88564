//! Public API trait for the `AuthCtx` resolver.
//!
//! Mechanism code uses this trait to read the context and hint values of
//! the current authentication attempt.

use authctx_core::TypedValue;

use crate::error::AuthCtxResolverError;
use crate::models::ContextValue;

/// Public API trait for the `AuthCtx` resolver.
///
/// Lookups are synchronous and read-only. Implementations are shared across
/// threads once the session driver has finished populating them.
///
/// ```ignore
/// let found = client.context_value("uid")?;
/// assert_eq!(found.value.kind(), ValueKind::Numeric);
/// ```
pub trait AuthCtxResolverClient: Send + Sync {
    /// Look up a context value and its flags.
    ///
    /// # Errors
    ///
    /// - `UnknownKey` if `key` is not a context key
    /// - `ValueUnavailable` if the field has not been populated
    /// - `MarshalFailure` if the value could not be encoded
    fn context_value(&self, key: &str) -> Result<ContextValue, AuthCtxResolverError>;

    /// Look up a hint value. Hints never carry flags.
    ///
    /// # Errors
    ///
    /// - `UnknownKey` if `key` is not a hint key
    /// - `ValueUnavailable` if the field has not been populated
    /// - `MarshalFailure` if the value could not be encoded
    fn hint_value(&self, key: &str) -> Result<TypedValue, AuthCtxResolverError>;
}

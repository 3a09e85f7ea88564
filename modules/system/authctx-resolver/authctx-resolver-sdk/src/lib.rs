//! `AuthCtx` Resolver SDK
//!
//! This crate provides the public API for the `authctx_resolver` module:
//!
//! - [`AuthCtxResolverClient`] - Lookup API trait for mechanism code
//! - [`ContextKey`] / [`HintKey`] - The closed key namespaces
//! - [`ContextValue`] - Context lookup result (flags plus value)
//! - [`AuthCtxResolverError`] - Error taxonomy
//!
//! ## Usage
//!
//! ```ignore
//! use authctx_resolver_sdk::{AuthCtxResolverClient, AuthCtxResolverError, ContextKey};
//!
//! match client.context_value(ContextKey::Password.as_str()) {
//!     Ok(found) => use_password(found.value),
//!     Err(AuthCtxResolverError::ValueUnavailable { .. }) => prompt_for_password(),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

pub mod api;
pub mod error;
pub mod keys;
pub mod models;

// Re-export main types at crate root
pub use api::AuthCtxResolverClient;
pub use authctx_core::{ContextFlags, TypedValue, ValueKind};
pub use error::AuthCtxResolverError;
pub use keys::{ContextKey, HintKey, Namespace};
pub use models::ContextValue;

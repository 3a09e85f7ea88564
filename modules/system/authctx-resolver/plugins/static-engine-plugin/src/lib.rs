//! Static session driver for the `AuthCtx` resolver.
//!
//! Populates a [`authctx_core::ResolverState`] from configuration so the
//! resolver can be exercised without a privileged session. Intended for
//! development and testing.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::StaticEnginePluginConfig;
pub use domain::Service;

//! `AuthCtx` Resolver Module
//!
//! Resolves the context and hint keys of an authentication attempt to
//! typed values through a fixed dispatch table.
//!
//! Provides the `AuthCtxResolverClient` implementation consumed by
//! mechanism code.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::AuthCtxResolverConfig;
pub use domain::{AuthCtxResolverLocalClient, DomainError, Service};

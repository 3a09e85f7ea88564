//! Configuration for the `AuthCtx` resolver.

use authctx_core::DEFAULT_MAX_RECORD_DEPTH;
use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthCtxResolverConfig {
    /// Deepest record nesting the resolver will marshal.
    ///
    /// Values nested deeper fail with a marshal failure instead of being
    /// truncated.
    pub max_record_depth: usize,
}

impl Default for AuthCtxResolverConfig {
    fn default() -> Self {
        Self {
            max_record_depth: DEFAULT_MAX_RECORD_DEPTH,
        }
    }
}

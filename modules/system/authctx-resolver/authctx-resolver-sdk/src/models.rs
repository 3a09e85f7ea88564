//! Domain models for the `AuthCtx` resolver module.

use authctx_core::{ContextFlags, TypedValue};

/// Result of a successful context lookup.
///
/// `flags` are a static property of the field that produced `value`; they
/// do not depend on what the value contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextValue {
    pub flags: ContextFlags,
    pub value: TypedValue,
}

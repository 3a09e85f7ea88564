#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod codec;
pub mod flags;
pub mod state;
pub mod value;

pub use codec::{
    DEFAULT_MAX_RECORD_DEPTH, MarshalError, UnmarshalError, marshal, marshal_with_depth, unmarshal,
    unmarshal_with_depth,
};
pub use flags::ContextFlags;
pub use state::{ResolverState, ResolverStateBuilder};
pub use value::{Record, TypedValue, Value, ValueKind, ValueRef};

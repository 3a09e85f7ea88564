//! Key-to-field dispatch tables.
//!
//! Each declared key has exactly one entry. Flags and sensitivity are
//! properties of the entry, never derived from the key string or the value.

use authctx_core::{ContextFlags, ResolverState, ValueRef};
use authctx_resolver_sdk::{ContextKey, HintKey};
use secrecy::ExposeSecret;

/// Reads a field's current value, `None` when unset.
pub type FieldAccessor = for<'a> fn(&'a ResolverState) -> Option<ValueRef<'a>>;

pub struct ContextField {
    pub key: ContextKey,
    pub flags: ContextFlags,
    /// Never log the value's size or content.
    pub sensitive: bool,
    pub read: FieldAccessor,
}

pub struct HintField {
    pub key: HintKey,
    pub read: FieldAccessor,
}

const TRUSTED_ID: ContextFlags = ContextFlags::EXTRACTABLE.union(ContextFlags::STICKY);

pub static CONTEXT_FIELDS: [ContextField; 5] = [
    ContextField {
        key: ContextKey::Username,
        flags: ContextFlags::EXTRACTABLE,
        sensitive: false,
        read: read_username,
    },
    ContextField {
        key: ContextKey::Password,
        flags: ContextFlags::VOLATILE,
        sensitive: true,
        read: read_password,
    },
    ContextField {
        key: ContextKey::AuthenticationAuthority,
        flags: ContextFlags::EXTRACTABLE,
        sensitive: false,
        read: read_authentication_authority,
    },
    ContextField {
        key: ContextKey::Uid,
        flags: TRUSTED_ID,
        sensitive: false,
        read: read_uid,
    },
    ContextField {
        key: ContextKey::Gid,
        flags: TRUSTED_ID,
        sensitive: false,
        read: read_gid,
    },
];

pub static HINT_FIELDS: [HintField; 4] = [
    HintField {
        key: HintKey::TokenName,
        read: read_token_name,
    },
    HintField {
        key: HintKey::AuthorizeRight,
        read: read_authorize_right,
    },
    HintField {
        key: HintKey::SuggestedUser,
        read: read_suggested_user,
    },
    HintField {
        key: HintKey::ClientPath,
        read: read_client_path,
    },
];

/// Find the context entry whose name equals `key` exactly.
#[must_use]
pub fn context_field(key: &str) -> Option<&'static ContextField> {
    CONTEXT_FIELDS.iter().find(|f| f.key.as_str() == key)
}

/// Find the hint entry whose name equals `key` exactly.
#[must_use]
pub fn hint_field(key: &str) -> Option<&'static HintField> {
    HINT_FIELDS.iter().find(|f| f.key.as_str() == key)
}

fn read_username(s: &ResolverState) -> Option<ValueRef<'_>> {
    s.username().map(ValueRef::Text)
}

fn read_password(s: &ResolverState) -> Option<ValueRef<'_>> {
    s.password().map(|p| ValueRef::Text(p.expose_secret()))
}

fn read_authentication_authority(s: &ResolverState) -> Option<ValueRef<'_>> {
    s.authentication_authority().map(ValueRef::Record)
}

fn read_uid(s: &ResolverState) -> Option<ValueRef<'_>> {
    s.uid().map(ValueRef::Numeric)
}

fn read_gid(s: &ResolverState) -> Option<ValueRef<'_>> {
    s.gid().map(ValueRef::Numeric)
}

fn read_token_name(s: &ResolverState) -> Option<ValueRef<'_>> {
    s.token_name().map(ValueRef::Text)
}

fn read_authorize_right(s: &ResolverState) -> Option<ValueRef<'_>> {
    s.authorize_right().map(ValueRef::Text)
}

fn read_suggested_user(s: &ResolverState) -> Option<ValueRef<'_>> {
    s.suggested_user().map(ValueRef::Text)
}

fn read_client_path(s: &ResolverState) -> Option<ValueRef<'_>> {
    s.client_path().map(ValueRef::Text)
}

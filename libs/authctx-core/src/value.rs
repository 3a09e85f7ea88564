use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Discriminant carried by every [`TypedValue`].
///
/// The numeric codes are part of the binary contract: they are written into
/// nested record entries and must never be renumbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueKind {
    /// UTF-8 text without terminator.
    Text = 1,
    /// Key-value record of nested typed entries.
    Record = 2,
    /// Unsigned 32-bit identifier, big-endian.
    Numeric = 3,
}

impl ValueKind {
    /// Wire code of this kind.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its wire code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Text),
            2 => Some(Self::Record),
            3 => Some(Self::Numeric),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Record => f.write_str("record"),
            Self::Numeric => f.write_str("numeric"),
        }
    }
}

/// A native field value.
///
/// Deserialization is untagged so configuration files can write plain
/// strings, integers and maps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Numeric(u32),
    Record(Record),
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.as_value_ref().kind()
    }

    /// Borrow this value without copying its contents.
    #[must_use]
    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Self::Text(s) => ValueRef::Text(s),
            Self::Numeric(n) => ValueRef::Numeric(*n),
            Self::Record(r) => ValueRef::Record(r),
        }
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<u32> for Value {
    #[inline]
    fn from(n: u32) -> Self {
        Self::Numeric(n)
    }
}

impl From<Record> for Value {
    #[inline]
    fn from(r: Record) -> Self {
        Self::Record(r)
    }
}

/// Borrowed view of a field value, handed from field accessors to the codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueRef<'a> {
    Text(&'a str),
    Numeric(u32),
    Record(&'a Record),
}

impl ValueRef<'_> {
    #[must_use]
    pub fn kind(self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Numeric(_) => ValueKind::Numeric,
            Self::Record(_) => ValueKind::Record,
        }
    }
}

/// Structured key-value record.
///
/// Keys are kept sorted so the encoded form is canonical.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Tagged binary value returned by every lookup.
///
/// The payload may hold credentials, so it is wiped on drop and never
/// printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct TypedValue {
    kind: ValueKind,
    payload: Vec<u8>,
}

impl TypedValue {
    #[must_use]
    pub fn new(kind: ValueKind, payload: Vec<u8>) -> Self {
        Self { kind, payload }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl fmt::Debug for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedValue")
            .field("kind", &self.kind)
            .field("len", &self.payload.len())
            .finish_non_exhaustive()
    }
}

impl Drop for TypedValue {
    fn drop(&mut self) {
        self.payload.zeroize();
    }
}

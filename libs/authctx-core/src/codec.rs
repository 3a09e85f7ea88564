//! Marshaling between native field values and [`TypedValue`].
//!
//! Layout per kind:
//! - text: the UTF-8 bytes, no terminator
//! - numeric: 4 bytes, big-endian
//! - record: a postcard sequence of `(key, kind code, payload)` entries in
//!   ascending key order, each payload marshaled by these same rules

use serde::{Deserialize, Serialize};

use crate::value::{Record, TypedValue, Value, ValueKind, ValueRef};

/// Record nesting allowed when no explicit limit is given.
pub const DEFAULT_MAX_RECORD_DEPTH: usize = 8;

const NUMERIC_WIDTH: usize = std::mem::size_of::<u32>();

#[derive(Debug, thiserror::Error)]
pub enum MarshalError {
    #[error("text contains an interior NUL byte at offset {offset}")]
    InteriorNul { offset: usize },

    #[error("record nesting exceeds depth limit {limit}")]
    DepthExceeded { limit: usize },

    #[error("record encoding failed: {0}")]
    Encode(#[from] postcard::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum UnmarshalError {
    #[error("text payload is not valid UTF-8: {0}")]
    InvalidText(#[from] std::str::Utf8Error),

    #[error("text payload contains an interior NUL byte at offset {offset}")]
    InteriorNul { offset: usize },

    #[error("numeric payload must be 4 bytes, got {actual}")]
    NumericLength { actual: usize },

    #[error("unknown value kind code {0}")]
    UnknownKind(u8),

    #[error("record entry '{key}' is out of canonical key order")]
    NonCanonical { key: String },

    #[error("record payload has {0} trailing bytes")]
    TrailingBytes(usize),

    #[error("record nesting exceeds depth limit {limit}")]
    DepthExceeded { limit: usize },

    #[error("record decoding failed: {0}")]
    Decode(#[from] postcard::Error),
}

#[derive(Serialize, Deserialize)]
struct WireEntry<'a> {
    key: &'a str,
    kind: u8,
    #[serde(with = "serde_bytes")]
    payload: &'a [u8],
}

/// Marshal a value using [`DEFAULT_MAX_RECORD_DEPTH`].
///
/// # Errors
///
/// See [`marshal_with_depth`].
pub fn marshal(value: ValueRef<'_>) -> Result<TypedValue, MarshalError> {
    marshal_with_depth(value, DEFAULT_MAX_RECORD_DEPTH)
}

/// Marshal a value, allowing at most `max_depth` levels of record nesting.
///
/// The result is a pure function of the input: equal values always produce
/// byte-identical payloads.
///
/// # Errors
///
/// - [`MarshalError::InteriorNul`] if any text or record key contains NUL
/// - [`MarshalError::DepthExceeded`] if records nest deeper than `max_depth`
/// - [`MarshalError::Encode`] if the record serializer fails
pub fn marshal_with_depth(
    value: ValueRef<'_>,
    max_depth: usize,
) -> Result<TypedValue, MarshalError> {
    marshal_at(value, 0, max_depth)
}

fn marshal_at(
    value: ValueRef<'_>,
    depth: usize,
    limit: usize,
) -> Result<TypedValue, MarshalError> {
    let payload = match value {
        ValueRef::Text(s) => {
            check_no_nul(s)?;
            s.as_bytes().to_vec()
        }
        ValueRef::Numeric(n) => n.to_be_bytes().to_vec(),
        ValueRef::Record(record) => marshal_record(record, depth + 1, limit)?,
    };
    Ok(TypedValue::new(value.kind(), payload))
}

fn marshal_record(record: &Record, depth: usize, limit: usize) -> Result<Vec<u8>, MarshalError> {
    if depth > limit {
        return Err(MarshalError::DepthExceeded { limit });
    }

    let nested = record
        .iter()
        .map(|(key, value)| {
            check_no_nul(key)?;
            Ok((key, marshal_at(value.as_value_ref(), depth, limit)?))
        })
        .collect::<Result<Vec<_>, MarshalError>>()?;

    let entries: Vec<WireEntry<'_>> = nested
        .iter()
        .map(|(key, tv)| WireEntry {
            key: *key,
            kind: tv.kind().code(),
            payload: tv.payload(),
        })
        .collect();

    Ok(postcard::to_allocvec(&entries)?)
}

fn check_no_nul(s: &str) -> Result<(), MarshalError> {
    match s.find('\0') {
        Some(offset) => Err(MarshalError::InteriorNul { offset }),
        None => Ok(()),
    }
}

/// Decode a [`TypedValue`] using [`DEFAULT_MAX_RECORD_DEPTH`].
///
/// # Errors
///
/// See [`unmarshal_with_depth`].
pub fn unmarshal(value: &TypedValue) -> Result<Value, UnmarshalError> {
    unmarshal_with_depth(value, DEFAULT_MAX_RECORD_DEPTH)
}

/// Decode a [`TypedValue`] back into its native value, allowing at most
/// `max_depth` levels of record nesting.
///
/// Anything [`marshal_with_depth`] produced with the same `max_depth` decodes.
///
/// # Errors
///
/// Returns an [`UnmarshalError`] when the payload does not match the layout
/// its kind requires, or when records nest deeper than `max_depth`.
pub fn unmarshal_with_depth(value: &TypedValue, max_depth: usize) -> Result<Value, UnmarshalError> {
    unmarshal_at(value.kind(), value.payload(), 0, max_depth)
}

fn unmarshal_at(
    kind: ValueKind,
    payload: &[u8],
    depth: usize,
    limit: usize,
) -> Result<Value, UnmarshalError> {
    match kind {
        ValueKind::Text => {
            let s = std::str::from_utf8(payload)?;
            if let Some(offset) = s.find('\0') {
                return Err(UnmarshalError::InteriorNul { offset });
            }
            Ok(Value::Text(s.to_owned()))
        }
        ValueKind::Numeric => {
            let bytes: [u8; NUMERIC_WIDTH] =
                payload.try_into().map_err(|_| UnmarshalError::NumericLength {
                    actual: payload.len(),
                })?;
            Ok(Value::Numeric(u32::from_be_bytes(bytes)))
        }
        ValueKind::Record => unmarshal_record(payload, depth + 1, limit).map(Value::Record),
    }
}

fn unmarshal_record(payload: &[u8], depth: usize, limit: usize) -> Result<Record, UnmarshalError> {
    if depth > limit {
        return Err(UnmarshalError::DepthExceeded { limit });
    }

    let (entries, rest): (Vec<WireEntry<'_>>, _) = postcard::take_from_bytes(payload)?;
    if !rest.is_empty() {
        return Err(UnmarshalError::TrailingBytes(rest.len()));
    }

    let mut record = Record::new();
    let mut prev: Option<&str> = None;
    for entry in entries {
        if prev.is_some_and(|p| p >= entry.key) {
            return Err(UnmarshalError::NonCanonical {
                key: entry.key.to_owned(),
            });
        }
        let kind =
            ValueKind::from_code(entry.kind).ok_or(UnmarshalError::UnknownKind(entry.kind))?;
        let value = unmarshal_at(kind, entry.payload, depth, limit)?;
        record.insert(entry.key, value);
        prev = Some(entry.key);
    }
    Ok(record)
}

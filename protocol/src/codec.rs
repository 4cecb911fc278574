//! Canonical encoding helpers.
//!
//! The wire format is RLP. Everything that goes on the wire or into a hash
//! passes through [`encode`], and everything that comes back passes through
//! [`decode`], which insists on consuming the whole input.

use alloy_rlp::{BufMut, Decodable, Encodable, EMPTY_STRING_CODE};

use crate::transaction::TransactionError;

/// Canonically encode a value.
pub fn encode<T: Encodable + ?Sized>(value: &T) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.length());
    value.encode(&mut out);
    out
}

/// Decode exactly one value from `bytes`.
///
/// Trailing bytes are an error: two different byte strings must never
/// decode to the same value.
pub fn decode<T: Decodable>(bytes: &[u8]) -> Result<T, TransactionError> {
    let mut buf = bytes;
    let value = T::decode(&mut buf)?;
    if !buf.is_empty() {
        return Err(TransactionError::MalformedEncoding(format!(
            "{} trailing bytes after value",
            buf.len()
        )));
    }
    Ok(value)
}

/// A field that may be absent. Absence encodes as the empty string (`0x80`).
///
/// Only used on the encode side: `0x80` is also the encoding of integer
/// zero, so absence cannot be told apart from zero when reading back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Optional<T>(pub Option<T>);

impl<T: Encodable> Encodable for Optional<T> {
    fn encode(&self, out: &mut dyn BufMut) {
        match &self.0 {
            Some(value) => value.encode(out),
            None => out.put_u8(EMPTY_STRING_CODE),
        }
    }

    fn length(&self) -> usize {
        match &self.0 {
            Some(value) => value.length(),
            None => 1,
        }
    }
}

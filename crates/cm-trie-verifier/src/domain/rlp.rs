//! # RLP Codec
//!
//! Borrowing decoder plus the small encoder surface proof construction
//! needs. Classification by leading byte:
//!
//! ```text
//! 0x00..=0x7f  the byte itself is the item
//! 0x80..=0xb7  short string, inline length
//! 0xb8..=0xbf  long string, length-of-length follows
//! 0xc0..=0xf7  short list
//! 0xf8..=0xff  long list
//! ```
//!
//! List decoding is two-pass: a first walk counts items by consumed
//! length, then each item's byte range is materialized.

use super::errors::RlpError;

/// Nesting bound for attacker-supplied proof nodes.
const MAX_DEPTH: usize = 32;

/// A decoded RLP item borrowing the input buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RlpValue<'a> {
    Bytes(&'a [u8]),
    List(Vec<RlpValue<'a>>),
}

impl<'a> RlpValue<'a> {
    /// The payload of a `Bytes` item, or `None` for a list.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            RlpValue::Bytes(bytes) => Some(bytes),
            RlpValue::List(_) => None,
        }
    }

    /// The items of a `List`, or `None` for bytes.
    pub fn as_list(&self) -> Option<&[RlpValue<'a>]> {
        match self {
            RlpValue::Bytes(_) => None,
            RlpValue::List(items) => Some(items),
        }
    }
}

/// Decode one top-level item covering the whole buffer.
pub fn decode(buf: &[u8]) -> Result<RlpValue<'_>, RlpError> {
    let (value, consumed) = decode_at(buf, 0, 0)?;
    if consumed != buf.len() {
        return Err(RlpError::TrailingBytes { offset: consumed });
    }
    Ok(value)
}

/// Decode the item starting at `offset`, returning it and the offset one
/// past its end.
fn decode_at(buf: &[u8], offset: usize, depth: usize) -> Result<(RlpValue<'_>, usize), RlpError> {
    if depth > MAX_DEPTH {
        return Err(RlpError::TooDeep);
    }
    let lead = *buf.get(offset).ok_or(RlpError::Truncated { offset })?;
    match lead {
        0x00..=0x7f => Ok((RlpValue::Bytes(&buf[offset..offset + 1]), offset + 1)),
        0x80..=0xb7 => {
            let len = (lead - 0x80) as usize;
            let payload = payload_range(buf, offset + 1, len)?;
            Ok((RlpValue::Bytes(payload), offset + 1 + len))
        }
        0xb8..=0xbf => {
            let len_of_len = (lead - 0xb7) as usize;
            let len = read_length(buf, offset + 1, len_of_len)?;
            let payload = payload_range(buf, offset + 1 + len_of_len, len)?;
            Ok((RlpValue::Bytes(payload), offset + 1 + len_of_len + len))
        }
        0xc0..=0xf7 => {
            let len = (lead - 0xc0) as usize;
            payload_range(buf, offset + 1, len)?;
            let items = decode_list_payload(buf, offset + 1, len, depth)?;
            Ok((RlpValue::List(items), offset + 1 + len))
        }
        0xf8..=0xff => {
            let len_of_len = (lead - 0xf7) as usize;
            let len = read_length(buf, offset + 1, len_of_len)?;
            payload_range(buf, offset + 1 + len_of_len, len)?;
            let items = decode_list_payload(buf, offset + 1 + len_of_len, len, depth)?;
            Ok((RlpValue::List(items), offset + 1 + len_of_len + len))
        }
    }
}

/// Two passes over a list payload: count, then materialize.
fn decode_list_payload(
    buf: &[u8],
    start: usize,
    len: usize,
    depth: usize,
) -> Result<Vec<RlpValue<'_>>, RlpError> {
    let end = start
        .checked_add(len)
        .ok_or(RlpError::Truncated { offset: start })?;

    let mut count = 0usize;
    let mut cursor = start;
    while cursor < end {
        let (_, next) = decode_at(buf, cursor, depth + 1)?;
        if next > end {
            return Err(RlpError::Truncated { offset: cursor });
        }
        cursor = next;
        count += 1;
    }

    let mut items = Vec::with_capacity(count);
    let mut cursor = start;
    while cursor < end {
        let (item, next) = decode_at(buf, cursor, depth + 1)?;
        items.push(item);
        cursor = next;
    }
    Ok(items)
}

fn payload_range(buf: &[u8], start: usize, len: usize) -> Result<&[u8], RlpError> {
    // The declared length is attacker-controlled and may be near usize::MAX.
    let end = start
        .checked_add(len)
        .ok_or(RlpError::Truncated { offset: start })?;
    if end > buf.len() {
        return Err(RlpError::Truncated { offset: start });
    }
    Ok(&buf[start..end])
}

fn read_length(buf: &[u8], start: usize, len_of_len: usize) -> Result<usize, RlpError> {
    if len_of_len > core::mem::size_of::<usize>() {
        return Err(RlpError::InvalidLength { offset: start });
    }
    let bytes = payload_range(buf, start, len_of_len).map_err(|_| RlpError::Truncated {
        offset: start,
    })?;
    if bytes.first() == Some(&0) {
        return Err(RlpError::InvalidLength { offset: start });
    }
    let mut len = 0usize;
    for &b in bytes {
        len = (len << 8) | b as usize;
    }
    // Long forms are only for lengths the short form cannot express.
    if len < 56 {
        return Err(RlpError::InvalidLength { offset: start });
    }
    Ok(len)
}

// =============================================================================
// ENCODING
// =============================================================================

/// RLP-encode a byte string.
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    if data.len() == 1 && data[0] < 0x80 {
        vec![data[0]]
    } else if data.len() < 56 {
        let mut out = vec![0x80 + data.len() as u8];
        out.extend_from_slice(data);
        out
    } else {
        let len_bytes = minimal_be(data.len());
        let mut out = vec![0xb7 + len_bytes.len() as u8];
        out.extend_from_slice(&len_bytes);
        out.extend_from_slice(data);
        out
    }
}

/// RLP-encode a list from already-encoded item payloads.
pub fn encode_list(encoded_items: &[Vec<u8>]) -> Vec<u8> {
    let total: usize = encoded_items.iter().map(|e| e.len()).sum();
    let mut out = Vec::with_capacity(total + 9);
    if total < 56 {
        out.push(0xc0 + total as u8);
    } else {
        let len_bytes = minimal_be(total);
        out.push(0xf7 + len_bytes.len() as u8);
        out.extend_from_slice(&len_bytes);
    }
    for encoded in encoded_items {
        out.extend_from_slice(encoded);
    }
    out
}

/// Minimal big-endian representation of a length.
fn minimal_be(len: usize) -> Vec<u8> {
    let bytes = len.to_be_bytes();
    let start = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len() - 1);
    bytes[start..].to_vec()
}

//! # Aggregation Metadata Codec
//!
//! The blob opens with a table of K fixed-width entries, one per
//! sub-module:
//!
//! ```text
//! entry i at [i*40 .. i*40+40]:
//!   [0:32]  module identifier (20-byte addresses right-aligned)
//!   [32:36] range start, u32 BE, offset into the whole blob
//!   [36:40] range end,   u32 BE, exclusive
//! ```
//!
//! A zero range (`start == end == 0`) marks the module as unconfigured for
//! this delivery. Sub-metadata payloads follow the table; entries address
//! them by absolute offset so payloads may be shared or ordered freely.

use shared_types::{ByteReader, ModuleId, ReadError};

/// Bytes per table entry.
pub const MODULE_ENTRY_LEN: usize = 32 + 4 + 4;

/// One sub-module and the byte range of its metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRange {
    pub module: ModuleId,
    pub start: u32,
    pub end: u32,
}

impl ModuleRange {
    /// Whether this module is configured for the current delivery.
    pub fn is_configured(&self) -> bool {
        !(self.start == 0 && self.end == 0)
    }
}

/// A decoded aggregation table, still borrowing the raw blob for payload
/// slicing.
#[derive(Clone, Debug)]
pub struct AggregationMetadata<'a> {
    raw: &'a [u8],
    entries: Vec<ModuleRange>,
}

impl<'a> AggregationMetadata<'a> {
    /// Decode a table of exactly `count` entries from the front of `raw`.
    ///
    /// Every configured range must be well-formed (`start < end`, end within
    /// the blob, start past the table) before any sub-verifier runs.
    pub fn decode(raw: &'a [u8], count: usize) -> Result<Self, ReadError> {
        let table_len = count * MODULE_ENTRY_LEN;
        let mut reader = ByteReader::new(raw);
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            let entry_offset = reader.pos();
            let module = reader.read_array::<32>()?;
            let start = reader.read_u32_be()?;
            let end = reader.read_u32_be()?;
            let range = ModuleRange { module, start, end };
            if range.is_configured() {
                if start >= end {
                    return Err(ReadError::InvalidField {
                        offset: entry_offset + 32,
                        reason: "range start must precede range end",
                    });
                }
                if (start as usize) < table_len {
                    return Err(ReadError::InvalidField {
                        offset: entry_offset + 32,
                        reason: "range overlaps the entry table",
                    });
                }
                if end as usize > raw.len() {
                    return Err(ReadError::OutOfBounds {
                        offset: start as usize,
                        wanted: (end - start) as usize,
                        len: raw.len(),
                    });
                }
            }
            entries.push(range);
        }
        Ok(Self { raw, entries })
    }

    pub fn entries(&self) -> &[ModuleRange] {
        &self.entries
    }

    /// Number of configured (non-zero-range) entries.
    pub fn configured_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_configured()).count()
    }

    /// The metadata slice for entry `i`. Ranges were validated at decode.
    pub fn payload(&self, entry: &ModuleRange) -> &'a [u8] {
        &self.raw[entry.start as usize..entry.end as usize]
    }
}

/// Encode a table plus payloads: each `(module, payload)` pair becomes one
/// configured entry whose payload sits after the table. A `None` payload
/// encodes a zero range.
pub fn encode_metadata(modules: &[(ModuleId, Option<&[u8]>)]) -> Vec<u8> {
    let table_len = modules.len() * MODULE_ENTRY_LEN;
    let payload_len: usize = modules
        .iter()
        .filter_map(|(_, p)| p.map(|p| p.len()))
        .sum();
    let mut table = Vec::with_capacity(table_len);
    let mut payloads = Vec::with_capacity(payload_len);

    let mut cursor = table_len;
    for (module, payload) in modules {
        table.extend_from_slice(module);
        match payload {
            Some(payload) => {
                let start = cursor as u32;
                let end = (cursor + payload.len()) as u32;
                table.extend_from_slice(&start.to_be_bytes());
                table.extend_from_slice(&end.to_be_bytes());
                payloads.extend_from_slice(payload);
                cursor += payload.len();
            }
            None => {
                table.extend_from_slice(&0u32.to_be_bytes());
                table.extend_from_slice(&0u32.to_be_bytes());
            }
        }
    }
    table.extend_from_slice(&payloads);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(n: u8) -> ModuleId {
        let mut m = [0u8; 32];
        m[31] = n;
        m
    }

    #[test]
    fn test_decode_configured_and_skipped() {
        let raw = encode_metadata(&[
            (module(1), Some(b"first payload")),
            (module(2), None),
            (module(3), Some(b"third")),
        ]);
        let meta = AggregationMetadata::decode(&raw, 3).unwrap();
        assert_eq!(meta.configured_count(), 2);
        assert!(!meta.entries()[1].is_configured());
        assert_eq!(meta.payload(&meta.entries()[0]), b"first payload");
        assert_eq!(meta.payload(&meta.entries()[2]), b"third");
    }

    #[test]
    fn test_short_table_rejected() {
        let raw = encode_metadata(&[(module(1), Some(b"x"))]);
        assert!(matches!(
            AggregationMetadata::decode(&raw, 2),
            Err(ReadError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut raw = encode_metadata(&[(module(1), Some(b"abc"))]);
        // Swap start and end.
        let start: [u8; 4] = raw[32..36].try_into().unwrap();
        let end: [u8; 4] = raw[36..40].try_into().unwrap();
        raw[32..36].copy_from_slice(&end);
        raw[36..40].copy_from_slice(&start);
        assert!(matches!(
            AggregationMetadata::decode(&raw, 1),
            Err(ReadError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_range_past_end_rejected() {
        let mut raw = encode_metadata(&[(module(1), Some(b"abc"))]);
        raw[39] += 100; // push end past the blob
        assert!(matches!(
            AggregationMetadata::decode(&raw, 1),
            Err(ReadError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_range_into_table_rejected() {
        let mut raw = encode_metadata(&[(module(1), Some(b"abc"))]);
        raw[32..36].copy_from_slice(&1u32.to_be_bytes()); // start inside the table
        assert!(matches!(
            AggregationMetadata::decode(&raw, 1),
            Err(ReadError::InvalidField { .. })
        ));
    }
}

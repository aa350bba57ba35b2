//! # Nibble Paths
//!
//! Trie keys are walked half a byte at a time. Partial paths inside nodes
//! use the hex-prefix encoding: the first nibble carries flags (0/1 =
//! extension even/odd, 2/3 = leaf even/odd), and for odd lengths the second
//! nibble of the first byte is already path.

/// A sequence of half-bytes, each in `0..16`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nibbles(pub Vec<u8>);

impl Nibbles {
    /// Split bytes into nibbles, high half first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut nibbles = Vec::with_capacity(bytes.len() * 2);
        for byte in bytes {
            nibbles.push(byte >> 4);
            nibbles.push(byte & 0x0F);
        }
        Nibbles(nibbles)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn at(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Whether `self[offset..]` starts with `prefix`.
    pub fn starts_with_at(&self, prefix: &Nibbles, offset: usize) -> bool {
        self.0.len() >= offset + prefix.len() && self.0[offset..offset + prefix.len()] == prefix.0
    }

    /// Hex-prefix encode this path.
    pub fn encode_hex_prefix(&self, is_leaf: bool) -> Vec<u8> {
        let odd = self.len() % 2 == 1;
        let flag = if is_leaf { 2u8 } else { 0 } + if odd { 1 } else { 0 };

        let mut out = Vec::with_capacity(self.len() / 2 + 1);
        if odd {
            out.push((flag << 4) | self.0[0]);
            for pair in self.0[1..].chunks_exact(2) {
                out.push((pair[0] << 4) | pair[1]);
            }
        } else {
            out.push(flag << 4);
            for pair in self.0.chunks_exact(2) {
                out.push((pair[0] << 4) | pair[1]);
            }
        }
        out
    }

    /// Decode a hex-prefix path, returning `(path, is_leaf)`.
    ///
    /// `None` for an empty buffer, a flag nibble above 3, or a non-zero
    /// filler nibble in the even form.
    pub fn decode_hex_prefix(encoded: &[u8]) -> Option<(Self, bool)> {
        let first = *encoded.first()?;
        let flag = first >> 4;
        if flag > 3 {
            return None;
        }
        let is_leaf = flag >= 2;
        let odd = flag % 2 == 1;

        let mut nibbles = Vec::with_capacity(encoded.len() * 2);
        if odd {
            nibbles.push(first & 0x0F);
        } else if first & 0x0F != 0 {
            return None;
        }
        for &byte in &encoded[1..] {
            nibbles.push(byte >> 4);
            nibbles.push(byte & 0x0F);
        }
        Some((Nibbles(nibbles), is_leaf))
    }
}

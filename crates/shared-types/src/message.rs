//! # Interchain Message Codec
//!
//! The packed wire form of a message travelling between chains, and the
//! derivation of its id. The id is what validators attest to: verifiers must
//! always recompute it from the raw message bytes, never trust one supplied
//! in metadata.
//!
//! Wire layout (big-endian integers):
//!
//! ```text
//! version   u8
//! nonce     u32
//! origin    u32
//! sender    32B
//! destination u32
//! recipient 32B
//! body      remaining bytes
//! ```

use crate::entities::{Domain, Hash};
use crate::errors::ReadError;
use crate::reader::ByteReader;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

/// Number of bytes before the variable-length body.
pub const MESSAGE_PREFIX_LEN: usize = 1 + 4 + 4 + 32 + 4 + 32;

/// A decoded interchain message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Wire format version.
    pub version: u8,
    /// Origin-mailbox dispatch nonce.
    pub nonce: u32,
    /// Origin chain domain.
    pub origin: Domain,
    /// Dispatching contract on the origin chain, widened to 32 bytes.
    pub sender: [u8; 32],
    /// Destination chain domain.
    pub destination: Domain,
    /// Receiving contract on the destination chain, widened to 32 bytes.
    pub recipient: [u8; 32],
    /// Application payload.
    pub body: Vec<u8>,
}

impl Message {
    /// Decode a message from its packed wire form.
    pub fn decode(bytes: &[u8]) -> Result<Self, ReadError> {
        let mut r = ByteReader::new(bytes);
        let version = r.read_u8()?;
        let nonce = r.read_u32_be()?;
        let origin = r.read_u32_be()?;
        let sender = r.read_array::<32>()?;
        let destination = r.read_u32_be()?;
        let recipient = r.read_array::<32>()?;
        let body = r.read_rest().to_vec();
        Ok(Self {
            version,
            nonce,
            origin,
            sender,
            destination,
            recipient,
            body,
        })
    }

    /// Encode into the packed wire form.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(MESSAGE_PREFIX_LEN + self.body.len());
        out.push(self.version);
        out.extend_from_slice(&self.nonce.to_be_bytes());
        out.extend_from_slice(&self.origin.to_be_bytes());
        out.extend_from_slice(&self.sender);
        out.extend_from_slice(&self.destination.to_be_bytes());
        out.extend_from_slice(&self.recipient);
        out.extend_from_slice(&self.body);
        out
    }

    /// The message id: keccak256 of the packed wire form.
    pub fn id(&self) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update(self.encode());
        hasher.finalize().into()
    }
}

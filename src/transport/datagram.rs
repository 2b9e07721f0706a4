// Datagram Codec
// Wire representation of a ciphertext integer: one unsigned big-endian payload

use crate::error::{Error, Result};
use crate::rsa::bigint::{self, byte_len, RsaBigInt};
use crate::rsa::CipherInteger;

/// Extra bytes tolerated beyond the modulus width (leading zero or sign bytes)
pub const PAYLOAD_MARGIN: usize = 4;

/// Minimal big-endian encoding; zero encodes as a single zero byte
pub fn to_bytes(ciphertext: &CipherInteger) -> Vec<u8> {
    bigint::to_bytes(ciphertext)
}

/// Unsigned big-endian decoding; leading zero bytes do not change the value
pub fn from_bytes(payload: &[u8]) -> CipherInteger {
    bigint::from_bytes(payload)
}

/// Bounds payload sizes for one key size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatagramCodec {
    max_len: usize,
}

impl DatagramCodec {
    /// Codec for ciphertexts under `modulus`, with the default margin
    pub fn new(modulus: &RsaBigInt) -> Self {
        Self::with_margin(modulus, PAYLOAD_MARGIN)
    }

    pub fn with_margin(modulus: &RsaBigInt, margin: usize) -> Self {
        Self {
            max_len: byte_len(modulus) + margin,
        }
    }

    /// Largest payload this codec accepts
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Receive buffer size; one spare byte exposes over-long datagrams
    pub fn buffer_len(&self) -> usize {
        self.max_len + 1
    }

    pub fn encode(&self, ciphertext: &CipherInteger) -> Result<Vec<u8>> {
        let payload = to_bytes(ciphertext);
        self.check_len(payload.len())?;
        Ok(payload)
    }

    pub fn decode(&self, payload: &[u8]) -> Result<CipherInteger> {
        self.check_len(payload.len())?;
        Ok(from_bytes(payload))
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len == 0 || len > self.max_len {
            return Err(Error::MalformedPayload {
                len,
                max: self.max_len,
            });
        }
        Ok(())
    }
}

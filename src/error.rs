// Error types shared by the cipher pipeline and the transport

/// Errors produced while encrypting, decrypting or moving ciphertexts.
///
/// Decode-side failures are deliberately coarse: a corrupted ciphertext, a
/// wrong key and a truncated payload all surface as [`Error::Padding`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("message too long: max {max} bytes, got {actual}")]
    MessageTooLong { max: usize, actual: usize },

    #[error("cannot decrypt message")]
    Padding,

    #[error("malformed payload: {len} bytes (max {max})")]
    MalformedPayload { len: usize, max: usize },

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the crate
pub type Result<T> = std::result::Result<T, Error>;

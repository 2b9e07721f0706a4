//! Confidential one-shot messages over UDP.
//!
//! A leaker encrypts a short text for a reporter's public key with RSA-OAEP
//! and sends the ciphertext integer as a single datagram. The reporter
//! decrypts with the private half and prints whatever decodes cleanly.
//!
//! ```rust,no_run
//! use rsa_leak::rsa::{decrypt, encrypt, generate_keypair};
//!
//! let keypair = generate_keypair(2048, 65537).expect("key generation failed");
//! let ciphertext = encrypt("hello", &keypair.public_key).expect("message fits");
//! let plaintext = decrypt(&ciphertext, &keypair.private_key).expect("valid padding");
//! assert_eq!(plaintext, "hello");
//! ```

pub mod error;
pub mod rsa;
pub mod session;
pub mod transport;
pub mod util;

pub use error::{Error, Result};
pub use rsa::{decrypt, encrypt, CipherInteger, PrivateKey, PublicKey};
pub use session::{leak, Reporter};
pub use transport::{from_bytes, to_bytes, DatagramCodec, Listener};

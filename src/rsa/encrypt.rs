// RSA Encryption Implementation
// Implements RSA encryption with OAEP padding

use log::debug;

use super::bigint::{power_mod, CipherInteger};
use super::keygen::PublicKey;
use super::padding::{MaskGenerator, Oaep, Seed};
use crate::error::Result;

/// Fresh random seed; every call draws from the calling thread's CSPRNG
pub fn random_seed() -> Seed {
    rand::random()
}

/// Encrypt a message using RSA public key
///
/// A new seed is drawn per call, so encrypting the same message twice gives
/// different ciphertexts.
pub fn encrypt(plaintext: &str, public_key: &PublicKey) -> Result<CipherInteger> {
    encrypt_with_seed(plaintext, &random_seed(), public_key)
}

/// Encrypt with a caller-supplied seed (deterministic)
pub fn encrypt_with_seed(plaintext: &str, seed: &Seed, public_key: &PublicKey) -> Result<CipherInteger> {
    encrypt_padded(&Oaep::new(), plaintext.as_bytes(), seed, public_key)
}

/// Encrypt raw bytes with an explicit OAEP configuration
pub fn encrypt_padded<G: MaskGenerator>(
    oaep: &Oaep<G>,
    plaintext: &[u8],
    seed: &Seed,
    public_key: &PublicKey,
) -> Result<CipherInteger> {
    // Fails before any arithmetic if the message does not fit
    let block = oaep.encode(plaintext, seed, public_key.byte_len())?;

    // Compute c = m^e mod n
    let c = power_mod(&block.to_integer(), public_key.exponent(), public_key.modulus())?;

    debug!(
        "encrypted {} byte message into {} bit ciphertext",
        plaintext.len(),
        c.bits()
    );

    Ok(c)
}

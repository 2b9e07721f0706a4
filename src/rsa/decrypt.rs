// RSA Decryption Implementation
// Implements RSA decryption with OAEP unpadding

use super::bigint::{power_mod, CipherInteger};
use super::keygen::PrivateKey;
use super::padding::{EncodedBlock, MaskGenerator, Oaep};
use crate::error::{Error, Result};

/// Decrypt a ciphertext integer to a string
///
/// Every failure (value out of range, bad padding, non-UTF-8 plaintext) is
/// reported as the same [`Error::Padding`].
pub fn decrypt(ciphertext: &CipherInteger, private_key: &PrivateKey) -> Result<String> {
    let plaintext = decrypt_bytes(ciphertext, private_key)?;
    String::from_utf8(plaintext).map_err(|_| Error::Padding)
}

/// Decrypt a ciphertext integer to raw bytes
pub fn decrypt_bytes(ciphertext: &CipherInteger, private_key: &PrivateKey) -> Result<Vec<u8>> {
    decrypt_padded(&Oaep::new(), ciphertext, private_key)
}

/// Decrypt with an explicit OAEP configuration
pub fn decrypt_padded<G: MaskGenerator>(
    oaep: &Oaep<G>,
    ciphertext: &CipherInteger,
    private_key: &PrivateKey,
) -> Result<Vec<u8>> {
    let n = private_key.modulus();
    if ciphertext >= n {
        return Err(Error::Padding);
    }

    // Compute m = c^d mod n
    let m = power_mod(ciphertext, private_key.exponent(), n)?;

    let block = EncodedBlock::from_integer(&m, private_key.byte_len())?;
    oaep.decode(&block)
}

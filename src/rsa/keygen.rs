// RSA Key Generation
// Key halves (exponent, modulus) and RSA key pair generation

use num_traits::{One, Zero};

use super::bigint::{byte_len, from_u64, gcd, mod_inverse, random_prime, RsaBigInt};
use super::padding::max_message_len;
use crate::error::{Error, Result};

/// Smallest modulus accepted by [`generate_keypair`]
pub const MIN_KEY_BITS: u32 = 1024;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    exponent: RsaBigInt,
    modulus: RsaBigInt,
}

/// RSA Private Key
///
/// Holds only the private exponent and the modulus; this is all a receiver
/// loads from its key file.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    exponent: RsaBigInt,
    modulus: RsaBigInt,
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public_key: PublicKey,
    pub private_key: PrivateKey,
    pub bit_length: u32,
}

fn validate(exponent: &RsaBigInt, modulus: &RsaBigInt) -> Result<()> {
    if modulus <= &RsaBigInt::one() {
        return Err(Error::InvalidKey("modulus must be greater than 1".to_string()));
    }
    if exponent.is_zero() {
        return Err(Error::InvalidKey("exponent must be positive".to_string()));
    }
    Ok(())
}

impl PublicKey {
    pub fn new(exponent: RsaBigInt, modulus: RsaBigInt) -> Result<Self> {
        validate(&exponent, &modulus)?;
        Ok(Self { exponent, modulus })
    }

    pub fn exponent(&self) -> &RsaBigInt {
        &self.exponent
    }

    pub fn modulus(&self) -> &RsaBigInt {
        &self.modulus
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.modulus.bits()
    }

    /// Width in bytes of an encoded block for this key
    pub fn byte_len(&self) -> usize {
        byte_len(&self.modulus)
    }

    /// Longest plaintext this key can carry in one message
    pub fn max_message_len(&self) -> usize {
        max_message_len(self.byte_len())
    }

    /// Encrypt a message using this public key
    pub fn encrypt(&self, plaintext: &str) -> Result<RsaBigInt> {
        super::encrypt::encrypt(plaintext, self)
    }
}

impl PrivateKey {
    pub fn new(exponent: RsaBigInt, modulus: RsaBigInt) -> Result<Self> {
        validate(&exponent, &modulus)?;
        Ok(Self { exponent, modulus })
    }

    pub fn exponent(&self) -> &RsaBigInt {
        &self.exponent
    }

    pub fn modulus(&self) -> &RsaBigInt {
        &self.modulus
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.modulus.bits()
    }

    /// Width in bytes of an encoded block for this key
    pub fn byte_len(&self) -> usize {
        byte_len(&self.modulus)
    }

    /// Decrypt a ciphertext integer using this private key
    pub fn decrypt(&self, ciphertext: &RsaBigInt) -> Result<String> {
        super::decrypt::decrypt(ciphertext, self)
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("exponent", &"[redacted]")
            .field("modulus", &self.modulus)
            .finish()
    }
}

/// Generate RSA key pair with specified bit length
/// bit_length: Size of the modulus in bits (2048, 3072, 4096, etc.)
/// e: Public exponent (common values: 3, 17, 65537)
pub fn generate_keypair(bit_length: u32, e: u64) -> Result<KeyPair> {
    if bit_length < MIN_KEY_BITS {
        return Err(Error::KeyGeneration(format!(
            "bit length must be at least {MIN_KEY_BITS}"
        )));
    }
    if bit_length % 2 != 0 {
        return Err(Error::KeyGeneration(
            "bit length must be even (p and q have equal bit length)".to_string(),
        ));
    }
    if e < 3 || e % 2 == 0 {
        return Err(Error::KeyGeneration(format!("e={e} must be odd and at least 3")));
    }

    let e = from_u64(e);
    let half_bits = bit_length / 2;

    loop {
        let p = random_prime(half_bits)?;
        let q = random_prime(half_bits)?;
        if p == q {
            continue;
        }

        // φ(n) = (p-1)(q-1) must be coprime with e
        let phi_n = (&p - 1u8) * (&q - 1u8);
        if !gcd(&e, &phi_n).is_one() {
            continue;
        }

        let d = mod_inverse(&e, &phi_n)
            .ok_or_else(|| Error::KeyGeneration("failed to compute modular inverse".to_string()))?;
        let n = &p * &q;

        return Ok(KeyPair {
            public_key: PublicKey::new(e.clone(), n.clone())?,
            private_key: PrivateKey::new(d, n)?,
            bit_length,
        });
    }
}

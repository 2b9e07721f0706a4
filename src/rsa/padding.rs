// OAEP Padding
// Implements EME-OAEP encoding for RSA encryption (RFC 8017, section 7.1)

use std::marker::PhantomData;

use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::error::{Error, Result};

/// Length of the random seed mixed into every encoding
pub const SEED_LEN: usize = 32;

/// Length of the label hash stored at the head of the data block
pub const HASH_LEN: usize = 32;

/// Bytes of a block not available to the message:
/// leading zero, masked seed, label hash and the 0x01 separator
pub const OAEP_OVERHEAD: usize = 2 * HASH_LEN + 2;

/// Per-encryption random seed
pub type Seed = [u8; SEED_LEN];

/// Longest message that fits a block of `width` bytes
pub fn max_message_len(width: usize) -> usize {
    width.saturating_sub(OAEP_OVERHEAD)
}

/// Derives a pseudorandom mask of any length from a seed
pub trait MaskGenerator {
    fn generate(&self, seed: &[u8], len: usize) -> Vec<u8>;
}

/// MGF1 over any fixed-output digest
pub struct Mgf1<D> {
    _digest: PhantomData<fn() -> D>,
}

impl<D> Mgf1<D> {
    pub fn new() -> Self {
        Self { _digest: PhantomData }
    }
}

impl<D> Default for Mgf1<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for Mgf1<D> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<D> std::fmt::Debug for Mgf1<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Mgf1")
    }
}

impl<D: Digest> MaskGenerator for Mgf1<D> {
    fn generate(&self, seed: &[u8], len: usize) -> Vec<u8> {
        let mut mask = Vec::with_capacity(len + <D as Digest>::output_size());
        let mut counter = 0u32;

        while mask.len() < len {
            let mut hasher = D::new();
            hasher.update(seed);
            hasher.update(counter.to_be_bytes());
            mask.extend_from_slice(&hasher.finalize());
            counter += 1;
        }

        mask.truncate(len);
        mask
    }
}

/// Fixed-width encoded block, one modulus byte-length wide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBlock {
    pub data: Vec<u8>,
}

impl EncodedBlock {
    /// Numeric value of the block (big-endian)
    pub fn to_integer(&self) -> BigUint {
        BigUint::from_bytes_be(&self.data)
    }

    /// Lay an integer out as a block of exactly `width` bytes
    ///
    /// A value that does not fit cannot be a valid encoding and is reported
    /// as a padding failure.
    pub fn from_integer(value: &BigUint, width: usize) -> Result<Self> {
        let bytes = value.to_bytes_be();
        if bytes.len() > width {
            return Err(Error::Padding);
        }

        let mut data = vec![0u8; width];
        data[width - bytes.len()..].copy_from_slice(&bytes);
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.len()
    }
}

/// OAEP encoder/decoder
///
/// The label hash is always SHA-256; the mask generation function is
/// pluggable and defaults to MGF1-SHA256.
#[derive(Debug, Clone)]
pub struct Oaep<G = Mgf1<Sha256>> {
    mask: G,
    label_hash: [u8; HASH_LEN],
}

impl Oaep {
    pub fn new() -> Self {
        Self::with_mask_generator(Mgf1::new())
    }
}

impl Default for Oaep {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MaskGenerator> Oaep<G> {
    /// OAEP with a custom mask generation function and an empty label
    pub fn with_mask_generator(mask: G) -> Self {
        let mut oaep = Self {
            mask,
            label_hash: [0u8; HASH_LEN],
        };
        oaep.set_label(b"");
        oaep
    }

    /// Bind encodings to a label; both sides must agree on it
    pub fn with_label(mut self, label: &[u8]) -> Self {
        self.set_label(label);
        self
    }

    fn set_label(&mut self, label: &[u8]) {
        self.label_hash.copy_from_slice(&Sha256::digest(label));
    }

    /// Encode a message into a block of `width` bytes
    ///
    /// Format: 0x00 || maskedSeed || maskedDB
    /// DB = lHash || PS (zero bytes) || 0x01 || message
    ///
    /// The leading zero byte keeps the block value below any modulus that is
    /// `width` bytes long.
    pub fn encode(&self, message: &[u8], seed: &Seed, width: usize) -> Result<EncodedBlock> {
        let max = max_message_len(width);
        if width < OAEP_OVERHEAD || message.len() > max {
            return Err(Error::MessageTooLong {
                max,
                actual: message.len(),
            });
        }

        let db_len = width - SEED_LEN - 1;
        let mut db = vec![0u8; db_len];
        db[..HASH_LEN].copy_from_slice(&self.label_hash);
        db[db_len - message.len() - 1] = 0x01;
        db[db_len - message.len()..].copy_from_slice(message);

        let db_mask = self.mask.generate(seed, db_len);
        xor_in_place(&mut db, &db_mask);

        let mut masked_seed = *seed;
        let seed_mask = self.mask.generate(&db, SEED_LEN);
        xor_in_place(&mut masked_seed, &seed_mask);

        let mut data = Vec::with_capacity(width);
        data.push(0x00);
        data.extend_from_slice(&masked_seed);
        data.extend_from_slice(&db);

        Ok(EncodedBlock { data })
    }

    /// Recover the message from an encoded block
    ///
    /// Every structural check runs to completion before the verdict, and all
    /// failures collapse into [`Error::Padding`].
    pub fn decode(&self, block: &EncodedBlock) -> Result<Vec<u8>> {
        let width = block.width();
        if width < OAEP_OVERHEAD {
            return Err(Error::Padding);
        }

        let leading_zero = block.data[0].ct_eq(&0u8);
        let (masked_seed, masked_db) = block.data[1..].split_at(SEED_LEN);

        let mut seed = masked_seed.to_vec();
        xor_in_place(&mut seed, &self.mask.generate(masked_db, SEED_LEN));

        let db_mask = self.mask.generate(&seed, masked_db.len());
        let mut db = masked_db.to_vec();
        xor_in_place(&mut db, &db_mask);

        let label_matches = db[..HASH_LEN].ct_eq(&self.label_hash[..]);

        // Find the first 0x01 after the zero run, without branching on data
        let mut searching = Choice::from(1u8);
        let mut bad_byte = Choice::from(0u8);
        let mut separator = 0u32;
        for (i, byte) in db[HASH_LEN..].iter().enumerate() {
            let is_zero = byte.ct_eq(&0u8);
            let is_one = byte.ct_eq(&1u8);
            separator.conditional_assign(&(i as u32), searching & is_one);
            bad_byte |= searching & !is_zero & !is_one;
            searching &= !is_one;
        }

        let valid = leading_zero & label_matches & !bad_byte & !searching;
        if !bool::from(valid) {
            return Err(Error::Padding);
        }

        Ok(db[HASH_LEN + separator as usize + 1..].to_vec())
    }
}

fn xor_in_place(target: &mut [u8], mask: &[u8]) {
    for (t, m) in target.iter_mut().zip(mask) {
        *t ^= m;
    }
}

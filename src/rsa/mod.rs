// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod padding;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bigint::{power_mod, CipherInteger, RsaBigInt};
pub use decrypt::{decrypt, decrypt_bytes, decrypt_padded};
pub use encrypt::{encrypt, encrypt_padded, encrypt_with_seed, random_seed};
pub use keygen::{generate_keypair, KeyPair, PrivateKey, PublicKey};
pub use padding::{max_message_len, EncodedBlock, MaskGenerator, Mgf1, Oaep, Seed, SEED_LEN};

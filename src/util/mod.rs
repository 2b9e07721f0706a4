// Utility Module
// File handling around the cipher core

pub mod key_file;

pub use key_file::{load_private_key, load_public_key, write_key_file, KeyFileError};

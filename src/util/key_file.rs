// Key File Operations
// Reads and writes key halves: exponent on the first line, modulus on the second

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::rsa::{PrivateKey, PublicKey, RsaBigInt};

/// Errors that can occur while loading or saving a key file
#[derive(Debug, thiserror::Error)]
pub enum KeyFileError {
    #[error("could not access key file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("key file '{path}' is missing the {field} line")]
    MissingLine { path: PathBuf, field: &'static str },

    #[error("key file '{path}' has an invalid {field}")]
    InvalidNumber { path: PathBuf, field: &'static str },

    #[error("key file '{path}' holds an unusable key: {source}")]
    InvalidKey {
        path: PathBuf,
        #[source]
        source: Error,
    },
}

/// Result type for key file operations
pub type KeyFileResult<T> = Result<T, KeyFileError>;

/// Read the raw (exponent, modulus) pair from a key file
pub fn read_key_file(path: &Path) -> KeyFileResult<(RsaBigInt, RsaBigInt)> {
    let text = fs::read_to_string(path).map_err(|source| KeyFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_key_text(path, &text)
}

fn parse_key_text(path: &Path, text: &str) -> KeyFileResult<(RsaBigInt, RsaBigInt)> {
    let mut lines = text.lines();
    let exponent = parse_line(path, lines.next(), "exponent")?;
    let modulus = parse_line(path, lines.next(), "modulus")?;
    Ok((exponent, modulus))
}

fn parse_line(path: &Path, line: Option<&str>, field: &'static str) -> KeyFileResult<RsaBigInt> {
    let line = line.ok_or_else(|| KeyFileError::MissingLine {
        path: path.to_path_buf(),
        field,
    })?;
    line.trim()
        .parse::<RsaBigInt>()
        .map_err(|_| KeyFileError::InvalidNumber {
            path: path.to_path_buf(),
            field,
        })
}

/// Load the public half used by the sending side
pub fn load_public_key(path: &Path) -> KeyFileResult<PublicKey> {
    let (exponent, modulus) = read_key_file(path)?;
    PublicKey::new(exponent, modulus).map_err(|source| KeyFileError::InvalidKey {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the private half used by the receiving side
pub fn load_private_key(path: &Path) -> KeyFileResult<PrivateKey> {
    let (exponent, modulus) = read_key_file(path)?;
    PrivateKey::new(exponent, modulus).map_err(|source| KeyFileError::InvalidKey {
        path: path.to_path_buf(),
        source,
    })
}

/// Write an (exponent, modulus) pair in key file format
pub fn write_key_file(path: &Path, exponent: &RsaBigInt, modulus: &RsaBigInt) -> KeyFileResult<()> {
    fs::write(path, format!("{exponent}\n{modulus}\n")).map_err(|source| KeyFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::fixtures;
    use std::process;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rsa_leak_{}_{name}", process::id()))
    }

    #[test]
    fn test_write_then_load() {
        let (public_key, private_key) = fixtures::rsa1024();
        let pub_path = temp_path("pub.key");
        let priv_path = temp_path("priv.key");

        write_key_file(&pub_path, public_key.exponent(), public_key.modulus()).unwrap();
        write_key_file(&priv_path, private_key.exponent(), private_key.modulus()).unwrap();

        assert_eq!(load_public_key(&pub_path).unwrap(), public_key);
        assert_eq!(load_private_key(&priv_path).unwrap(), private_key);

        fs::remove_file(pub_path).unwrap();
        fs::remove_file(priv_path).unwrap();
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_extra_lines() {
        let (e, n) = parse_key_text(Path::new("k"), "  65537 \r\n3233\n# comment\n").unwrap();
        assert_eq!(e, RsaBigInt::from(65537u32));
        assert_eq!(n, RsaBigInt::from(3233u32));
    }

    #[test]
    fn test_parse_missing_modulus() {
        let err = parse_key_text(Path::new("k"), "65537\n").unwrap_err();
        assert!(matches!(err, KeyFileError::MissingLine { field: "modulus", .. }));
    }

    #[test]
    fn test_parse_invalid_number() {
        let err = parse_key_text(Path::new("k"), "65537\n0x1234\n").unwrap_err();
        assert!(matches!(err, KeyFileError::InvalidNumber { field: "modulus", .. }));

        let err = parse_key_text(Path::new("k"), "-3\n3233\n").unwrap_err();
        assert!(matches!(err, KeyFileError::InvalidNumber { field: "exponent", .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_private_key(&temp_path("does-not-exist")).unwrap_err();
        assert!(matches!(err, KeyFileError::Io { .. }));
    }

    #[test]
    fn test_load_unusable_key() {
        let path = temp_path("zero-modulus.key");
        fs::write(&path, "3\n0\n").unwrap();
        let err = load_public_key(&path).unwrap_err();
        assert!(matches!(err, KeyFileError::InvalidKey { .. }));
        fs::remove_file(path).unwrap();
    }
}

// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::thread_rng;

use crate::error::{Error, Result};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Result of modular exponentiation on a padded block, always below the modulus
pub type CipherInteger = BigUint;

/// Small primes used to discard most candidates before Miller-Rabin
const SMALL_PRIMES: [u32; 24] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian, unsigned)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to bytes (big-endian, minimal length)
pub fn to_bytes(n: &RsaBigInt) -> Vec<u8> {
    n.to_bytes_be()
}

/// Number of bytes needed to hold any value below `modulus`
pub fn byte_len(modulus: &RsaBigInt) -> usize {
    ((modulus.bits() + 7) / 8) as usize
}

/// Modular exponentiation: base^exponent mod modulus
///
/// Result lies in `[0, modulus)`. The same primitive serves encryption with
/// the public exponent and decryption with the private one.
pub fn power_mod(base: &RsaBigInt, exponent: &RsaBigInt, modulus: &RsaBigInt) -> Result<RsaBigInt> {
    if modulus.is_zero() {
        return Err(Error::InvalidKey("modulus must be positive".to_string()));
    }
    if modulus.is_one() {
        return Ok(RsaBigInt::zero());
    }
    // num-bigint switches to Montgomery multiplication for odd moduli
    Ok(base.modpow(exponent, modulus))
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() {
        return None;
    }

    let a = BigInt::from_biguint(Sign::Plus, a.clone());
    let m = BigInt::from_biguint(Sign::Plus, m.clone());
    let egcd = a.extended_gcd(&m);

    if !egcd.gcd.is_one() {
        return None;
    }

    egcd.x.mod_floor(&m).to_biguint()
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime
pub fn is_probable_prime(n: &RsaBigInt, iterations: u32) -> bool {
    let two = RsaBigInt::from(2u8);
    if n < &two {
        return false;
    }
    if n == &two {
        return true;
    }
    if n.is_even() {
        return false;
    }

    for &p in SMALL_PRIMES.iter() {
        let p = RsaBigInt::from(p);
        if n == &p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let mut rng = thread_rng();

    'witness: for _ in 0..iterations {
        // Pick random witness a in [2, n-1)
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // Composite
        return false;
    }

    // Probably prime
    true
}

/// Generate a random prime of exactly `bit_length` bits
///
/// The two top bits are forced on so that the product of two such primes
/// has exactly twice as many bits. Fewer than two bits leave no room for that.
pub fn random_prime(bit_length: u32) -> Result<RsaBigInt> {
    if bit_length < 2 {
        return Err(Error::KeyGeneration(format!(
            "cannot generate a {bit_length} bit prime"
        )));
    }

    let mut rng = thread_rng();
    let lower = RsaBigInt::from(3u8) << (bit_length - 2);
    let upper = RsaBigInt::one() << bit_length;

    loop {
        let mut candidate = rng.gen_biguint_range(&lower, &upper);
        if candidate.is_even() {
            candidate += 1u8;
        }
        if candidate < upper && is_probable_prime(&candidate, 20) {
            return Ok(candidate);
        }
    }
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_mod() {
        // 3^5 mod 7 = 243 mod 7 = 5
        let result = power_mod(&from_u64(3), &from_u64(5), &from_u64(7)).unwrap();
        assert_eq!(result, from_u64(5));
    }

    #[test]
    fn test_power_mod_reduces_base() {
        // 10 ≡ 3 (mod 7)
        let result = power_mod(&from_u64(10), &from_u64(5), &from_u64(7)).unwrap();
        assert_eq!(result, from_u64(5));
        assert_eq!(power_mod(&from_u64(9), &from_u64(0), &from_u64(7)).unwrap(), from_u64(1));
        assert!(power_mod(&from_u64(9), &from_u64(3), &from_u64(1)).unwrap().is_zero());
    }

    #[test]
    fn test_power_mod_zero_modulus() {
        let result = power_mod(&from_u64(3), &from_u64(5), &RsaBigInt::zero());
        assert!(matches!(result, Err(Error::InvalidKey(_))));
    }

    #[test]
    fn test_power_mod_large_textbook_rsa() {
        // p = 61, q = 53, n = 3233, e = 17, d = 2753
        let n = from_u64(3233);
        let c = power_mod(&from_u64(65), &from_u64(17), &n).unwrap();
        assert_eq!(c, from_u64(2790));
        assert_eq!(power_mod(&c, &from_u64(2753), &n).unwrap(), from_u64(65));
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        let a = from_u64(3);
        let m = from_u64(7);
        let inv = mod_inverse(&a, &m).unwrap();
        assert_eq!(inv, from_u64(5));
        assert_eq!((a * inv) % m, from_u64(1));

        assert_eq!(mod_inverse(&from_u64(17), &from_u64(3120)), Some(from_u64(2753)));
        assert_eq!(mod_inverse(&from_u64(6), &from_u64(9)), None);
    }

    #[test]
    fn test_is_probable_prime() {
        assert!(is_probable_prime(&from_u64(2), 5));
        assert!(is_probable_prime(&from_u64(3), 5));
        assert!(is_probable_prime(&from_u64(7), 5));
        assert!(is_probable_prime(&from_u64(104_729), 5));
        assert!(!is_probable_prime(&from_u64(4), 5));
        assert!(!is_probable_prime(&from_u64(9), 5));
        // Carmichael number
        assert!(!is_probable_prime(&from_u64(561), 5));
    }

    #[test]
    fn test_random_prime_bit_length() {
        let p = random_prime(128).unwrap();
        assert_eq!(p.bits(), 128);
        assert!(is_probable_prime(&p, 10));
    }

    #[test]
    fn test_random_prime_rejects_tiny_sizes() {
        assert!(matches!(random_prime(0), Err(Error::KeyGeneration(_))));
        assert!(matches!(random_prime(1), Err(Error::KeyGeneration(_))));
        assert_eq!(random_prime(2).unwrap(), from_u64(3));
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(byte_len(&from_u64(255)), 1);
        assert_eq!(byte_len(&from_u64(256)), 2);
        assert_eq!(byte_len(&(RsaBigInt::one() << 2047u32)), 256);
    }
}

//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! The cost of a derivation is linear in the iteration count. That cost is
//! the whole point: it is paid once per login and once per guess.

use std::num::NonZeroU32;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

/// Derive `out.len()` bytes from a password and salt into `out`.
///
/// Lets callers derive straight into zeroizing storage.
pub fn derive_hash_into(password: &[u8], salt: &[u8], iterations: NonZeroU32, out: &mut [u8]) {
    pbkdf2_hmac::<Sha256>(password, salt, iterations.get(), out);
}

/// Derive a hash of `output_length` bytes from a password and salt.
///
/// # Postconditions
/// - Returns exactly `output_length` bytes
/// - Identical inputs always produce identical output
///
/// # Security
/// - No bounds are placed on `iterations` or `output_length`. Both scale
///   the running time, so neither may come from an untrusted party.
pub fn derive_hash(
    password: &[u8],
    salt: &[u8],
    iterations: NonZeroU32,
    output_length: usize,
) -> Vec<u8> {
    let mut hash = vec![0u8; output_length];
    derive_hash_into(password, salt, iterations, &mut hash);
    hash
}

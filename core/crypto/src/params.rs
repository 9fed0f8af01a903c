//! Fixed hashing parameters.
//!
//! These are compile-time constants on purpose: iteration count, salt length
//! and output length must never be reachable from untrusted input. Records
//! store their own iteration count, so raising `DEFAULT_ITERATIONS` later
//! keeps existing records verifiable.

use std::num::NonZeroU32;

/// Identifier of the key derivation function used for every record.
pub const ALGORITHM_ID: &str = "pbkdf2-sha256";

/// Number of PBKDF2 rounds for newly created records.
pub const DEFAULT_ITERATIONS: NonZeroU32 = match NonZeroU32::new(100_000) {
    Some(n) => n,
    None => panic!("DEFAULT_ITERATIONS must be non-zero"),
};

/// Length of generated salts in bytes.
pub const SALT_LENGTH: usize = 32;

/// Length of derived hashes in bytes.
///
/// Equal to the SHA-256 output size, so PBKDF2 computes a single block and
/// every stored byte costs the full iteration count.
pub const HASH_LENGTH: usize = 32;

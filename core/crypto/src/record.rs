//! Password records: creation and constant-time verification.
//!
//! A record bundles the iteration count, salt and hash of one password.
//! It is created once at enrollment and only read afterwards.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::kdf::{derive_hash, derive_hash_into};
use crate::params::{DEFAULT_ITERATIONS, HASH_LENGTH, SALT_LENGTH};
use crate::salt::generate_salt;

/// Stored form of a password: iteration count, salt and derived hash.
///
/// # Security
/// Never let an untrusted party choose the iteration count. A huge value
/// turns every verification into a denial of service.
#[derive(Clone, Serialize, Deserialize)]
pub struct PasswordRecord {
    iterations: NonZeroU32,
    #[serde(with = "base64_bytes")]
    salt: Vec<u8>,
    #[serde(with = "base64_bytes")]
    hash: Vec<u8>,
}

impl PasswordRecord {
    /// Create a record from a password with a fresh salt and the default
    /// iteration count.
    ///
    /// # Panics
    /// Panics if the OS random source is unavailable.
    pub fn new(password: &[u8]) -> Self {
        Self::with_iterations(password, DEFAULT_ITERATIONS)
    }

    /// Create a record with a fresh salt and an explicit iteration count.
    ///
    /// Only for iteration counts chosen by the system itself.
    ///
    /// # Panics
    /// Panics if the OS random source is unavailable.
    pub fn with_iterations(password: &[u8], iterations: NonZeroU32) -> Self {
        let record = Self::with_salt(password, &generate_salt(), iterations);
        debug!(iterations = iterations.get(), "Created password record");
        record
    }

    /// Create a record from a caller-supplied salt.
    ///
    /// Deterministic; `new` and `with_iterations` are the normal entry points.
    pub fn with_salt(password: &[u8], salt: &[u8], iterations: NonZeroU32) -> Self {
        Self {
            iterations,
            salt: salt.to_vec(),
            hash: derive_hash(password, salt, iterations, HASH_LENGTH),
        }
    }

    /// Rebuild a record from fields returned by storage.
    ///
    /// No validation is done here. A hash of the wrong length simply never
    /// verifies.
    pub fn from_parts(iterations: NonZeroU32, salt: Vec<u8>, hash: Vec<u8>) -> Self {
        Self {
            iterations,
            salt,
            hash,
        }
    }

    /// Number of KDF rounds used to derive the hash.
    pub fn iterations(&self) -> NonZeroU32 {
        self.iterations
    }

    /// Salt bytes.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Stored hash bytes.
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// Check whether `candidate` is the password this record was created from.
    ///
    /// # Returns
    /// - `true` if the stored hash is exactly `HASH_LENGTH` bytes and equals
    ///   the hash derived from `candidate`
    /// - `false` otherwise, including for truncated or overlong stored hashes
    ///
    /// # Security
    /// - The derived hash is zeroized after comparison
    /// - Comparison time depends only on input lengths
    pub fn verify(&self, candidate: &[u8]) -> bool {
        let mut derived = Zeroizing::new([0u8; HASH_LENGTH]);
        derive_hash_into(candidate, &self.salt, self.iterations, &mut derived[..]);

        // Never compare fewer bytes than a full hash.
        let matched =
            self.hash.len() == HASH_LENGTH && constant_time_eq(&derived[..], &self.hash);

        debug!(
            iterations = self.iterations.get(),
            matched,
            "Verified password"
        );
        matched
    }

    /// Whether this record was created with parameters other than the current
    /// constants and should be replaced after the next successful verification.
    pub fn needs_rehash(&self) -> bool {
        self.iterations != DEFAULT_ITERATIONS
            || self.salt.len() != SALT_LENGTH
            || self.hash.len() != HASH_LENGTH
    }
}

/// Compare two byte slices in constant time.
///
/// Returns `false` for slices of different length. Otherwise the running
/// time does not depend on where, or whether, the contents differ.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

impl Drop for PasswordRecord {
    fn drop(&mut self) {
        self.hash.zeroize();
    }
}

impl fmt::Display for PasswordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PasswordRecord {{ iterations: {}, salt: {}, hash: {} }}",
            self.iterations,
            hex::encode(&self.salt),
            hex::encode(&self.hash)
        )
    }
}

impl fmt::Debug for PasswordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordRecord")
            .field("iterations", &self.iterations)
            .field("salt", &hex::encode(&self.salt))
            .field("hash", &format_args!("[REDACTED; {} bytes]", self.hash.len()))
            .finish()
    }
}

/// Serde adapter storing byte fields as padded base64 strings.
mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

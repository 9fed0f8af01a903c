//! Salted password hashing and verification.
//!
//! This module provides:
//! - Salt generation from the OS random source
//! - Key derivation using PBKDF2-HMAC-SHA256
//! - Password records with constant-time verification
//! - A single-line text encoding for storing records
//!
//! # Security Guarantees
//! - Plaintext passwords are never stored or logged
//! - Hash comparison runs in constant time
//! - Failure to read the random source panics instead of producing a weak salt
//!
//! # Example
//! ```
//! use passhash_crypto::PasswordRecord;
//!
//! let record = PasswordRecord::new(b"hello, world");
//! // Store `record` somewhere...
//! assert!(record.verify(b"hello, world"));
//! assert!(!record.verify(b"wrong"));
//! ```

pub mod encoding;
pub mod kdf;
pub mod params;
pub mod record;
pub mod salt;

pub use encoding::{decode, encode};
pub use kdf::{derive_hash, derive_hash_into};
pub use params::{ALGORITHM_ID, DEFAULT_ITERATIONS, HASH_LENGTH, SALT_LENGTH};
pub use record::{constant_time_eq, PasswordRecord};
pub use salt::generate_salt;

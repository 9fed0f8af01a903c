//! Common types shared across the passhash crates.
//!
//! Only the error type lives here for now; the hashing primitives are in
//! `passhash-crypto`.

pub mod error;

pub use error::{Error, Result};

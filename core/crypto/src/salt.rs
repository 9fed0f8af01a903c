//! Salt generation from the operating system random source.

use crate::params::SALT_LENGTH;

/// Generate a fresh random salt.
///
/// # Panics
/// Panics if the OS random source cannot fill the buffer. A salt that did
/// not come from the random source is never returned.
pub fn generate_salt() -> [u8; SALT_LENGTH] {
    let mut salt = [0u8; SALT_LENGTH];
    if let Err(e) = getrandom::fill(&mut salt) {
        panic!("can't read from OS random source: {}", e);
    }
    salt
}

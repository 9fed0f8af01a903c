//! Single-line text encoding of password records.
//!
//! Format: `$pbkdf2-sha256$i=<iterations>$<salt>$<hash>`, with salt and hash
//! in standard base64 without padding. Storage that only holds strings can
//! keep a record in one column and hand it back unchanged.

use std::num::NonZeroU32;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use tracing::trace;

use crate::params::ALGORITHM_ID;
use crate::record::PasswordRecord;
use passhash_common::{Error, Result};

/// Encode a record as a single line of text.
pub fn encode(record: &PasswordRecord) -> String {
    format!(
        "${}$i={}${}${}",
        ALGORITHM_ID,
        record.iterations(),
        STANDARD_NO_PAD.encode(record.salt()),
        STANDARD_NO_PAD.encode(record.hash())
    )
}

/// Decode a record produced by [`encode`].
///
/// # Errors
/// - `InvalidInput` if the layout, algorithm or iteration count is wrong
/// - `Serialization` if the salt or hash is not valid base64
///
/// Salt and hash lengths are not checked; a short hash fails verification.
pub fn decode(encoded: &str) -> Result<PasswordRecord> {
    decode_fields(encoded)
        .inspect_err(|e| trace!(error = %e, "Failed to decode password record"))
}

fn decode_fields(encoded: &str) -> Result<PasswordRecord> {
    let mut fields = encoded.split('$');

    if fields.next() != Some("") {
        return Err(Error::InvalidInput(
            "Encoded record must start with '$'".to_string(),
        ));
    }

    let algorithm = next_field(&mut fields, "algorithm")?;
    if algorithm != ALGORITHM_ID {
        return Err(Error::InvalidInput(format!(
            "Unsupported algorithm: {}",
            algorithm
        )));
    }

    let iterations = parse_iterations(next_field(&mut fields, "iterations")?)?;
    let salt = decode_base64(next_field(&mut fields, "salt")?, "salt")?;
    let hash = decode_base64(next_field(&mut fields, "hash")?, "hash")?;

    if fields.next().is_some() {
        return Err(Error::InvalidInput(
            "Unexpected trailing field in encoded record".to_string(),
        ));
    }

    Ok(PasswordRecord::from_parts(iterations, salt, hash))
}

fn next_field<'a>(fields: &mut impl Iterator<Item = &'a str>, name: &str) -> Result<&'a str> {
    fields
        .next()
        .ok_or_else(|| Error::InvalidInput(format!("Missing {} field", name)))
}

fn parse_iterations(field: &str) -> Result<NonZeroU32> {
    let count = field
        .strip_prefix("i=")
        .ok_or_else(|| Error::InvalidInput("Iteration field must start with 'i='".to_string()))?;

    let count: u32 = count
        .parse()
        .map_err(|e| Error::InvalidInput(format!("Invalid iteration count: {}", e)))?;

    NonZeroU32::new(count)
        .ok_or_else(|| Error::InvalidInput("Iteration count must be non-zero".to_string()))
}

fn decode_base64(field: &str, name: &str) -> Result<Vec<u8>> {
    STANDARD_NO_PAD
        .decode(field)
        .map_err(|e| Error::Serialization(format!("Invalid {} encoding: {}", name, e)))
}

impl FromStr for PasswordRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> NonZeroU32 {
        NonZeroU32::new(10).unwrap()
    }

    fn is_invalid_input(result: Result<PasswordRecord>) -> bool {
        matches!(result, Err(Error::InvalidInput(_)))
    }

    #[test]
    fn test_encode_layout() {
        let record =
            PasswordRecord::from_parts(NonZeroU32::new(3).unwrap(), vec![0, 1, 2], vec![0xff; 4]);

        assert_eq!(encode(&record), "$pbkdf2-sha256$i=3$AAEC$/////w");
    }

    #[test]
    fn test_encode_decode_verifies() {
        let record = PasswordRecord::with_iterations(b"hello, world", fast());

        let decoded = decode(&encode(&record)).unwrap();

        assert_eq!(decoded.iterations(), record.iterations());
        assert_eq!(decoded.salt(), record.salt());
        assert_eq!(decoded.hash(), record.hash());
        assert!(decoded.verify(b"hello, world"));
        assert!(!decoded.verify(b"hello, world!"));
    }

    #[test]
    fn test_from_str() {
        let record = PasswordRecord::with_iterations(b"pw", fast());
        let parsed: PasswordRecord = encode(&record).parse().unwrap();

        assert!(parsed.verify(b"pw"));
    }

    #[test]
    fn test_decode_empty_salt() {
        let record = PasswordRecord::with_salt(b"pw", b"", fast());
        let decoded = decode(&encode(&record)).unwrap();

        assert!(decoded.salt().is_empty());
        assert!(decoded.verify(b"pw"));
    }

    #[test]
    fn test_decode_rejects_missing_prefix() {
        assert!(is_invalid_input(decode("pbkdf2-sha256$i=3$AAEC$AAEC")));
    }

    #[test]
    fn test_decode_rejects_wrong_algorithm() {
        assert!(is_invalid_input(decode("$argon2id$i=3$AAEC$AAEC")));
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        assert!(is_invalid_input(decode("")));
        assert!(is_invalid_input(decode("$pbkdf2-sha256")));
        assert!(is_invalid_input(decode("$pbkdf2-sha256$i=3$AAEC")));
    }

    #[test]
    fn test_decode_rejects_bad_iterations() {
        assert!(is_invalid_input(decode("$pbkdf2-sha256$i=0$AAEC$AAEC")));
        assert!(is_invalid_input(decode("$pbkdf2-sha256$i=abc$AAEC$AAEC")));
        assert!(is_invalid_input(decode("$pbkdf2-sha256$3$AAEC$AAEC")));
        assert!(is_invalid_input(decode("$pbkdf2-sha256$i=-1$AAEC$AAEC")));
    }

    #[test]
    fn test_decode_rejects_trailing_field() {
        assert!(is_invalid_input(decode("$pbkdf2-sha256$i=3$AAEC$AAEC$extra")));
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert!(matches!(
            decode("$pbkdf2-sha256$i=3$!!!!$AAEC"),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            decode("$pbkdf2-sha256$i=3$AAEC$AAEC=="),
            Err(Error::Serialization(_))
        ));
    }
}

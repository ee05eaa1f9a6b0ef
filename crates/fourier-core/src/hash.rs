use std::fmt::Write;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::FourierError;
use crate::serde::to_canonical_json_bytes;

/// Lowercase hex SHA-256 of the canonical JSON encoding of `value`.
///
/// Sweep reports and their options are identified by this digest.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, FourierError> {
    let digest = Sha256::digest(to_canonical_json_bytes(value)?);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    Ok(hex)
}

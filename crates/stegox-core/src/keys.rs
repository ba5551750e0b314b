//! Derivation of the public lookup handle and the password digest.
//!
//! Neither value is secret key material. The lookup key is a short,
//! best-effort handle a storage collaborator files artifacts under, the
//! password digest is what gets stored and compared instead of the raw
//! password. Collision detection on the lookup key is the storage side's
//! job, not ours.

use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};

/// Hex length of the lookup handle.
const LOOKUP_KEY_LEN: usize = 10;

/// Milliseconds since the Unix epoch, the same clock the original client
/// feeds into its key derivation.
pub fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Derives the public lookup handle: the first 10 hex characters of
/// `SHA-256(plaintext || password || timestamp)`, timestamp rendered as the
/// decimal millisecond count.
pub fn lookup_key(plaintext: &str, password: &str, timestamp_millis: u128) -> String {
    let digest = Sha256::new()
        .chain_update(plaintext)
        .chain_update(password)
        .chain_update(timestamp_millis.to_string())
        .finalize();

    let mut key = hex::encode(digest);
    key.truncate(LOOKUP_KEY_LEN);
    key
}

/// Derives the digest stored in place of the raw password:
/// full hex `SHA-256(password)`.
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_a_ten_char_hex_handle() {
        let key = lookup_key("Hi", "secret", 1_700_000_000_000);
        assert_eq!(key.len(), 10);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn should_be_deterministic_for_fixed_inputs() {
        let a = lookup_key("Hi", "secret", 42);
        let b = lookup_key("Hi", "secret", 42);
        assert_eq!(a, b);
        assert_ne!(a, lookup_key("Hi", "secret", 43));
    }

    #[test]
    fn should_digest_known_password() {
        // SHA-256("password")
        assert_eq!(
            password_digest("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }
}

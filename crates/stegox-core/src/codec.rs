//! Orchestration of the encode and decode pipelines.
//!
//! Encode: plaintext -> cipher -> length header || ciphertext -> LSB pack.
//! Decode: LSB unpack header -> validate -> unpack payload -> decipher.
//!
//! Both directions run as a single synchronous pass. All validation happens
//! before the first sample is written, so a failed encode leaves the carrier
//! bit-for-bit untouched and a caller never observes a half-written artifact.

use log::debug;

use crate::bit_iterator::{bytes_from_bits, BitIterator};
use crate::carrier::CarrierBuffer;
use crate::crypt;
use crate::error::StegoXError;
use crate::header;
use crate::keys;
use crate::result::Result;

/// What `encode` hands back besides the mutated carrier: the values a storage
/// collaborator persists alongside the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeReceipt {
    /// Public, non-secret retrieval handle.
    pub lookup_key: String,
    /// Hex SHA-256 of the password, stored instead of the password itself.
    pub password_digest: String,
}

/// Encrypts `plaintext` under `password` and embeds it into `carrier`,
/// turning the buffer into the encoded artifact in place.
///
/// Fails with [`StegoXError::CapacityExceeded`] before any mutation when
/// header plus ciphertext do not fit.
pub fn encode(plaintext: &str, password: &str, carrier: &mut CarrierBuffer) -> Result<EncodeReceipt> {
    encode_at(plaintext, password, carrier, keys::now_millis())
}

/// Same as [`encode`], with the lookup key timestamp supplied by the caller.
pub fn encode_at(
    plaintext: &str,
    password: &str,
    carrier: &mut CarrierBuffer,
    timestamp_millis: u128,
) -> Result<EncodeReceipt> {
    let ciphertext = crypt::encrypt(plaintext.as_bytes(), password);

    let required = header::HEADER_BITS + ciphertext.len() * 8;
    let available = carrier.capacity_bits();
    if required > available {
        return Err(StegoXError::CapacityExceeded {
            required,
            available,
        });
    }
    debug!(
        "embedding {required} of {available} bit slots into a {}x{} carrier",
        carrier.width(),
        carrier.height()
    );

    let word = header::encode(ciphertext.len())?;
    let mut payload = Vec::with_capacity(header::HEADER_BYTES + ciphertext.len());
    payload.extend_from_slice(&word);
    payload.extend_from_slice(&ciphertext);

    carrier.pack(BitIterator::new(&payload))?;

    Ok(EncodeReceipt {
        lookup_key: keys::lookup_key(plaintext, password, timestamp_millis),
        password_digest: keys::password_digest(password),
    })
}

/// Extracts and decrypts the message hidden in `carrier`.
///
/// The header is validated against the carrier capacity before any payload
/// bit is read. A result is only returned for a complete, decrypted, valid
/// UTF-8 message, never a truncated best effort.
pub fn decode(carrier: &CarrierBuffer, password: &str) -> Result<String> {
    let word_bits = carrier.unpack(header::HEADER_BITS)?;
    let word: [u8; header::HEADER_BYTES] = bytes_from_bits(word_bits)
        .try_into()
        .expect("32 bits always collect into 4 bytes");

    let byte_len = header::decode(&word, carrier.capacity_bits())?;
    debug!("header announces {byte_len} ciphertext bytes");

    let bits = carrier.unpack(header::HEADER_BITS + byte_len * 8)?;
    let ciphertext = bytes_from_bits(bits.skip(header::HEADER_BITS));

    let plaintext = crypt::decrypt(&ciphertext, password)?;

    String::from_utf8(plaintext).map_err(StegoXError::from)
}

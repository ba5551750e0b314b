//! The fixed 32 bit length header.
//!
//! The first 32 bit slots of a carrier hold one big-endian `u32` with the
//! bit count of the ciphertext that follows. The decode side validates that
//! word before a single payload bit is read, so a tampered or foreign header
//! can never make us walk past the end of the buffer.

use byteorder::{BigEndian, ByteOrder};

use crate::error::StegoXError;
use crate::result::Result;

/// Bit slots the header occupies at the front of every carrier.
pub const HEADER_BITS: usize = 32;
/// Byte width of the header word.
pub const HEADER_BYTES: usize = 4;

/// Encodes a ciphertext byte length as the 32 bit header word.
pub fn encode(byte_len: usize) -> Result<[u8; HEADER_BYTES]> {
    let bit_count: u32 = byte_len
        .checked_mul(8)
        .and_then(|bits| u32::try_from(bits).ok())
        .ok_or(StegoXError::InvalidHeader(u32::MAX))?;

    let mut word = [0u8; HEADER_BYTES];
    BigEndian::write_u32(&mut word, bit_count);

    Ok(word)
}

/// Decodes and validates the header word, returning the ciphertext byte length.
///
/// Fails with [`StegoXError::InvalidHeader`] when the announced bit count is
/// zero, not byte aligned, or larger than what fits into the carrier after
/// the header itself (`capacity_bits - 32`).
pub fn decode(word: &[u8; HEADER_BYTES], capacity_bits: usize) -> Result<usize> {
    let bit_count = BigEndian::read_u32(word);
    let payload_capacity = capacity_bits.saturating_sub(HEADER_BITS);

    if bit_count == 0 || bit_count % 8 != 0 || bit_count as usize > payload_capacity {
        return Err(StegoXError::InvalidHeader(bit_count));
    }

    Ok(bit_count as usize / 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPACITY: usize = 1_000_000;

    #[test]
    fn should_encode_big_endian_bit_count() {
        // 2 bytes -> 16 bits -> 0x00000010
        assert_eq!(encode(2).unwrap(), [0x00, 0x00, 0x00, 0x10]);
    }

    #[test]
    fn should_round_trip_every_small_length() {
        for byte_len in 1..=4096usize {
            let word = encode(byte_len).unwrap();
            assert_eq!(decode(&word, CAPACITY).unwrap(), byte_len);
        }
    }

    #[test]
    fn should_round_trip_the_maximum_representable_length() {
        let byte_len = (u32::MAX / 8) as usize;
        let word = encode(byte_len).unwrap();
        assert_eq!(decode(&word, usize::MAX).unwrap(), byte_len);
    }

    #[test]
    fn should_reject_zero_length() {
        assert!(matches!(
            decode(&[0, 0, 0, 0], CAPACITY),
            Err(StegoXError::InvalidHeader(0))
        ));
    }

    #[test]
    fn should_reject_unaligned_bit_count() {
        assert!(matches!(
            decode(&[0, 0, 0, 0x11], CAPACITY),
            Err(StegoXError::InvalidHeader(0x11))
        ));
    }

    #[test]
    fn should_reject_length_beyond_capacity() {
        // 300 slots leave 268 for the payload, 272 announced bits are too many
        let word = encode(34).unwrap();
        assert!(matches!(
            decode(&word, 300),
            Err(StegoXError::InvalidHeader(272))
        ));
        assert_eq!(decode(&encode(33).unwrap(), 300).unwrap(), 33);
    }

    #[test]
    fn should_reject_oversized_byte_length_on_encode() {
        assert!(encode(usize::MAX).is_err());
        assert!(encode((u32::MAX / 8) as usize + 1).is_err());
    }
}

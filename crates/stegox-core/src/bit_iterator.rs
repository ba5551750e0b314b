//! A bit level view over byte slices.
//!
//! The embedding format is defined in terms of single bits, most significant
//! bit first within each byte. Pack and unpack share this one view so that
//! both directions agree on the ordering.

/// Iterates over the bits of a byte slice, MSB first within each byte.
pub struct BitIterator<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitIterator<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        BitIterator { bytes, pos: 0 }
    }
}

impl Iterator for BitIterator<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = self.bytes.get(self.pos >> 3)?;
        let bit = (byte >> (7 - (self.pos & 7))) & 1;
        self.pos += 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() * 8 - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitIterator<'_> {}

/// Collects single bit values back into bytes, MSB first.
/// The bit count must be a multiple of 8, which the length header guarantees.
pub fn bytes_from_bits(bits: impl Iterator<Item = u8>) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut acc = 0u8;
    let mut n = 0u8;

    for bit in bits {
        acc = (acc << 1) | (bit & 1);
        n += 1;
        if n == 8 {
            bytes.push(acc);
            acc = 0;
            n = 0;
        }
    }

    bytes
}

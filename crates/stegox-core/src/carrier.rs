//! The carrier side of the LSB codec.
//!
//! A carrier is a flat RGBA pixel buffer owned by the caller. Only the least
//! significant bit of the R, G and B samples is ever touched, the alpha
//! channel stays untouched so that fully transparent areas do not start to
//! shimmer. Samples are visited pixel by pixel in buffer order, which makes
//! the traversal identical for packing and unpacking by construction.

use crate::error::StegoXError;
use crate::result::Result;

/// Interleaved channel values per pixel in the buffer.
pub const SAMPLES_PER_PIXEL: usize = 4;
/// Channels per pixel that take part in the embedding (R, G, B).
pub const USABLE_CHANNELS: usize = 3;

/// A borrowed view on a caller owned RGBA pixel buffer.
///
/// The codec holds this view only for the duration of a single call and
/// never retains it.
pub struct CarrierBuffer<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> CarrierBuffer<'a> {
    /// Wraps a flat RGBA buffer. The buffer length must be exactly
    /// `width * height * 4`, everything else is rejected as [`StegoXError::InvalidCarrier`].
    pub fn new(data: &'a mut [u8], width: u32, height: u32) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(SAMPLES_PER_PIXEL));

        match expected {
            Some(len) if len == data.len() && len > 0 => Ok(CarrierBuffer {
                data,
                width,
                height,
            }),
            _ => Err(StegoXError::InvalidCarrier),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bit slots this carrier offers, 3 per pixel.
    pub fn capacity_bits(&self) -> usize {
        self.width as usize * self.height as usize * USABLE_CHANNELS
    }

    /// Buffer indices of the eligible samples, in embedding order:
    /// pixel index ascending, channel R, G, B ascending, alpha skipped.
    fn sample_indices(&self) -> impl Iterator<Item = usize> {
        let pixels = self.width as usize * self.height as usize;
        (0..pixels).flat_map(|px| {
            let base = px * SAMPLES_PER_PIXEL;
            base..base + USABLE_CHANNELS
        })
    }

    /// Writes each bit into the low bit of successive eligible samples.
    ///
    /// Fails with [`StegoXError::CapacityExceeded`] before any sample is
    /// touched when there are more bits than slots. All bits outside the
    /// written low order positions are preserved.
    pub fn pack<B>(&mut self, bits: B) -> Result<()>
    where
        B: ExactSizeIterator<Item = u8>,
    {
        let available = self.capacity_bits();
        if bits.len() > available {
            return Err(StegoXError::CapacityExceeded {
                required: bits.len(),
                available,
            });
        }

        for (idx, bit) in self.sample_indices().zip(bits) {
            let sample = &mut self.data[idx];
            *sample = (*sample & 0xFE) | (bit & 1);
        }

        Ok(())
    }

    /// Reads the low bit of the first `count` eligible samples, in the same
    /// order `pack` writes them.
    ///
    /// Fails with [`StegoXError::BufferTooSmall`] when the carrier has fewer
    /// eligible samples than requested.
    pub fn unpack(&self, count: usize) -> Result<impl Iterator<Item = u8> + '_> {
        let available = self.capacity_bits();
        if count > available {
            return Err(StegoXError::BufferTooSmall {
                requested: count,
                available,
            });
        }

        Ok(self
            .sample_indices()
            .take(count)
            .map(move |idx| self.data[idx] & 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit_iterator::{bytes_from_bits, BitIterator};

    fn buffer(pixels: usize) -> Vec<u8> {
        (0..pixels * SAMPLES_PER_PIXEL).map(|i| i as u8).collect()
    }

    #[test]
    fn should_reject_mismatched_dimensions() {
        let mut data = buffer(9);
        assert!(matches!(
            CarrierBuffer::new(&mut data, 2, 5),
            Err(StegoXError::InvalidCarrier)
        ));
    }

    #[test]
    fn should_reject_zero_sized_carrier() {
        let mut data = Vec::new();
        assert!(matches!(
            CarrierBuffer::new(&mut data, 0, 0),
            Err(StegoXError::InvalidCarrier)
        ));
    }

    #[test]
    fn should_compute_capacity_without_alpha() {
        let mut data = buffer(100);
        let carrier = CarrierBuffer::new(&mut data, 10, 10).unwrap();
        assert_eq!(carrier.capacity_bits(), 300);
    }

    #[test]
    fn should_pack_and_unpack_in_the_same_order() {
        let mut data = buffer(16);
        let mut carrier = CarrierBuffer::new(&mut data, 4, 4).unwrap();
        let message = b"\xA5\x3C";

        carrier.pack(BitIterator::new(message)).unwrap();
        let read = bytes_from_bits(carrier.unpack(16).unwrap());

        assert_eq!(read, message);
    }

    #[test]
    fn should_never_touch_alpha_or_upper_bits() {
        let mut data = buffer(8);
        let pristine = data.clone();
        let mut carrier = CarrierBuffer::new(&mut data, 4, 2).unwrap();

        carrier.pack(BitIterator::new(&[0xFF, 0xFF, 0xFF])).unwrap();

        for (i, (now, before)) in data.iter().zip(pristine.iter()).enumerate() {
            if i % SAMPLES_PER_PIXEL == 3 {
                assert_eq!(now, before, "alpha sample {i} was modified");
            } else {
                assert_eq!(now & 0xFE, before & 0xFE, "upper bits of sample {i} changed");
            }
        }
    }

    #[test]
    fn should_fail_packing_beyond_capacity_without_mutation() {
        let mut data = buffer(4);
        let pristine = data.clone();
        let mut carrier = CarrierBuffer::new(&mut data, 2, 2).unwrap();

        // 2 bytes = 16 bits > 12 slots
        let err = carrier.pack(BitIterator::new(b"hi")).unwrap_err();
        assert!(matches!(
            err,
            StegoXError::CapacityExceeded {
                required: 16,
                available: 12
            }
        ));
        assert_eq!(data, pristine);
    }

    #[test]
    fn should_fail_unpacking_more_than_available() {
        let mut data = buffer(4);
        let carrier = CarrierBuffer::new(&mut data, 2, 2).unwrap();
        assert!(matches!(
            carrier.unpack(13).err(),
            Some(StegoXError::BufferTooSmall {
                requested: 13,
                available: 12
            })
        ));
    }
}

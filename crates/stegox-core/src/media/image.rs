//! Image file handling around the codec.
//!
//! The codec itself only ever sees a flat RGBA buffer. This module is the
//! collaborator that produces such buffers from image files and writes the
//! encoded artifact back out. Artifacts are always saved as PNG: any lossy
//! re-encode of the pixel data would wipe the embedded LSBs, that is an
//! environmental precondition of the format and not something the codec can
//! defend against.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::debug;

use super::Persist;
use crate::carrier::CarrierBuffer;
use crate::error::StegoXError;
use crate::result::Result;

/// An in-memory RGBA image that lends its pixel buffer out as a carrier.
#[derive(Debug)]
pub struct ImageCarrier {
    img: RgbaImage,
}

impl ImageCarrier {
    pub fn from_image(img: RgbaImage) -> Self {
        Self { img }
    }

    /// Opens a carrier image from disk. PNG and JPEG decode; anything else is
    /// [`StegoXError::UnsupportedMedia`]. JPEG is only useful on the encode
    /// side, since saving always goes through PNG.
    pub fn from_file(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .ok_or(StegoXError::UnsupportedMedia)?;

        match ext.as_str() {
            "png" | "jpg" | "jpeg" => {
                let img = image::open(path)
                    .map_err(|_e| StegoXError::InvalidImageMedia)?
                    .to_rgba8();
                debug!("loaded {}x{} carrier from {path:?}", img.width(), img.height());
                Ok(Self::from_image(img))
            }
            _ => Err(StegoXError::UnsupportedMedia),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Lends the raw pixel buffer out as a [`CarrierBuffer`] for one codec call.
    pub fn as_carrier(&mut self) -> Result<CarrierBuffer<'_>> {
        let (width, height) = self.img.dimensions();
        let data: &mut [u8] = &mut self.img;

        CarrierBuffer::new(data, width, height)
    }

    pub fn into_inner(self) -> RgbaImage {
        self.img
    }
}

impl Persist for ImageCarrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        self.img
            .save_with_format(file, ImageFormat::Png)
            .map_err(|_e| StegoXError::ImageEncodingError)
    }
}

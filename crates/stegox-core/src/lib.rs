//! # stegoX Core API
//!
//! Hides a password protected text message inside the pixels of an image and
//! gets it back out again. The message is encrypted, prefixed with a 32 bit
//! length header and written into the least significant bits of the R, G and
//! B samples; alpha is never touched. Encoding also derives a public lookup
//! key and a password digest, the two values a storage backend files the
//! artifact under.
//!
//! # Usage Examples
//!
//! ## Round trip over a raw pixel buffer
//!
//! ```rust
//! use stegox_core::{codec, CarrierBuffer};
//!
//! let (width, height) = (32, 32);
//! let mut pixels = vec![0xEFu8; (width * height * 4) as usize];
//!
//! let mut carrier = CarrierBuffer::new(&mut pixels, width, height).unwrap();
//! let receipt = codec::encode("Hi", "SuperSecret42", &mut carrier).unwrap();
//! assert_eq!(receipt.lookup_key.len(), 10);
//!
//! let carrier = CarrierBuffer::new(&mut pixels, width, height).unwrap();
//! assert_eq!(codec::decode(&carrier, "SuperSecret42").unwrap(), "Hi");
//! ```
//!
//! ## Hide a message inside an image file
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let artifact = temp_dir.path().join("image-with-a-message-inside.png");
//!
//! let receipt = stegox_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_password("SuperSecret42")
//!     .with_image("tests/images/carrier-120x90.png")
//!     .with_output(&artifact)
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = stegox_core::api::reveal::prepare()
//!     .with_image(&artifact)
//!     .with_password("SuperSecret42")
//!     .execute()
//!     .expect("Failed to reveal message from image");
//!
//! assert_eq!(message, "Hello, World!");
//! ```

pub mod api;
pub mod bit_iterator;
pub mod carrier;
pub mod codec;
pub mod commands;
pub mod crypt;
pub mod error;
pub mod header;
pub mod keys;
pub mod media;
pub mod result;

pub use crate::bit_iterator::BitIterator;
pub use crate::carrier::CarrierBuffer;
pub use crate::codec::EncodeReceipt;
pub use crate::error::StegoXError;
pub use crate::result::Result;

use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoXError {
    /// Represents a payload that does not fit into the carrier. Counted in bit slots,
    /// including the 32 bit length header
    #[error("Capacity exceeded: the payload needs {required} bit slots but the carrier only offers {available}")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents a length header that cannot be trusted: zero, not byte aligned
    /// or pointing past the end of the carrier
    #[error("Invalid length header: {0} payload bits")]
    InvalidHeader(u32),

    /// Represents a carrier with fewer eligible samples than an unpack requested
    #[error("Buffer too small: {requested} bits requested but only {available} available")]
    BufferTooSmall { requested: usize, available: usize },

    /// Represents a ciphertext/password combination the cipher rejects.
    /// Note that the cipher carries no authentication tag, so a wrong password
    /// may also decrypt "successfully" into garbage instead of raising this
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Represents a pixel buffer whose length does not match width * height * 4,
    /// or an image with a zero dimension
    #[error("Carrier buffer does not match the given RGBA dimensions")]
    InvalidCarrier,

    /// Represents invalid UTF-8 bytes where decrypted message text was expected
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents an unsupported carrier media, for example a GIF or a movie file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a failure when encoding an image file
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing password")]
    MissingPassword,
}

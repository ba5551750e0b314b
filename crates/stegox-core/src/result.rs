use crate::error::StegoXError;

pub type Result<T> = std::result::Result<T, StegoXError>;

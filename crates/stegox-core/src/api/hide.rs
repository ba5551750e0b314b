use std::path::{Path, PathBuf};

use crate::codec::{self, EncodeReceipt};
use crate::media::{ImageCarrier, Persist};
use crate::StegoXError;

use super::Password;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
}

impl HideApi {
    /// The message that will be hidden inside the image
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// The carrier image, used readonly
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The encoded artifact will be saved here, always as PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password used for encrypting the message
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the hide process and block until it is finished.
    /// Returns the lookup key and password digest for the storage side.
    pub fn execute(self) -> Result<EncodeReceipt, StegoXError> {
        let Some(message) = self.message else {
            return Err(StegoXError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(StegoXError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoXError::TargetNotSet);
        };
        let Some(password) = self.password.as_ref().as_ref() else {
            return Err(StegoXError::MissingPassword);
        };

        let mut carrier = ImageCarrier::from_file(&image)?;
        let receipt = codec::encode(&message, password, &mut carrier.as_carrier()?)?;
        carrier.save_as(&output)?;

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_insist_on_a_message() {
        let err = prepare()
            .with_image("carrier.png")
            .with_output("out.png")
            .with_password("pw")
            .execute()
            .unwrap_err();
        assert!(matches!(err, StegoXError::MissingMessage));
    }

    #[test]
    fn should_insist_on_a_password() {
        let err = prepare()
            .with_message("hello")
            .with_image("carrier.png")
            .with_output("out.png")
            .execute()
            .unwrap_err();
        assert!(matches!(err, StegoXError::MissingPassword));
    }

    #[test]
    fn should_insist_on_carrier_and_target() {
        let err = prepare()
            .with_message("hello")
            .with_password("pw")
            .execute()
            .unwrap_err();
        assert!(matches!(err, StegoXError::CarrierNotSet));

        let err = prepare()
            .with_message("hello")
            .with_password("pw")
            .with_image("carrier.png")
            .execute()
            .unwrap_err();
        assert!(matches!(err, StegoXError::TargetNotSet));
    }
}

use std::path::{Path, PathBuf};

use crate::codec;
use crate::media::ImageCarrier;
use crate::StegoXError;

use super::Password;

pub fn prepare() -> RevealApi {
    RevealApi::default()
}

#[derive(Default, Debug)]
pub struct RevealApi {
    secret_image: Option<PathBuf>,
    password: Password,
}

impl RevealApi {
    /// This is the artifact image that contains the message to be revealed
    pub fn with_image<A: AsRef<Path>>(mut self, secret_image: A) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Set the password the message was encrypted with
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the reveal process and block until it is finished.
    /// Returns the hidden message.
    pub fn execute(self) -> Result<String, StegoXError> {
        let Some(secret_image) = self.secret_image else {
            return Err(StegoXError::CarrierNotSet);
        };
        let Some(password) = self.password.as_ref().as_ref() else {
            return Err(StegoXError::MissingPassword);
        };

        let mut carrier = ImageCarrier::from_file(&secret_image)?;
        codec::decode(&carrier.as_carrier()?, password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_insist_on_image_and_password() {
        let err = prepare().with_password("pw").execute().unwrap_err();
        assert!(matches!(err, StegoXError::CarrierNotSet));

        let err = prepare().with_image("artifact.png").execute().unwrap_err();
        assert!(matches!(err, StegoXError::MissingPassword));
    }
}

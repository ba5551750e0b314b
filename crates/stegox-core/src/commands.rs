use std::path::Path;

use crate::codec::EncodeReceipt;
use crate::StegoXError;

/// Hides `message` in the image at `carrier` and saves the artifact to
/// `output`, returning the storage receipt.
pub fn hide(
    carrier: &Path,
    output: &Path,
    message: &str,
    password: &str,
) -> Result<EncodeReceipt, StegoXError> {
    crate::api::hide::prepare()
        .with_message(message)
        .with_image(carrier)
        .with_output(output)
        .with_password(password)
        .execute()
}

/// Reveals the message hidden in the image at `artifact`.
pub fn reveal(artifact: &Path, password: &str) -> Result<String, StegoXError> {
    crate::api::reveal::prepare()
        .with_image(artifact)
        .with_password(password)
        .execute()
}

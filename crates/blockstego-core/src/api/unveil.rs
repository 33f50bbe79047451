use std::path::{Path, PathBuf};

use log::debug;

use super::shared::{read_file, write_file};
use super::Password;
use crate::{pipeline, CodecOptions, StegoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_image: Option<PathBuf>,
    output_file: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Optionally store the message in this file as well
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Set the password the message was encrypted with
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process, blocks until it is finished and returns the message
    pub fn execute(self) -> Result<String, StegoError> {
        let Some(secret_image) = self.secret_image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(password) = self.password.as_ref() else {
            return Err(StegoError::MissingPassword);
        };

        let data = read_file(&secret_image)?;
        let message = pipeline::decode_with(&data, password, &self.options)?;
        debug!("unveiled {} bytes from {secret_image:?}", message.len());

        if let Some(output_file) = self.output_file {
            write_file(&output_file, message.as_bytes())?;
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fast_options, png_bytes, textured_rgb};
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let secret_image = temp_dir.path().join("secret.png");
        let stego = pipeline::encode_with(
            &png_bytes(&textured_rgb(256, 256, 6)),
            "Hello World",
            "Secret42",
            &fast_options(),
        )
        .unwrap();
        std::fs::write(&secret_image, stego).unwrap();

        let message = crate::api::unveil::prepare()
            .from_secret_file(&secret_image)
            .using_password("Secret42")
            .with_options(fast_options())
            .into_output_file(temp_dir.path().join("secret-message.txt"))
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(message, "Hello World");
        let written = std::fs::read_to_string(temp_dir.path().join("secret-message.txt"))
            .expect("Failed to read file");
        assert_eq!(written, "Hello World");
    }

    #[test]
    fn should_insist_on_image_and_password() {
        let result = prepare().using_password("pw").execute();
        assert!(matches!(result, Err(StegoError::CarrierNotSet)));

        let result = prepare().from_secret_file("secret.png").execute();
        assert!(matches!(result, Err(StegoError::MissingPassword)));
    }
}

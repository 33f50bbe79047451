use std::path::{Path, PathBuf};

use log::debug;

use super::shared::{read_file, write_file};
use super::Password;
use crate::{pipeline, CodecOptions, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// The carrier image, PNG, JPEG, BMP or WebP
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where the PNG with the hidden message goes
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password used for encrypting the message
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    pub fn execute(self) -> Result<(), StegoError> {
        let Some(message) = self.message else {
            return Err(StegoError::MissingMessage);
        };
        let Some(password) = self.password.as_ref() else {
            return Err(StegoError::MissingPassword);
        };
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };

        let carrier = read_file(&image)?;
        let stego = pipeline::encode_with(&carrier, &message, password, &self.options)?;
        write_file(&output, &stego)?;
        debug!("hid {} bytes from {image:?} into {output:?}", message.len());

        Ok(())
    }
}

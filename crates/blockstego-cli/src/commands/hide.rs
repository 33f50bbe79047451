use std::path::PathBuf;

use blockstego_core::CodecOptions;
use clap::Args;

use crate::CliResult;

/// Hides an encrypted text message in an image, the result is always a PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the message, asked for when missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier image such as PNG, JPEG, BMP or WebP, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = match self.password {
            Some(password) => password,
            None => crate::cli::ask_for_password(true)?,
        };

        blockstego_core::commands::hide(
            &self.media,
            &self.write_to_file,
            Some(self.message),
            Some(password),
            options,
        )
    }
}

use std::path::PathBuf;

use blockstego_core::CodecOptions;
use clap::Args;

use crate::CliResult;

/// Unveils a hidden message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to encrypt the message, asked for when missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Store the message in that file instead of printing it
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = match self.password {
            Some(password) => password,
            None => crate::cli::ask_for_password(false)?,
        };

        let message = blockstego_core::commands::unveil(
            &self.media,
            self.output_file.as_deref(),
            Some(password),
            options,
        )?;

        if self.output_file.is_none() {
            println!("{message}");
        }

        Ok(())
    }
}

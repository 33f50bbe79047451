use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows how long a message an image can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image such as PNG, JPEG, BMP or WebP
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media file",
        required = true
    )]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let report = blockstego_core::commands::capacity(&self.media)?;
        println!("{report}");

        Ok(())
    }
}

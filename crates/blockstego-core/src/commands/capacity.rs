use std::fmt::{self, Display, Formatter};
use std::path::Path;

use crate::{dct, media, pipeline, StegoError};

/// How much a carrier image can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    /// one per full 8×8 block of the blue channel
    pub bits: usize,
    /// longest message in bytes that still fits, after encryption and framing
    pub max_message_len: usize,
}

impl CapacityReport {
    pub fn of_dimensions(width: u32, height: u32) -> Self {
        let bits = dct::capacity(width, height);

        Self {
            width,
            height,
            bits,
            max_message_len: pipeline::max_message_len(bits),
        }
    }
}

impl Display for CapacityReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} pixels: {} bits, messages up to {} bytes",
            self.width, self.height, self.bits, self.max_message_len
        )
    }
}

pub fn capacity(media: &Path) -> Result<CapacityReport, StegoError> {
    let data = crate::api::shared::read_file(media)?;
    let image = media::load_rgb(&data)?;

    Ok(CapacityReport::of_dimensions(image.width(), image.height()))
}

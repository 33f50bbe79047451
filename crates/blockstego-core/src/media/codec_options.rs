use blockstego_cipher::KdfParams;
use image::ImageFormat;

/// Codec configuration for hiding and unveiling
///
/// The block grid, the carrying coefficient and the quantization step are
/// not part of it, they are fixed by the format revision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// Key derivation parameters, hiding and unveiling have to use the same
    pub kdf: KdfParams,
}

impl CodecOptions {
    pub fn with_kdf(mut self, kdf: KdfParams) -> Self {
        self.kdf = kdf;
        self
    }

    /// Shorthand for [`KdfParams::with_iterations`]
    pub fn with_kdf_iterations(self, iterations: u32) -> Self {
        self.with_kdf(KdfParams::with_iterations(iterations))
    }

    /// Images carrying a secret are always written losslessly as PNG,
    /// a lossy container would destroy the coefficient parity.
    pub const fn output_format(&self) -> ImageFormat {
        ImageFormat::Png
    }
}

//! # Blockstego Core API
//!
//! Hides a password protected text message in an image, one bit per 8×8 block
//! of the blue channel. Every bit sits in the parity of a quantized mid
//! frequency DCT coefficient, which makes it invisible to the eye and keeps it
//! intact through the rounding of pixel values.
//!
//! The message is encrypted first (see [`blockstego_cipher`]), prefixed with a
//! big endian length header and only then spread over the blocks. The output
//! is always a PNG, whatever format the carrier came in.
//!
//! # Usage Examples
//!
//! ## Hide and unveil in memory
//!
//! ```rust
//! use blockstego_core::{decode_with, encode_with, media, CodecOptions};
//! use image::{Rgb, RgbImage};
//!
//! let carrier = RgbImage::from_fn(256, 256, |x, y| {
//!     Rgb([100, 150, (64 + (x * 7 + y * 13) % 128) as u8])
//! });
//! let carrier = media::write_png(&carrier).unwrap();
//! let options = CodecOptions::default().with_kdf_iterations(1_000);
//!
//! let stego = encode_with(&carrier, "Hello, World!", "SuperSecret42", &options).unwrap();
//! let message = decode_with(&stego, "SuperSecret42", &options).unwrap();
//!
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! ## Hide a message in an image file
//!
//! ```rust,no_run
//! blockstego_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // will hide this message inside the image
//!     .using_password("SuperSecret42") // will encrypt the message with this password
//!     .with_image("carrier-image.jpg")
//!     .with_output("image-with-a-secret.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Unveil a message from an image file
//!
//! ```rust,no_run
//! let message = blockstego_core::api::unveil::prepare()
//!     .from_secret_file("image-with-a-secret.png")
//!     .using_password("SuperSecret42")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod audit;
pub mod bits;
pub mod commands;
pub mod dct;
pub mod error;
pub mod media;
pub mod pipeline;
pub mod result;

pub use blockstego_cipher::KdfParams;

pub use crate::audit::{AuditRecord, OpenedRecord};
pub use crate::bits::{bits_to_bytes, bytes_to_bits, BitString};
pub use crate::dct::{capacity, FORMAT_REVISION};
pub use crate::error::StegoError;
pub use crate::media::CodecOptions;
pub use crate::pipeline::{
    decode, decode_with, encode, encode_with, max_message_len, required_bits,
};
pub use crate::result::Result;

#[cfg(test)]
mod e2e_tests {
    use super::*;
    use crate::test_utils::{fast_options, png_bytes, textured_rgb};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<CodecOptions>();
        assert_send_sync::<BitString>();
        assert_send_sync::<AuditRecord>();
        assert_send_sync::<StegoError>();
        assert_send_sync::<api::hide::HideApi>();
        assert_send_sync::<api::unveil::UnveilApi>();
    }

    #[test]
    fn should_leave_red_and_green_alone() {
        let image = textured_rgb(256, 256, 21);
        let stego = encode_with(&png_bytes(&image), "tiny", "pw", &fast_options()).unwrap();
        let stego = media::load_rgb(&stego).unwrap();

        let before = media::split_channels(&image);
        let after = media::split_channels(&stego);
        assert_eq!(before[media::RED], after[media::RED]);
        assert_eq!(before[media::GREEN], after[media::GREEN]);
        assert_ne!(before[media::BLUE], after[media::BLUE]);
    }

    #[test]
    fn should_keep_the_secret_in_the_first_blocks_only() {
        let image = textured_rgb(256, 256, 22);
        let stego = encode_with(&png_bytes(&image), "tiny", "pw", &fast_options()).unwrap();
        let blue = media::channel(&media::load_rgb(&stego).unwrap(), media::BLUE);
        let original = media::channel(&image, media::BLUE);

        // 512 bits cover the first 16 rows of blocks, everything below stays
        let used_rows = required_bits(4).div_ceil(32) as u32 * 8;
        for y in used_rows..256 {
            for x in 0..256 {
                assert_eq!(blue.get_pixel(x, y), original.get_pixel(x, y));
            }
        }
    }
}

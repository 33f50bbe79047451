pub mod codec_options;

use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use log::{debug, error};

pub use codec_options::CodecOptions;

use crate::dct;
use crate::error::StegoError;
use crate::result::Result;

pub const RED: usize = 0;
pub const GREEN: usize = 1;
/// The only channel that carries data
pub const BLUE: usize = 2;

/// Decodes raw image bytes into RGB.
///
/// The format is sniffed from the leading magic bytes, file names play no
/// role. PNG, JPEG, BMP and WebP are understood, alpha is dropped.
pub fn load_rgb(bytes: &[u8]) -> Result<RgbImage> {
    let format = image::guess_format(bytes).map_err(|e| {
        error!("Cannot detect image format: {e}");
        StegoError::InvalidImageMedia
    })?;

    let image = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| {
            error!("Error decoding {format:?} image: {e}");
            StegoError::InvalidImageMedia
        })?
        .to_rgb8();
    debug!(
        "loaded {format:?} image of {}x{}",
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Copies a single color channel out of the image
pub fn channel(image: &RgbImage, index: usize) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([image.get_pixel(x, y).0[index]])
    })
}

/// `[red, green, blue]`
pub fn split_channels(image: &RgbImage) -> [GrayImage; 3] {
    [
        channel(image, RED),
        channel(image, GREEN),
        channel(image, BLUE),
    ]
}

/// Inverse of [`split_channels`], all channels need the same dimensions.
pub fn merge_channels(red: &GrayImage, green: &GrayImage, blue: &GrayImage) -> Result<RgbImage> {
    let dimensions = red.dimensions();
    if green.dimensions() != dimensions || blue.dimensions() != dimensions {
        return Err(StegoError::ChannelMismatch);
    }

    Ok(RgbImage::from_fn(dimensions.0, dimensions.1, |x, y| {
        Rgb([
            red.get_pixel(x, y).0[0],
            green.get_pixel(x, y).0[0],
            blue.get_pixel(x, y).0[0],
        ])
    }))
}

/// Encodes the image as PNG into memory
pub fn write_png(image: &RgbImage) -> Result<Vec<u8>> {
    write_image(image, ImageFormat::Png)
}

/// Encodes the image in `format` into memory
pub fn write_image(image: &RgbImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format).map_err(|e| {
        error!("Error saving {format:?} image: {e}");
        StegoError::ImageEncodingError
    })?;

    Ok(buf.into_inner())
}

/// Bits the image behind `bytes` can carry
pub fn capacity_of(bytes: &[u8]) -> Result<usize> {
    let image = load_rgb(bytes)?;

    Ok(dct::capacity(image.width(), image.height()))
}

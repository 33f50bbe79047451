#![allow(dead_code)]

use std::io::Cursor;
use std::ops::Range;

use blockstego_core::{media, CodecOptions};
use image::{ImageFormat, Rgb, RgbImage};

pub fn fast_options() -> CodecOptions {
    CodecOptions::default().with_kdf_iterations(1_000)
}

fn seeded_rgb(width: u32, height: u32, seed: u64, range: Range<u8>) -> RgbImage {
    let mut rng = fastrand::Rng::with_seed(seed);
    RgbImage::from_fn(width, height, |_, _| {
        Rgb([
            rng.u8(range.clone()),
            rng.u8(range.clone()),
            rng.u8(range.clone()),
        ])
    })
}

/// Busy texture in `64..=191`, embedding never needs to clamp
pub fn textured_rgb(width: u32, height: u32, seed: u64) -> RgbImage {
    seeded_rgb(width, height, seed, 64..192)
}

/// Low contrast texture, stays clear of `0` and `255` even after lossy compression
pub fn calm_rgb(width: u32, height: u32, seed: u64) -> RgbImage {
    seeded_rgb(width, height, seed, 108..148)
}

pub fn png_bytes(image: &RgbImage) -> Vec<u8> {
    media::write_png(image).expect("Failed to encode PNG")
}

pub fn jpeg_bytes(image: &RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Jpeg)
        .expect("Failed to encode JPEG");
    buf.into_inner()
}

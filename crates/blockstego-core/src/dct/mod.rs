//! One bit per 8×8 block, hidden in the parity of a quantized mid-frequency
//! DCT coefficient.
//!
//! Blocks are visited in row-major order: left to right inside a row of
//! blocks, top row first. Blocks that do not fill a full 8×8 area at the right
//! or bottom edge are skipped and never carry a bit.
//!
//! The coefficient position, the quantization step and the block size form
//! the format of [`FORMAT_REVISION`] 1. Changing any of them makes previously
//! produced images unreadable.

pub mod transform;

use image::GrayImage;
use log::debug;

use crate::bits::BitString;
use crate::error::StegoError;
use crate::result::Result;

use transform::{forward_dct, inverse_dct, Block};

pub const FORMAT_REVISION: u8 = 1;

pub const BLOCK_SIZE: usize = 8;

/// Frequency row (vertical) of the carrying coefficient
pub const COEFFICIENT_ROW: usize = 4;

/// Frequency column (horizontal) of the carrying coefficient
pub const COEFFICIENT_COL: usize = 3;

pub const QUANTIZATION_STEP: f64 = 10.0;

const COEFFICIENT_INDEX: usize = COEFFICIENT_ROW * BLOCK_SIZE + COEFFICIENT_COL;

/// Number of bits a channel of the given dimensions can carry, one per full block.
pub fn capacity(width: u32, height: u32) -> usize {
    (width as usize / BLOCK_SIZE) * (height as usize / BLOCK_SIZE)
}

/// Top left pixel of every full block, in scan order
fn block_origins(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let size = BLOCK_SIZE as u32;
    let (blocks_wide, blocks_tall) = (width / size, height / size);

    (0..blocks_tall).flat_map(move |by| (0..blocks_wide).map(move |bx| (bx * size, by * size)))
}

fn read_block(channel: &GrayImage, x0: u32, y0: u32) -> Block {
    let mut block = [0.0f64; BLOCK_SIZE * BLOCK_SIZE];
    for (i, p) in block.iter_mut().enumerate() {
        let (x, y) = ((i % BLOCK_SIZE) as u32, (i / BLOCK_SIZE) as u32);
        *p = channel.get_pixel(x0 + x, y0 + y).0[0] as f64;
    }
    block
}

fn write_block(channel: &mut GrayImage, x0: u32, y0: u32, block: &Block) {
    for (i, p) in block.iter().enumerate() {
        let (x, y) = ((i % BLOCK_SIZE) as u32, (i / BLOCK_SIZE) as u32);
        channel.get_pixel_mut(x0 + x, y0 + y).0[0] = p.round().clamp(0.0, 255.0) as u8;
    }
}

/// Quantized value of the carrying coefficient, ties round to even
fn quantize(coeffs: &Block) -> i64 {
    (coeffs[COEFFICIENT_INDEX] / QUANTIZATION_STEP).round_ties_even() as i64
}

/// odd means `1`, also for negative values
fn parity(q: i64) -> bool {
    q.rem_euclid(2) == 1
}

fn force_parity(q: i64, bit: bool) -> i64 {
    match (bit, parity(q)) {
        (true, false) => q + 1,
        (false, true) => q - 1,
        _ => q,
    }
}

/// Hides `bits` in the channel, one bit per block in scan order.
///
/// Blocks after the last bit are left untouched. Fails with
/// [`StegoError::PayloadTooLarge`] before touching any pixel when there are
/// more bits than full blocks.
pub fn embed(channel: &mut GrayImage, bits: &BitString) -> Result<()> {
    let (width, height) = channel.dimensions();
    let capacity = capacity(width, height);
    if bits.len() > capacity {
        return Err(StegoError::PayloadTooLarge {
            required: bits.len(),
            capacity,
        });
    }
    debug!("embedding {} bits into {width}x{height} channel", bits.len());

    for ((x0, y0), bit) in block_origins(width, height).zip(bits.iter()) {
        let mut coeffs = forward_dct(&read_block(channel, x0, y0));
        let q = force_parity(quantize(&coeffs), bit);
        coeffs[COEFFICIENT_INDEX] = q as f64 * QUANTIZATION_STEP;
        write_block(channel, x0, y0, &inverse_dct(&coeffs));
    }

    Ok(())
}

/// Reads the parity of up to `expected_bit_count` blocks, in the same order [`embed`] writes them.
///
/// Returns fewer bits if the channel has fewer full blocks.
pub fn extract(channel: &GrayImage, expected_bit_count: usize) -> BitString {
    let (width, height) = channel.dimensions();

    block_origins(width, height)
        .take(expected_bit_count)
        .map(|(x0, y0)| parity(quantize(&forward_dct(&read_block(channel, x0, y0)))))
        .collect()
}

//! Orthonormal 8×8 DCT-II and its inverse.
//!
//! Blocks are stored row-major, index = row * 8 + col. In the frequency
//! domain the row is the vertical and the column the horizontal frequency.

use std::f64::consts::PI;
use std::sync::OnceLock;

use super::BLOCK_SIZE;

pub type Block = [f64; BLOCK_SIZE * BLOCK_SIZE];

/// `COSINE[u][x] = cos((2*x + 1) * u * PI / 16)`
static COSINE: OnceLock<[[f64; BLOCK_SIZE]; BLOCK_SIZE]> = OnceLock::new();

/// C(0) = 1/sqrt(8), C(u>0) = 1/2
static NORM: OnceLock<[f64; BLOCK_SIZE]> = OnceLock::new();

fn cosine_table() -> &'static [[f64; BLOCK_SIZE]; BLOCK_SIZE] {
    COSINE.get_or_init(|| {
        let mut table = [[0.0f64; BLOCK_SIZE]; BLOCK_SIZE];
        for (u, row) in table.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = ((2 * x + 1) as f64 * u as f64 * PI / 16.0).cos();
            }
        }
        table
    })
}

fn norm_table() -> &'static [f64; BLOCK_SIZE] {
    NORM.get_or_init(|| {
        let mut n = [0.5f64; BLOCK_SIZE];
        n[0] = 1.0 / (BLOCK_SIZE as f64).sqrt();
        n
    })
}

/// pixel block -> frequency coefficients
pub fn forward_dct(pixels: &Block) -> Block {
    let cos = cosine_table();
    let c = norm_table();

    // rows first
    let mut temp = [0.0f64; 64];
    for row in 0..8 {
        for u in 0..8 {
            let mut sum = 0.0;
            for x in 0..8 {
                sum += pixels[row * 8 + x] * cos[u][x];
            }
            temp[row * 8 + u] = c[u] * sum;
        }
    }

    // then columns
    let mut coeffs = [0.0f64; 64];
    for col in 0..8 {
        for v in 0..8 {
            let mut sum = 0.0;
            for y in 0..8 {
                sum += temp[y * 8 + col] * cos[v][y];
            }
            coeffs[v * 8 + col] = c[v] * sum;
        }
    }

    coeffs
}

/// frequency coefficients -> pixel block, not rounded nor clamped
pub fn inverse_dct(coeffs: &Block) -> Block {
    let cos = cosine_table();
    let c = norm_table();

    // columns first
    let mut temp = [0.0f64; 64];
    for col in 0..8 {
        for y in 0..8 {
            let mut sum = 0.0;
            for v in 0..8 {
                sum += c[v] * coeffs[v * 8 + col] * cos[v][y];
            }
            temp[y * 8 + col] = sum;
        }
    }

    // then rows
    let mut pixels = [0.0f64; 64];
    for row in 0..8 {
        for x in 0..8 {
            let mut sum = 0.0;
            for u in 0..8 {
                sum += c[u] * temp[row * 8 + u] * cos[u][x];
            }
            pixels[row * 8 + x] = sum;
        }
    }

    pixels
}

//! Hiding and unveiling of encrypted text in the blue channel of an image.
//!
//! Both directions work on raw image bytes and are plain request/response
//! transforms without shared state, so they can run on as many threads as
//! there are images.

use blockstego_cipher::ENVELOPE_OVERHEAD;
use log::debug;

use crate::bits::{frame_payload, unframe_payload, LENGTH_HEADER_BITS};
use crate::dct;
use crate::error::StegoError;
use crate::media::{self, CodecOptions, BLUE};
use crate::result::Result;

const LENGTH_HEADER_BYTES: usize = LENGTH_HEADER_BITS / 8;

/// Bits a message of `message_len` bytes occupies once encrypted and framed.
pub fn required_bits(message_len: usize) -> usize {
    LENGTH_HEADER_BITS + (message_len + ENVELOPE_OVERHEAD) * 8
}

/// Largest message in bytes that fits into `capacity_bits`, `0` if not even an empty message fits.
pub fn max_message_len(capacity_bits: usize) -> usize {
    (capacity_bits / 8).saturating_sub(LENGTH_HEADER_BYTES + ENVELOPE_OVERHEAD)
}

/// Hides `secret` encrypted under `password` and returns the result as PNG bytes.
pub fn encode(image_bytes: &[u8], secret: &str, password: &str) -> Result<Vec<u8>> {
    encode_with(image_bytes, secret, password, &CodecOptions::default())
}

/// Recovers the secret that [`encode`] hid with the same `password`.
pub fn decode(image_bytes: &[u8], password: &str) -> Result<String> {
    decode_with(image_bytes, password, &CodecOptions::default())
}

/// Like [`encode`] with explicit codec options.
///
/// Fails with [`StegoError::PayloadTooLarge`] when the image has fewer full
/// blocks than the framed payload has bits. Nothing is truncated.
pub fn encode_with(
    image_bytes: &[u8],
    secret: &str,
    password: &str,
    options: &CodecOptions,
) -> Result<Vec<u8>> {
    let image = media::load_rgb(image_bytes)?;
    let [red, green, mut blue] = media::split_channels(&image);

    let capacity = dct::capacity(blue.width(), blue.height());
    let required = required_bits(secret.len());
    debug!("payload needs {required} of {capacity} bits");
    // fail before paying for the key derivation
    if required > capacity {
        return Err(StegoError::PayloadTooLarge { required, capacity });
    }

    let envelope = blockstego_cipher::encrypt_with(secret.as_bytes(), password, &options.kdf)?;
    let bits = frame_payload(&envelope)?;
    dct::embed(&mut blue, &bits)?;

    let stego = media::merge_channels(&red, &green, &blue)?;
    media::write_image(&stego, options.output_format())
}

/// Like [`decode`] with explicit codec options.
///
/// An image without a plausible length header gives
/// [`StegoError::NoHiddenData`]. Every failure after that, a wrong password, a
/// damaged image or text that is not UTF-8, is reported as
/// [`StegoError::WrongPasswordOrCorruptedImage`].
pub fn decode_with(image_bytes: &[u8], password: &str, options: &CodecOptions) -> Result<String> {
    let image = media::load_rgb(image_bytes)?;
    let blue = media::channel(&image, BLUE);

    let capacity = dct::capacity(blue.width(), blue.height());
    let bits = dct::extract(&blue, capacity);
    if bits.len() < LENGTH_HEADER_BITS {
        debug!("only {} bits available, no room for a header", bits.len());
        return Err(StegoError::NoHiddenData);
    }

    let envelope = unframe_payload(&bits)?;
    debug!("found envelope of {} bytes", envelope.len());

    let plaintext = blockstego_cipher::decrypt_with(&envelope, password, &options.kdf)
        .map_err(|e| {
            debug!("decryption failed: {e}");
            StegoError::WrongPasswordOrCorruptedImage
        })?;

    String::from_utf8(plaintext).map_err(|_| StegoError::WrongPasswordOrCorruptedImage)
}

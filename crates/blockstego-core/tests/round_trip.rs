mod common;

use blockstego_core::bits::{BitString, LENGTH_HEADER_BITS};
use blockstego_core::*;
use common::*;
use image::ImageFormat;

#[test]
fn should_hide_and_unveil_a_message() {
    let carrier = png_bytes(&textured_rgb(320, 240, 1));
    let options = fast_options();
    let secret = "The eagle lands at midnight, bring the usual.";

    let stego = encode_with(&carrier, secret, "correct horse battery staple", &options).unwrap();

    assert_eq!(
        decode_with(&stego, "correct horse battery staple", &options).unwrap(),
        secret
    );
}

#[test]
fn should_write_png_for_jpeg_carrier() {
    let carrier = jpeg_bytes(&calm_rgb(256, 256, 2));
    assert_eq!(image::guess_format(&carrier).unwrap(), ImageFormat::Jpeg);
    let options = fast_options();

    let stego = encode_with(&carrier, "hello", "pw", &options).unwrap();

    assert_eq!(image::guess_format(&stego).unwrap(), ImageFormat::Png);
    assert_eq!(decode_with(&stego, "pw", &options).unwrap(), "hello");
}

#[test]
fn should_keep_dimensions_and_red_green() {
    let original = textured_rgb(303, 217, 3);
    let stego = encode_with(&png_bytes(&original), "hi", "pw", &fast_options()).unwrap();
    let stego = media::load_rgb(&stego).unwrap();

    assert_eq!(stego.dimensions(), original.dimensions());
    for (a, b) in original.pixels().zip(stego.pixels()) {
        assert_eq!(a.0[0], b.0[0], "red changed");
        assert_eq!(a.0[1], b.0[1], "green changed");
    }
}

#[test]
fn should_reject_the_wrong_password() {
    let carrier = png_bytes(&textured_rgb(256, 256, 4));
    let options = fast_options();
    let stego = encode_with(&carrier, "hello", "pw1", &options).unwrap();

    let result = decode_with(&stego, "pw2", &options);

    assert!(matches!(
        result,
        Err(StegoError::WrongPasswordOrCorruptedImage)
    ));
}

#[test]
fn should_reject_different_key_derivation_settings() {
    let carrier = png_bytes(&textured_rgb(256, 256, 5));
    let stego = encode_with(&carrier, "hello", "pw", &fast_options()).unwrap();

    let result = decode_with(
        &stego,
        "pw",
        &CodecOptions::default().with_kdf_iterations(1_001),
    );

    assert!(matches!(
        result,
        Err(StegoError::WrongPasswordOrCorruptedImage)
    ));
}

#[test]
fn should_detect_a_flipped_bit() {
    let carrier = png_bytes(&textured_rgb(256, 256, 6));
    let options = fast_options();
    let stego = media::load_rgb(&encode_with(&carrier, "hello", "pw", &options).unwrap()).unwrap();

    let [red, green, mut blue] = media::split_channels(&stego);
    let capacity = capacity(blue.width(), blue.height());
    let mut bits: Vec<bool> = dct::extract(&blue, capacity).iter().collect();
    // inside the salt, right behind the length header
    bits[LENGTH_HEADER_BITS + 40] ^= true;
    dct::embed(&mut blue, &BitString::from(bits)).unwrap();
    let tampered = png_bytes(&media::merge_channels(&red, &green, &blue).unwrap());

    assert!(matches!(
        decode_with(&tampered, "pw", &options),
        Err(StegoError::WrongPasswordOrCorruptedImage)
    ));
}

#[test]
fn should_not_find_anything_in_a_plain_image() {
    for seed in 10..14 {
        let carrier = png_bytes(&textured_rgb(256, 256, seed));

        match decode_with(&carrier, "pw", &fast_options()) {
            Err(StegoError::NoHiddenData) | Err(StegoError::WrongPasswordOrCorruptedImage) => {}
            other => panic!("plain image {seed} gave {other:?}"),
        }
    }
}

#[test]
fn should_report_no_hidden_data_for_tiny_images() {
    let carrier = png_bytes(&textured_rgb(7, 300, 7));

    assert!(matches!(
        decode_with(&carrier, "pw", &fast_options()),
        Err(StegoError::NoHiddenData)
    ));
}

#[test]
fn should_run_in_parallel() {
    let options = fast_options();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                scope.spawn(move || {
                    let carrier = png_bytes(&textured_rgb(256, 256, 100 + i));
                    let secret = format!("message number {i}");
                    let password = format!("password {i}");

                    let stego = encode_with(&carrier, &secret, &password, &options).unwrap();
                    (secret, decode_with(&stego, &password, &options).unwrap())
                })
            })
            .collect();

        for handle in handles {
            let (expected, unveiled) = handle.join().unwrap();
            assert_eq!(expected, unveiled);
        }
    });
}

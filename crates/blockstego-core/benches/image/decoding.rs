use blockstego_core::{decode_with, dct, encode_with, media, CodecOptions};
use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};

pub fn image_decoding(c: &mut Criterion) {
    let carrier = RgbImage::from_fn(512, 512, |x, y| {
        Rgb([120, 130, (64 + (x * 7 + y * 13) % 128) as u8])
    });
    let options = CodecOptions::default().with_kdf_iterations(1_000);
    let stego = encode_with(
        &media::write_png(&carrier).expect("Cannot encode carrier"),
        "Hello World!",
        "pw",
        &options,
    )
    .expect("Cannot hide secret message");

    c.bench_function("Block Extraction", |b| {
        let blue = media::channel(
            &media::load_rgb(&stego).expect("Input image is not readable."),
            media::BLUE,
        );
        let capacity = dct::capacity(blue.width(), blue.height());

        b.iter(|| dct::extract(&blue, capacity))
    });

    c.bench_function("Image Decoding", |b| {
        b.iter(|| decode_with(&stego, "pw", &options).expect("Failed to unveil message"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);

use blockstego_core::bits::frame_payload;
use blockstego_core::{dct, encode_with, media, CodecOptions};
use criterion::{criterion_group, criterion_main, Criterion};
use image::{Luma, Rgb, RgbImage};

fn carrier() -> RgbImage {
    RgbImage::from_fn(512, 512, |x, y| {
        Rgb([120, 130, (64 + (x * 7 + y * 13) % 128) as u8])
    })
}

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Block Embedding", |b| {
        let plain = image::GrayImage::from_fn(512, 512, |x, y| {
            Luma([(64 + (x * 7 + y * 13) % 128) as u8])
        });
        let bits = frame_payload(&[0xA5; 400]).expect("Cannot frame payload");

        b.iter(|| {
            let mut channel = plain.clone();
            dct::embed(&mut channel, &bits).expect("Cannot embed payload");
        })
    });

    c.bench_function("Image Encoding to memory", |b| {
        let plain = media::write_png(&carrier()).expect("Cannot encode carrier");
        let options = CodecOptions::default().with_kdf_iterations(1_000);

        b.iter(|| {
            encode_with(&plain, "Hello World!", "pw", &options)
                .expect("Cannot hide secret message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image_pvr::{image_from_pvr, CompressedFormat, DefaultCodec, Header, Texture};

fn criterion_benchmark(c: &mut Criterion) {
    for format in [CompressedFormat::Pvrtc4, CompressedFormat::Etc1] {
        let mut header = Header::uncompressed_rgba8(512, 512);
        header.set_pixel_type(format.pixel_type());
        header.bit_count = format.bits_per_pixel();
        header.data_size = 512 * 512 * format.bits_per_pixel() / 8;
        let bytes = Texture::new(header, vec![0u8; header.data_size as usize]).to_bytes();

        c.bench_function(&format!("image_from_pvr {format}"), |b| {
            b.iter(|| image_from_pvr(black_box(&DefaultCodec), black_box(&bytes)))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

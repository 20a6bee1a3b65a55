use std::str::FromStr;

use image_pvr::{pvr_from_image, CompressedFormat, DefaultCodec};

fn main() {
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 3 {
        println!("img2pvr <input image> <output pvr> [PVRTC2|PVRTC4|ETC1]");
        println!("The default codec only encodes ETC1. PVRTC2 and PVRTC4 require a custom TextureCompressor.");
        return;
    }

    let image = image::open(&args[1]).unwrap();

    let format = args
        .get(3)
        .map(|f| CompressedFormat::from_str(f).unwrap())
        .unwrap_or_default();

    let start = std::time::Instant::now();
    let bytes = pvr_from_image(&DefaultCodec, &image, format).unwrap();
    println!("Compressed data to {format} in {:?}", start.elapsed());

    std::fs::write(&args[2], bytes).unwrap();
}

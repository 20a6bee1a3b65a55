use image_pvr::{image_from_pvr, DefaultCodec, Header};

fn main() {
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 3 {
        println!("pvr2img <input pvr> <output image>");
        return;
    }

    let bytes = std::fs::read(&args[1]).unwrap();

    let header = Header::parse(&bytes).unwrap();
    println!(
        "{}x{} texture with pixel type {:?}",
        header.width,
        header.height,
        header.pixel_type()
    );

    let start = std::time::Instant::now();
    let image = image_from_pvr(&DefaultCodec, &bytes).unwrap();
    println!("Decompressed data in {:?}", start.elapsed());

    image.save(&args[2]).unwrap();
}

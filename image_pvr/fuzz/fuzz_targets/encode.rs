#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (image_pvr::RawImage<Vec<u8>>, image_pvr::CompressedFormat)| {
    let (image, format) = input;
    let _result = image_pvr::encode(&image_pvr::DefaultCodec, &image, format);
});

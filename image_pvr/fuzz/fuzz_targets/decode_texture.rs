#![no_main]

use libfuzzer_sys::fuzz_target;

// Start from a valid magic to get past header parsing.
fuzz_target!(|input: (image_pvr::Header, Vec<u8>)| {
    let (mut header, data) = input;
    header.magic = image_pvr::PVR_MAGIC;
    let bytes = image_pvr::Texture::new(header, data).to_bytes();
    let _result = image_pvr::decode(&image_pvr::DefaultCodec, &bytes);
});

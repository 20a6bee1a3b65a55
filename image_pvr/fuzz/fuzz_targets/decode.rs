#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _result = image_pvr::decode(&image_pvr::DefaultCodec, data);
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, u8)| {
    let (data, chunk_size) = input;
    let mut loader = image_pvr::IncrementalLoad::new(&image_pvr::DefaultCodec, ());
    for chunk in data.chunks(chunk_size.max(1) as usize) {
        if loader.load_increment(chunk).is_err() {
            return;
        }
    }
    let _result = loader.finish();
});

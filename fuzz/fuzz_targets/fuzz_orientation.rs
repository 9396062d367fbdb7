#![no_main]

use libfuzzer_sys::fuzz_target;
use orient_core::orientation_from_bytes;

fuzz_target!(|data: &[u8]| {
    let orientation = orientation_from_bytes(data);
    assert!((1..=8).contains(&orientation.exif_code()));
});

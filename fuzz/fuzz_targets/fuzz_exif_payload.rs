#![no_main]

use libfuzzer_sys::fuzz_target;
use orient_core::exif::{ExifBlob, read_orientation_tag};

fuzz_target!(|data: &[u8]| {
    let _ = read_orientation_tag(&ExifBlob::new(data.to_vec()));
});

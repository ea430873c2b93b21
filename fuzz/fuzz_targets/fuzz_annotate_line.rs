#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        // Annotate line parsing - this should never panic
        let _ = cvs_decode::AnnotateLine::parse(line);
    }
});

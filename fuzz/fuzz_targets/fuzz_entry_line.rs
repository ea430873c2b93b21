#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        // Entries line parsing - parsed lines must display back unchanged
        if let Ok(entry) = cvs_decode::Entry::parse(line) {
            assert_eq!(entry.to_string(), line);
        }
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use presencia::presence::parse_row;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string (lossy conversion)
    if let Ok(input) = std::str::from_utf8(data) {
        // Attempt to parse the presence row
        // This should not panic regardless of input
        let _ = parse_row(input);
    }
});

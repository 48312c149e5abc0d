#![no_main]

use libfuzzer_sys::fuzz_target;
use zipbundler::domain::value_objects::parse_include_with_dest;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let (path, dest) = parse_include_with_dest(raw);
        // Splitting never invents characters
        assert!(path.len() + dest.map_or(0, |d| d.len() + 1) <= raw.len());
    }
});

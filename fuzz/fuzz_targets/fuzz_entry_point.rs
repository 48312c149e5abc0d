#![no_main]

use libfuzzer_sys::fuzz_target;
use zipbundler::domain::value_objects::EntryPoint;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(entry) = raw.parse::<EntryPoint>() {
            let code = entry.to_code();
            assert!(code.contains(&entry.module));
        }
    }
});

#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use zipbundler::config::{validate_config, BundlerConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = serde_json::from_slice::<BundlerConfig>(data) {
        let _ = validate_config(&config, Path::new("."));
    }
});

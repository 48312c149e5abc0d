#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use zipbundler::config::{validate_config, BundlerConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<BundlerConfig>(content) {
            let _ = validate_config(&config, Path::new("."));
            let _ = config.include_decls();
            let _ = config.output_path(Path::new("."));
        }
    }
});

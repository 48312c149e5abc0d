//! Configuration module for zipbundler
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ZIPBUNDLER_*)
//! 3. Project config (`--config`, `.zipbundler.toml`, `.zipbundler.json`,
//!    `[tool.zipbundler]` in `pyproject.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod presets;
mod types;
mod validate;

pub use loader::{
    find_config, load_config, load_with_warnings, locate_config, with_env_overrides,
    with_env_overrides_from, ConfigWarning, LoadedConfig, CONFIG_FILE_NAMES, ENV_PREFIX,
    PYPROJECT_FILE,
};
pub use presets::{find_preset, list_presets, Preset, DEFAULT_PRESET, PRESETS};
pub use types::{
    BundlerConfig, IncludeEntry, MetadataConfig, OptionsConfig, OutputConfig, ShebangOption,
    DEFAULT_OUTPUT_DIRECTORY, DEFAULT_OUTPUT_NAME, DEFAULT_OUTPUT_PATH, DEFAULT_WATCH_INTERVAL,
};
pub use validate::{validate_config, ValidationReport};

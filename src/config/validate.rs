//! Semantic checks on a parsed configuration
//!
//! Parsing only guarantees shape. This catches values that parse but cannot
//! produce a working build (errors) or that are probably mistakes (warnings).

use std::path::Path;

use crate::domain::value_objects::{CompressionMethod, EntryPoint};

use super::types::BundlerConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Valid, and with `strict` also free of warnings
    pub fn passes(&self, strict: bool) -> bool {
        self.is_valid() && (!strict || self.warnings.is_empty())
    }
}

/// Check `config`, resolving relative paths against `base_dir`.
pub fn validate_config(config: &BundlerConfig, base_dir: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    match &config.packages {
        None => report
            .errors
            .push("missing required field 'packages'".to_string()),
        Some(packages) if packages.is_empty() => report
            .warnings
            .push("'packages' is empty; nothing will be bundled".to_string()),
        Some(_) => {}
    }

    if let Some(entry_point) = &config.entry_point {
        if !EntryPoint::is_valid(entry_point) {
            report.errors.push(format!(
                "invalid entry_point '{}' (expected 'module.path' or 'module.path:function')",
                entry_point
            ));
        }
    }

    let output = config.output_path(base_dir);
    if let Some(parent) = output.parent() {
        if parent.exists() && !parent.is_dir() {
            report.errors.push(format!(
                "output directory is not a directory: {}",
                parent.display()
            ));
        }
    }

    let options = &config.options;
    let method = match &options.compression {
        Some(raw) => match raw.parse::<CompressionMethod>() {
            Ok(method) => Some(method),
            Err(_) => {
                report.warnings.push(format!(
                    "unknown compression '{}' (valid: {}); falling back to stored",
                    raw,
                    CompressionMethod::valid_names()
                ));
                None
            }
        },
        None => None,
    };

    if let Some(level) = options.compression_level {
        if !(0..=9).contains(&level) {
            report.warnings.push(format!(
                "compression_level {} is outside 0-9 and will be ignored",
                level
            ));
        } else if let Some(method) = method.filter(|m| !m.supports_level()) {
            report.warnings.push(format!(
                "compression_level has no effect with '{}' compression",
                method
            ));
        }
    }

    report
}

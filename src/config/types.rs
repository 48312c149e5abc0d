//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::domain::entities::{PackageMetadata, DEFAULT_LICENSE_FALLBACK};
use crate::domain::services::IncludeDecl;
use crate::domain::value_objects::{IncludeKind, Shebang};

/// Output used when the configuration names none
pub const DEFAULT_OUTPUT_PATH: &str = "dist/bundle.zip";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "dist";
pub const DEFAULT_OUTPUT_NAME: &str = "bundle";

/// Seconds between watch polls
pub const DEFAULT_WATCH_INTERVAL: f64 = 1.0;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct BundlerConfig {
    /// Required; `None` means the key was missing
    #[serde(default)]
    pub packages: Option<Vec<String>>,

    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub include: Vec<IncludeEntry>,

    #[serde(default)]
    pub entry_point: Option<String>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub metadata: Option<MetadataConfig>,
}

impl BundlerConfig {
    /// Output path relative to `base`: `output.path`, else
    /// `{directory}/{name}.pyz`, else `dist/bundle.zip`.
    pub fn output_path(&self, base: &Path) -> PathBuf {
        if let Some(path) = &self.output.path {
            return base.join(path);
        }
        if self.output.directory.is_some() || self.output.name.is_some() {
            let directory = self
                .output
                .directory
                .as_deref()
                .unwrap_or(DEFAULT_OUTPUT_DIRECTORY);
            let name = self.output.name.as_deref().unwrap_or(DEFAULT_OUTPUT_NAME);
            return base.join(directory).join(format!("{}.pyz", name));
        }
        base.join(DEFAULT_OUTPUT_PATH)
    }

    pub fn include_decls(&self) -> Vec<IncludeDecl> {
        self.include.iter().map(IncludeEntry::to_decl).collect()
    }
}

/// `include` entry: a string, a `{ path, dest, type }` table, or garbage
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum IncludeEntry {
    Path(String),
    Spec {
        path: String,
        #[serde(default)]
        dest: Option<String>,
        #[serde(default, rename = "type")]
        kind: Option<String>,
    },
    Malformed(IgnoredAny),
}

impl IncludeEntry {
    pub fn to_decl(&self) -> IncludeDecl {
        match self {
            IncludeEntry::Path(raw) => IncludeDecl::Text(raw.clone()),
            IncludeEntry::Spec { path, dest, kind } => IncludeDecl::Object {
                path: path.clone(),
                dest: dest.clone(),
                kind: match kind.as_deref() {
                    Some(k) if k.eq_ignore_ascii_case("zip") => IncludeKind::Archive,
                    _ => IncludeKind::Auto,
                },
            },
            IncludeEntry::Malformed(_) => {
                IncludeDecl::Malformed("include entry without a string 'path'".to_string())
            }
        }
    }
}

/// `[output]`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// `options.shebang`: `true`, `false`, or an interpreter path
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ShebangOption {
    Enabled(bool),
    Path(String),
}

impl Default for ShebangOption {
    fn default() -> Self {
        ShebangOption::Enabled(true)
    }
}

impl ShebangOption {
    pub fn to_shebang(&self) -> Option<Shebang> {
        match self {
            ShebangOption::Enabled(true) => Some(Shebang::python3()),
            ShebangOption::Enabled(false) => None,
            ShebangOption::Path(raw) if raw.trim().is_empty() => None,
            ShebangOption::Path(raw) => Some(Shebang::new(raw)),
        }
    }
}

/// `[options]`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OptionsConfig {
    #[serde(default)]
    pub shebang: ShebangOption,

    #[serde(default = "default_true")]
    pub main_guard: bool,

    #[serde(default)]
    pub compression: Option<String>,

    #[serde(default)]
    pub compression_level: Option<i64>,

    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    #[serde(default)]
    pub disable_build_timestamp: bool,

    #[serde(default)]
    pub watch_interval: Option<f64>,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            shebang: ShebangOption::default(),
            main_guard: true,
            compression: None,
            compression_level: None,
            respect_gitignore: true,
            disable_build_timestamp: false,
            watch_interval: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// `[metadata]`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MetadataConfig {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub license_fallback: Option<String>,
}

impl MetadataConfig {
    pub fn to_package_metadata(&self) -> PackageMetadata {
        PackageMetadata {
            name: self.display_name.clone().or_else(|| self.name.clone()),
            version: self.version.clone(),
            summary: self.description.clone(),
            author: self.author.clone(),
            license: self.license.clone(),
        }
    }

    pub fn license_fallback(&self) -> String {
        self.license_fallback
            .clone()
            .unwrap_or_else(|| DEFAULT_LICENSE_FALLBACK.to_string())
    }
}

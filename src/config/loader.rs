//! Configuration discovery and loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BundlerError, BundlerResult};
use crate::infrastructure::fs::expand_home;

use super::types::BundlerConfig;

/// Config files looked up in the working directory, in priority order
pub const CONFIG_FILE_NAMES: [&str; 2] = [".zipbundler.toml", ".zipbundler.json"];
pub const PYPROJECT_FILE: &str = "pyproject.toml";
pub const ENV_PREFIX: &str = "ZIPBUNDLER_";

const PYPROJECT_TABLE: [&str; 2] = ["tool", "zipbundler"];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// A parsed config together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: BundlerConfig,
    pub path: PathBuf,
    pub warnings: Vec<ConfigWarning>,
}

impl LoadedConfig {
    /// Directory relative paths in the config resolve against
    pub fn dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// First config file present in `cwd`. A `pyproject.toml` only counts when
/// it carries a `[tool.zipbundler]` table.
pub fn find_config(cwd: &Path) -> Option<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let candidate = cwd.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    let pyproject = cwd.join(PYPROJECT_FILE);
    let content = fs::read_to_string(&pyproject).ok()?;
    let value: toml::Value = toml::from_str(&content).ok()?;
    pyproject_table(&value).map(|_| pyproject)
}

/// Resolve which config file to use. An explicit path must exist and be a
/// file; otherwise discovery runs and may find nothing.
pub fn locate_config(explicit: Option<&Path>, cwd: &Path) -> BundlerResult<Option<PathBuf>> {
    let Some(explicit) = explicit else {
        return Ok(find_config(cwd));
    };

    let expanded = expand_home(explicit);
    let path = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };

    if !path.exists() {
        return Err(BundlerError::not_found("config file", path));
    }
    if path.is_dir() {
        return Err(BundlerError::invalid(format!(
            "config path is a directory: {}",
            path.display()
        )));
    }
    Ok(Some(path))
}

/// Locate, load and apply environment overrides.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> BundlerResult<Option<LoadedConfig>> {
    let Some(path) = locate_config(explicit, cwd)? else {
        return Ok(None);
    };
    let mut loaded = load_with_warnings(&path)?;
    loaded.config = with_env_overrides(loaded.config);
    Ok(Some(loaded))
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BundlerResult<LoadedConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BundlerError::not_found("config file", path)
        } else {
            BundlerError::Io(e)
        }
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let config = parse_config(path, &content, |p| unknown_paths.push(p))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok(LoadedConfig {
        config,
        path: path.to_path_buf(),
        warnings,
    })
}

fn parse_config(
    path: &Path,
    content: &str,
    mut on_unknown: impl FnMut(String),
) -> BundlerResult<BundlerConfig> {
    let config_error = |message: String| BundlerError::Config {
        file: path.to_path_buf(),
        message,
    };

    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    if file_name == PYPROJECT_FILE {
        let value: toml::Value = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
        let table = pyproject_table(&value)
            .cloned()
            .ok_or_else(|| config_error("missing [tool.zipbundler] table".to_string()))?;
        return serde_ignored::deserialize(table, |p| on_unknown(p.to_string()))
            .map_err(|e: toml::de::Error| config_error(e.to_string()));
    }

    if extension.eq_ignore_ascii_case("json") {
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let config: BundlerConfig = serde_ignored::deserialize(&mut deserializer, |p| on_unknown(p.to_string()))
            .map_err(|e| config_error(e.to_string()))?;
        deserializer
            .end()
            .map_err(|e| config_error(e.to_string()))?;
        return Ok(config);
    }

    let deserializer = toml::de::Deserializer::new(content);
    serde_ignored::deserialize(deserializer, |p| on_unknown(p.to_string()))
        .map_err(|e| config_error(e.to_string()))
}

fn pyproject_table(value: &toml::Value) -> Option<&toml::Value> {
    let mut current = value;
    for key in PYPROJECT_TABLE {
        current = current.get(key)?;
    }
    current.is_table().then_some(current)
}

/// Apply environment variable overrides (ZIPBUNDLER_* prefix)
pub fn with_env_overrides(config: BundlerConfig) -> BundlerConfig {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Same as [`with_env_overrides`] with an injectable variable lookup.
pub fn with_env_overrides_from(
    mut config: BundlerConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> BundlerConfig {
    let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

    // ZIPBUNDLER_RESPECT_GITIGNORE
    if let Some(flag) = var("RESPECT_GITIGNORE").as_deref().and_then(parse_flag) {
        config.options.respect_gitignore = flag;
    }

    // ZIPBUNDLER_DISABLE_BUILD_TIMESTAMP
    if let Some(flag) = var("DISABLE_BUILD_TIMESTAMP").as_deref().and_then(parse_flag) {
        config.options.disable_build_timestamp = flag;
    }

    // ZIPBUNDLER_COMPRESS: only decides between stored and deflate
    if let Some(flag) = var("COMPRESS").as_deref().and_then(parse_flag) {
        let method = if flag { "deflate" } else { "stored" };
        config.options.compression = Some(method.to_string());
    }

    // ZIPBUNDLER_WATCH_INTERVAL (seconds)
    if let Some(raw) = var("WATCH_INTERVAL") {
        match raw.trim().parse::<f64>() {
            Ok(secs) if secs.is_finite() && secs > 0.0 => {
                config.options.watch_interval = Some(secs)
            }
            _ => tracing::warn!("Ignoring invalid {}WATCH_INTERVAL: {}", ENV_PREFIX, raw),
        }
    }

    config
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "packages",
        "exclude",
        "include",
        "entry_point",
        "output",
        "path",
        "directory",
        "name",
        "options",
        "shebang",
        "main_guard",
        "compression",
        "compression_level",
        "respect_gitignore",
        "disable_build_timestamp",
        "watch_interval",
        "metadata",
        "display_name",
        "description",
        "version",
        "author",
        "license",
        "license_fallback",
        "dest",
        "type",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

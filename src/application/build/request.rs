//! Build request: raw CLI values plus an optional loaded config, resolved
//! into [`BuildOptions`]
//!
//! Precedence, highest first: CLI flags, environment (already folded into
//! the config by the loader), config file, defaults.

use std::path::{Path, PathBuf};

use crate::config::{
    validate_config, with_env_overrides, BundlerConfig, LoadedConfig, DEFAULT_OUTPUT_PATH,
    DEFAULT_WATCH_INTERVAL,
};
use crate::domain::entities::{BuildOutput, MergeMode, TimestampMode};
use crate::domain::ports::{BuildLogger, FileSystem};
use crate::domain::services::paths::absolutize;
use crate::domain::services::{
    load_gitignore_patterns, resolve_excludes, resolve_includes, resolve_packages,
    ExcludeSources, IncludeDecl, IncludeSources,
};
use crate::domain::value_objects::{
    wrap_main_guard, Compression, CompressionMethod, EntryPoint, Shebang,
};
use crate::error::{BundlerError, BundlerResult};

use super::BuildOptions;

/// Everything a `build` or `watch` invocation was asked to do
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    pub cwd: PathBuf,
    pub config: Option<LoadedConfig>,
    /// Positional package sources; replace the configured packages
    pub sources: Vec<String>,
    pub output: Option<PathBuf>,
    pub main: Option<String>,
    pub python: Option<String>,
    pub no_shebang: bool,
    pub compress: bool,
    pub compression: Option<String>,
    pub compression_level: Option<u8>,
    pub exclude: Vec<String>,
    pub add_exclude: Vec<String>,
    pub include: Vec<String>,
    pub add_include: Vec<String>,
    pub add_zip: Vec<String>,
    pub input: Option<PathBuf>,
    pub replace: bool,
    /// `Some` when `--gitignore` or `--no-gitignore` was given
    pub gitignore: Option<bool>,
    pub no_main_guard: bool,
    pub dry_run: bool,
    pub force: bool,
    pub disable_build_timestamp: bool,
    pub interval: Option<f64>,
}

/// Resolved options plus the values only the watcher needs
#[derive(Debug, Clone)]
pub struct ResolvedBuild {
    pub options: BuildOptions,
    pub watch_interval: f64,
    pub config_path: Option<PathBuf>,
}

impl BuildRequest {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            ..Default::default()
        }
    }

    fn config_dir(&self) -> PathBuf {
        self.config
            .as_ref()
            .map(|c| absolutize(&c.dir(), &self.cwd))
            .unwrap_or_else(|| self.cwd.clone())
    }

    pub fn resolve(
        &self,
        fs: &dyn FileSystem,
        logger: &dyn BuildLogger,
    ) -> BundlerResult<ResolvedBuild> {
        // Environment overrides still apply without a config file
        let default_config = with_env_overrides(BundlerConfig::default());
        let config = self
            .config
            .as_ref()
            .map(|c| &c.config)
            .unwrap_or(&default_config);
        let config_dir = self.config_dir();

        if let Some(loaded) = &self.config {
            for warning in &loaded.warnings {
                logger.warn(&warning.to_string());
            }
            self.check_config(config, &config_dir, logger)?;
        } else if !self.has_cli_inputs() {
            return Err(BundlerError::invalid(
                "no configuration file found and no sources given",
            ));
        }

        let packages = if !self.sources.is_empty() {
            resolve_packages(&self.sources, &self.cwd, fs, logger)?
        } else {
            let patterns = config.packages.clone().unwrap_or_default();
            resolve_packages(&patterns, &config_dir, fs, logger)?
        };

        let respect_gitignore = self.gitignore.unwrap_or(config.options.respect_gitignore);
        let excludes = resolve_excludes(
            &ExcludeSources {
                config: config.exclude.clone(),
                cli_override: self.exclude.clone(),
                cli_additive: self.add_exclude.clone(),
                gitignore: respect_gitignore.then(|| {
                    let patterns = load_gitignore_patterns(fs, &config_dir, logger);
                    (config_dir.clone(), patterns)
                }),
            },
            logger,
        );

        let mut additive: Vec<IncludeDecl> =
            self.add_include.iter().map(IncludeDecl::text).collect();
        additive.extend(self.add_zip.iter().map(|raw| IncludeDecl::archive(raw)));
        let includes = resolve_includes(
            &IncludeSources {
                config: config.include_decls(),
                cli_override: self.include.iter().map(IncludeDecl::text).collect(),
                cli_additive: additive,
            },
            &config_dir,
            &self.cwd,
            logger,
        );

        let output_path = match &self.output {
            Some(path) => absolutize(path, &self.cwd),
            None if self.config.is_some() => config.output_path(&config_dir),
            None => self.cwd.join(DEFAULT_OUTPUT_PATH),
        };

        let timestamps = if self.disable_build_timestamp || config.options.disable_build_timestamp
        {
            TimestampMode::Disabled
        } else {
            TimestampMode::Real
        };
        let merge_mode = if self.replace {
            MergeMode::Replace
        } else {
            MergeMode::Append
        };

        let output = BuildOutput::new(output_path)
            .with_shebang(self.shebang(config))
            .with_entry_point_code(self.entry_point_code(config)?)
            .with_compression(self.compression(config, logger)?)
            .with_merge_source(
                self.input.as_deref().map(|p| absolutize(p, &self.cwd)),
                merge_mode,
            )
            .with_metadata(config.metadata.as_ref().map(|m| m.to_package_metadata()))
            .with_license_fallback(config.metadata.as_ref().map(|m| m.license_fallback()))
            .with_timestamps(timestamps);

        let options = BuildOptions::new(output)
            .with_packages(packages)
            .with_excludes(excludes)
            .with_includes(includes)
            .with_dry_run(self.dry_run)
            .with_force(self.force);

        Ok(ResolvedBuild {
            options,
            watch_interval: self
                .interval
                .or(config.options.watch_interval)
                .unwrap_or(DEFAULT_WATCH_INTERVAL),
            config_path: self.config.as_ref().map(|c| c.path.clone()),
        })
    }

    /// Validation errors abort; warnings are logged. Positional sources
    /// stand in for a missing `packages` key.
    fn check_config(
        &self,
        config: &BundlerConfig,
        config_dir: &Path,
        logger: &dyn BuildLogger,
    ) -> BundlerResult<()> {
        let mut checked = config.clone();
        if !self.sources.is_empty() {
            checked.packages = Some(self.sources.clone());
        }
        if self.main.is_some() {
            checked.entry_point = None;
        }

        let report = validate_config(&checked, config_dir);
        for warning in &report.warnings {
            logger.warn(warning);
        }
        if report.is_valid() {
            return Ok(());
        }

        let file = self
            .config
            .as_ref()
            .map(|c| c.path.clone())
            .unwrap_or_default();
        Err(BundlerError::Config {
            file,
            message: report.errors.join("; "),
        })
    }

    fn has_cli_inputs(&self) -> bool {
        !self.sources.is_empty()
            || !self.include.is_empty()
            || !self.add_include.is_empty()
            || !self.add_zip.is_empty()
            || self.input.is_some()
    }

    fn shebang(&self, config: &BundlerConfig) -> Option<Shebang> {
        if self.no_shebang {
            return None;
        }
        match &self.python {
            Some(python) => Some(Shebang::new(python)),
            None => config.options.shebang.to_shebang(),
        }
    }

    fn entry_point_code(&self, config: &BundlerConfig) -> BundlerResult<Option<String>> {
        let Some(raw) = self.main.as_ref().or(config.entry_point.as_ref()) else {
            return Ok(None);
        };
        let entry_point: EntryPoint = raw.parse()?;
        let code = entry_point.to_code();
        let guarded = config.options.main_guard && !self.no_main_guard;
        Ok(Some(if guarded { wrap_main_guard(&code) } else { code }))
    }

    fn compression(
        &self,
        config: &BundlerConfig,
        logger: &dyn BuildLogger,
    ) -> BundlerResult<Compression> {
        let method = if let Some(raw) = &self.compression {
            raw.parse::<CompressionMethod>()?
        } else if self.compress {
            CompressionMethod::Deflate
        } else if let Some(raw) = &config.options.compression {
            // already reported by validation
            raw.parse::<CompressionMethod>().unwrap_or_default()
        } else {
            CompressionMethod::Stored
        };

        let config_level = config.options.compression_level.and_then(|level| {
            let level = u8::try_from(level).ok().filter(|l| *l <= 9);
            if level.is_none() {
                logger.debug("Ignoring out of range compression_level from config");
            }
            level
        });

        match (self.compression_level, method) {
            // An explicit level implies compression
            (Some(level), CompressionMethod::Stored) => Compression::deflate(Some(level)),
            (Some(level), method) => Compression::new(method, Some(level)),
            (None, method) => Compression::new(method, config_level),
        }
    }
}

//! Package pattern resolution
//!
//! A package entry is a plain directory, a `dir/**/*.py` glob (meaning the
//! directory itself) or any other glob. For other globs, matching
//! directories are taken as-is and matching source files contribute their
//! parent directory.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::domain::ports::{BuildLogger, FileSystem};
use crate::error::{BundlerError, BundlerResult};

use super::file_collector::SOURCE_EXTENSION;
use super::paths::absolutize;

const RECURSIVE_SOURCE_SUFFIXES: [&str; 2] = ["/**/*.py", "\\**\\*.py"];

pub fn resolve_packages(
    patterns: &[String],
    cwd: &Path,
    fs: &dyn FileSystem,
    logger: &dyn BuildLogger,
) -> BundlerResult<Vec<PathBuf>> {
    let mut packages: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        for package in resolve_one(pattern, cwd, fs, logger)? {
            if !packages.contains(&package) {
                logger.debug(&format!(
                    "Resolved package pattern '{}' to: {}",
                    pattern,
                    package.display()
                ));
                packages.push(package);
            }
        }
    }

    if packages.is_empty() {
        logger.warn(&format!("No packages resolved from patterns: {:?}", patterns));
    }

    Ok(packages)
}

fn resolve_one(
    pattern: &str,
    cwd: &Path,
    fs: &dyn FileSystem,
    logger: &dyn BuildLogger,
) -> BundlerResult<Vec<PathBuf>> {
    if let Some(base) = RECURSIVE_SOURCE_SUFFIXES
        .iter()
        .find_map(|suffix| pattern.strip_suffix(suffix))
    {
        let base_path = absolutize(Path::new(base), cwd);
        if fs.is_dir(&base_path) {
            logger.trace(&format!(
                "Resolved pattern '{}' to package: {}",
                pattern,
                base_path.display()
            ));
            return Ok(vec![base_path]);
        }
        logger.warn(&format!(
            "Pattern '{}' resolved to non-existent directory: {}",
            pattern,
            base_path.display()
        ));
        return Ok(Vec::new());
    }

    if has_glob_chars(pattern) {
        return resolve_glob(pattern, cwd, fs, logger);
    }

    let full_path = absolutize(Path::new(pattern), cwd);
    if fs.is_dir(&full_path) {
        Ok(vec![full_path])
    } else if fs.exists(&full_path) {
        logger.warn(&format!("Pattern '{}' is a file, not a directory", pattern));
        Ok(Vec::new())
    } else {
        logger.warn(&format!(
            "Pattern '{}' resolved to non-existent path: {}",
            pattern,
            full_path.display()
        ));
        Ok(Vec::new())
    }
}

fn resolve_glob(
    pattern: &str,
    cwd: &Path,
    fs: &dyn FileSystem,
    logger: &dyn BuildLogger,
) -> BundlerResult<Vec<PathBuf>> {
    // Match absolute paths so `./` and `../` prefixes resolve like any other
    let absolute_pattern = absolutize(Path::new(pattern), cwd)
        .to_string_lossy()
        .into_owned();
    let matcher = compile(&absolute_pattern)?;
    let glob_root = PathBuf::from(literal_prefix(&absolute_pattern));
    if !fs.is_dir(&glob_root) {
        logger.warn(&format!(
            "Glob root does not exist for pattern '{}': {}",
            pattern,
            glob_root.display()
        ));
        return Ok(Vec::new());
    }

    let mut resolved = Vec::new();
    for entry in fs.walk(&glob_root)? {
        if !matcher.is_match(&entry.path) {
            continue;
        }

        let package = if entry.is_dir {
            Some(entry.path.clone())
        } else if entry
            .path
            .extension()
            .map(|e| e == SOURCE_EXTENSION)
            .unwrap_or(false)
        {
            entry.path.parent().map(Path::to_path_buf)
        } else {
            None
        };

        if let Some(package) = package {
            if !resolved.contains(&package) {
                resolved.push(package);
            }
        }
    }

    if resolved.is_empty() {
        logger.warn(&format!("Pattern '{}' matched no packages", pattern));
    }
    Ok(resolved)
}

fn compile(pattern: &str) -> BundlerResult<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| BundlerError::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

fn has_glob_chars(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Directory part of `pattern` before its first glob character.
fn literal_prefix(pattern: &str) -> &str {
    let first_glob = pattern.find(['*', '?', '[']).unwrap_or(pattern.len());
    let head = &pattern[..first_glob];
    match head.rfind(['/', '\\']) {
        // Keep the root of `/*`
        Some(0) => &head[..1],
        Some(pos) => &head[..pos],
        None => "",
    }
}

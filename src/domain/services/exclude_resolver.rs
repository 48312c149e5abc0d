//! Exclude pattern resolution
//!
//! Same precedence as includes: `--exclude` replaces the configured list,
//! `--add-exclude` always extends it, and `.gitignore` patterns come last.

use std::path::Path;

use crate::domain::ports::{BuildLogger, FileSystem};
use crate::domain::value_objects::{ExcludeSpec, Origin};

/// Raw exclude declarations from every source
#[derive(Debug, Clone, Default)]
pub struct ExcludeSources {
    pub config: Vec<String>,
    pub cli_override: Vec<String>,
    pub cli_additive: Vec<String>,
    /// Patterns read from a `.gitignore`, with the directory holding it
    pub gitignore: Option<(std::path::PathBuf, Vec<String>)>,
}

pub fn resolve_excludes(sources: &ExcludeSources, logger: &dyn BuildLogger) -> Vec<ExcludeSpec> {
    let mut specs = Vec::new();

    if !sources.cli_override.is_empty() {
        specs.extend(
            sources
                .cli_override
                .iter()
                .map(|p| ExcludeSpec::new(p.clone(), Origin::CliOverride)),
        );
    } else {
        specs.extend(
            sources
                .config
                .iter()
                .map(|p| ExcludeSpec::new(p.clone(), Origin::Config)),
        );
    }

    specs.extend(
        sources
            .cli_additive
            .iter()
            .map(|p| ExcludeSpec::new(p.clone(), Origin::CliAdditive)),
    );

    if let Some((root, patterns)) = &sources.gitignore {
        specs.extend(
            patterns
                .iter()
                .map(|p| ExcludeSpec::rooted(p.clone(), root.clone(), Origin::Gitignore)),
        );
    }

    for spec in &specs {
        logger.trace(&format!(
            "Exclude pattern '{}' ({})",
            spec.pattern, spec.origin
        ));
    }

    specs
}

/// Read non-blank, non-comment lines of `<dir>/.gitignore`.
///
/// A missing file yields no patterns; an unreadable one yields no patterns
/// and a warning.
pub fn load_gitignore_patterns(
    fs: &dyn FileSystem,
    dir: &Path,
    logger: &dyn BuildLogger,
) -> Vec<String> {
    let path = dir.join(".gitignore");
    if !fs.exists(&path) {
        return Vec::new();
    }

    match fs.read_to_string(&path) {
        Ok(content) => {
            let patterns: Vec<String> = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect();
            logger.debug(&format!(
                "Loaded {} pattern(s) from {}",
                patterns.len(),
                path.display()
            ));
            patterns
        }
        Err(err) => {
            logger.warn(&format!("Could not read {}: {}", path.display(), err));
            Vec::new()
        }
    }
}

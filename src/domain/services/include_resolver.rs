//! Include Resolver
//!
//! Turns include declarations from configuration and the command line into
//! [`IncludeSpec`]s:
//!
//! 1. a non-empty CLI override list replaces the configured includes and is
//!    resolved against the working directory;
//! 2. otherwise configured includes are resolved against the configuration's
//!    directory;
//! 3. the CLI additive list is always appended, resolved against the working
//!    directory.

use std::path::Path;

use crate::domain::ports::BuildLogger;
use crate::domain::value_objects::{parse_include_with_dest, IncludeKind, IncludeSpec, Origin};

use super::paths::absolutize;

/// One include as declared, before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludeDecl {
    /// `path` or `path:dest`
    Text(String),
    /// Structured form; `path` is never split on `:`
    Object {
        path: String,
        dest: Option<String>,
        kind: IncludeKind,
    },
    /// Anything else; skipped during resolution
    Malformed(String),
}

impl IncludeDecl {
    pub fn text(raw: impl Into<String>) -> Self {
        IncludeDecl::Text(raw.into())
    }

    /// Textual declaration that is always read as an archive (`--add-zip`)
    pub fn archive(raw: &str) -> Self {
        let (path, dest) = parse_include_with_dest(raw);
        IncludeDecl::Object {
            path,
            dest,
            kind: IncludeKind::Archive,
        }
    }
}

/// Include declarations grouped by origin
#[derive(Debug, Clone, Default)]
pub struct IncludeSources {
    pub config: Vec<IncludeDecl>,
    pub cli_override: Vec<IncludeDecl>,
    pub cli_additive: Vec<IncludeDecl>,
}

pub fn resolve_includes(
    sources: &IncludeSources,
    config_dir: &Path,
    cwd: &Path,
    logger: &dyn BuildLogger,
) -> Vec<IncludeSpec> {
    let mut specs = Vec::new();

    if !sources.cli_override.is_empty() {
        logger.debug(&format!(
            "Using {} include(s) from --include (configured includes ignored)",
            sources.cli_override.len()
        ));
        resolve_all(&sources.cli_override, cwd, Origin::CliOverride, logger, &mut specs);
    } else {
        resolve_all(&sources.config, config_dir, Origin::Config, logger, &mut specs);
    }

    resolve_all(&sources.cli_additive, cwd, Origin::CliAdditive, logger, &mut specs);
    specs
}

fn resolve_all(
    decls: &[IncludeDecl],
    root: &Path,
    origin: Origin,
    logger: &dyn BuildLogger,
    out: &mut Vec<IncludeSpec>,
) {
    for decl in decls {
        match resolve_one(decl, root, origin) {
            Some(spec) => {
                logger.trace(&format!(
                    "Include '{}' -> {} ({})",
                    spec.pattern,
                    spec.path.display(),
                    origin
                ));
                out.push(spec);
            }
            None => logger.trace(&format!("Skipping malformed include entry: {:?}", decl)),
        }
    }
}

fn resolve_one(decl: &IncludeDecl, root: &Path, origin: Origin) -> Option<IncludeSpec> {
    let (path, destination, kind, pattern) = match decl {
        IncludeDecl::Text(raw) => {
            if raw.trim().is_empty() {
                return None;
            }
            let (path, dest) = parse_include_with_dest(raw);
            (path, dest, IncludeKind::Auto, raw.clone())
        }
        IncludeDecl::Object { path, dest, kind } => {
            if path.trim().is_empty() {
                return None;
            }
            let dest = dest.clone().filter(|d| !d.is_empty());
            (path.clone(), dest, *kind, path.clone())
        }
        IncludeDecl::Malformed(_) => return None,
    };

    Some(IncludeSpec {
        path: absolutize(Path::new(&path), root),
        root: root.to_path_buf(),
        origin,
        destination,
        kind,
        pattern,
    })
}

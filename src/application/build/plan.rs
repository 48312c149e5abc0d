//! Entry planning: decide every member of the archive before anything is
//! written

use std::path::{Path, PathBuf};

use crate::domain::entities::{
    ArchiveEntry, BuildOutput, EntrySet, MergeMode, BUILD_TIMESTAMP_FORMAT,
    BUILD_TIMESTAMP_PLACEHOLDER, MAIN_MODULE, PKG_INFO,
};
use crate::domain::ports::{ArchiveStore, BuildLogger, FileSystem, PatternMatcher};
use crate::domain::services::paths::{join_archive_name, to_archive_name};
use crate::domain::services::{FileCollector, SkippedSource};
use crate::domain::value_objects::{ExcludeSpec, IncludeKind, IncludeSpec};
use crate::error::{BundlerError, BundlerResult};

use super::BuildOptions;

const ARCHIVE_EXTENSIONS: [&str; 2] = ["zip", "pyz"];

/// Every member of the archive-to-be, plus what was consulted to get there
#[derive(Debug, Clone, Default)]
pub struct BuildPlan {
    pub entries: EntrySet,
    pub package_count: usize,
    /// Members that came from packages, includes and the entry point (not
    /// the merge base)
    pub new_file_count: usize,
    pub skipped: Vec<SkippedSource>,
    /// Files whose modification time decides staleness
    pub sources: Vec<PathBuf>,
}

pub struct EntryPlanner<'a> {
    fs: &'a dyn FileSystem,
    matcher: &'a dyn PatternMatcher,
    archives: &'a dyn ArchiveStore,
    logger: &'a dyn BuildLogger,
}

impl<'a> EntryPlanner<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        matcher: &'a dyn PatternMatcher,
        archives: &'a dyn ArchiveStore,
        logger: &'a dyn BuildLogger,
    ) -> Self {
        Self {
            fs,
            matcher,
            archives,
            logger,
        }
    }

    fn collector(&self) -> FileCollector<'a> {
        FileCollector::new(self.fs, self.matcher, self.logger)
    }

    pub fn plan(&self, options: &BuildOptions) -> BundlerResult<BuildPlan> {
        let output = &options.output;
        let mut plan = BuildPlan {
            package_count: options.packages.len(),
            ..Default::default()
        };

        let mut fresh = EntrySet::new();
        if !options.packages.is_empty() {
            let outcome = self
                .collector()
                .collect(&options.packages, &options.excludes)?;
            plan.skipped = outcome.skipped;
            fresh.extend(outcome.entries.into_iter().map(ArchiveEntry::from));
        }
        for spec in &options.includes {
            self.expand_include(spec, &options.excludes, &mut fresh, &mut plan.sources)?;
        }
        let adds_main = output.entry_point_code.is_some() && !fresh.contains(MAIN_MODULE);
        plan.new_file_count = fresh.len() + usize::from(adds_main);

        if fresh.is_empty() && output.merge_source.is_none() {
            return Err(BundlerError::invalid(
                "no files to bundle (packages and includes resolved to nothing)",
            ));
        }

        plan.entries = match &output.merge_source {
            Some(source) => self.merge(source, output, fresh, &mut plan.sources)?,
            None => fresh,
        };

        if let Some(code) = &output.entry_point_code {
            if plan
                .entries
                .insert(ArchiveEntry::from_bytes(MAIN_MODULE, code.as_bytes()))
            {
                self.logger
                    .debug("Entry point replaces __main__.py from merge source");
            }
        }

        if let Some(metadata) = &output.metadata {
            let timestamp = if output.timestamps_disabled() {
                BUILD_TIMESTAMP_PLACEHOLDER.to_string()
            } else {
                chrono::Utc::now().format(BUILD_TIMESTAMP_FORMAT).to_string()
            };
            let pkg_info =
                metadata.render_pkg_info(output.license_fallback.as_deref(), &timestamp);
            plan.entries
                .insert(ArchiveEntry::from_bytes(PKG_INFO, pkg_info.into_bytes()));
        }

        plan.sources.extend(plan.entries.source_paths());
        Ok(plan)
    }

    fn merge(
        &self,
        source: &Path,
        output: &BuildOutput,
        fresh: EntrySet,
        sources: &mut Vec<PathBuf>,
    ) -> BundlerResult<EntrySet> {
        if !self.fs.exists(source) {
            return Err(BundlerError::not_found("merge source", source));
        }

        let base = if self.fs.is_dir(source) {
            self.directory_members(source, &output.output_path)?
        } else {
            sources.push(source.to_path_buf());
            self.archives.read_members(source)?
        };

        match output.merge_mode {
            MergeMode::Append => {
                self.logger.debug(&format!(
                    "Merging {} new entries over {} from {}",
                    fresh.len(),
                    base.len(),
                    source.display()
                ));
                let mut merged: EntrySet = base.into_iter().collect();
                merged.extend(fresh.iter().cloned());
                Ok(merged)
            }
            MergeMode::Replace => {
                self.logger.debug(&format!(
                    "Replacing {} entries from {}",
                    base.len(),
                    source.display()
                ));
                Ok(fresh)
            }
        }
    }

    /// All files of a directory merge source, named relative to it. The
    /// output itself is left out.
    fn directory_members(&self, dir: &Path, output_path: &Path) -> BundlerResult<Vec<ArchiveEntry>> {
        Ok(self
            .fs
            .walk_files(dir)?
            .into_iter()
            .filter(|path| !path.starts_with(output_path))
            .filter_map(|path| {
                let name = to_archive_name(path.strip_prefix(dir).ok()?);
                Some(ArchiveEntry::from_file(name, path))
            })
            .collect())
    }

    fn expand_include(
        &self,
        spec: &IncludeSpec,
        excludes: &[ExcludeSpec],
        out: &mut EntrySet,
        sources: &mut Vec<PathBuf>,
    ) -> BundlerResult<()> {
        let path = &spec.path;
        if !self.fs.exists(path) {
            self.logger.warn(&format!(
                "Include '{}' does not exist: {}",
                spec.pattern,
                path.display()
            ));
            return Ok(());
        }

        if self.is_archive_include(spec) {
            if self.fs.is_dir(path) {
                return Err(BundlerError::invalid(format!(
                    "include '{}' is a directory, not an archive",
                    spec.pattern
                )));
            }
            let members = self.archives.read_members(path)?;
            self.logger.debug(&format!(
                "Including {} member(s) from archive {}",
                members.len(),
                path.display()
            ));
            sources.push(path.clone());
            let prefix = spec.destination.as_deref().unwrap_or("");
            out.extend(members.into_iter().map(|mut m| {
                m.name = join_archive_name(prefix, &m.name);
                m
            }));
            return Ok(());
        }

        let basename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if self.fs.is_dir(path) {
            let prefix = spec.destination.clone().unwrap_or(basename);
            let entries = self.collector().collect_tree(path, &prefix, excludes)?;
            out.extend(entries.into_iter().map(ArchiveEntry::from));
            return Ok(());
        }

        let name = match &spec.destination {
            Some(dest) if dest.ends_with('/') => join_archive_name(dest, &basename),
            Some(dest) => dest.trim_start_matches('/').to_string(),
            None => basename,
        };
        self.logger
            .trace(&format!("Include {} -> {}", path.display(), name));
        out.insert(ArchiveEntry::from_file(name, path.clone()));
        Ok(())
    }

    fn is_archive_include(&self, spec: &IncludeSpec) -> bool {
        if spec.kind == IncludeKind::Archive {
            return true;
        }
        if !self.fs.is_file(&spec.path) {
            return false;
        }
        let by_extension = spec
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| ARCHIVE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        by_extension || self.archives.is_archive(&spec.path)
    }
}

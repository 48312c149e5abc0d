//! Build Use Case implementation

use std::path::PathBuf;

use crate::domain::ports::{ArchiveStore, BuildLogger, FileSystem, PatternMatcher, WriteReport};
use crate::domain::services::{SkippedSource, StalenessDetector, StalenessRecord};
use crate::error::{BundlerError, BundlerResult};

use super::{BuildOptions, BuildPlan, EntryPlanner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    /// Archive written
    Built,
    /// Nothing changed since the last build; output untouched
    UpToDate,
    /// Planned only
    DryRun,
}

/// Outcome of one build invocation
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub status: BuildStatus,
    pub output: PathBuf,
    pub entry_names: Vec<String>,
    pub package_count: usize,
    pub file_count: usize,
    pub skipped: Vec<SkippedSource>,
    pub staleness: Option<StalenessRecord>,
    pub report: Option<WriteReport>,
}

impl BuildResult {
    pub fn is_built(&self) -> bool {
        self.status == BuildStatus::Built
    }

    fn from_plan(status: BuildStatus, options: &BuildOptions, plan: &BuildPlan) -> Self {
        Self {
            status,
            output: options.output.output_path.clone(),
            entry_names: plan.entries.names().into_iter().map(String::from).collect(),
            package_count: plan.package_count,
            file_count: plan.new_file_count,
            skipped: plan.skipped.clone(),
            staleness: None,
            report: None,
        }
    }
}

/// One line summary of what a build would produce.
pub fn dry_run_summary(options: &BuildOptions, plan: &BuildPlan) -> String {
    let output = &options.output;
    let mut parts = vec![
        format!("Output: {}", output.output_path.display()),
        format!("Packages: {}", plan.package_count),
        format!("Files: {}", plan.new_file_count),
    ];
    if output.entry_point_code.is_some() {
        parts.push("Entry point: yes".to_string());
    }
    parts.push(format!("Compression: {}", output.compression.describe()));
    parts.push(match &output.shebang {
        Some(shebang) => format!("Shebang: {}", shebang),
        None => "Shebang: none".to_string(),
    });
    parts.join(" | ")
}

/// Build Use Case
///
/// Orchestrates one build: plan the entries, skip when up to date, write.
pub struct BuildUseCase<'a> {
    fs: &'a dyn FileSystem,
    matcher: &'a dyn PatternMatcher,
    archives: &'a dyn ArchiveStore,
    logger: &'a dyn BuildLogger,
}

impl<'a> BuildUseCase<'a> {
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

    pub fn execute(&self, options: &BuildOptions) -> BundlerResult<BuildResult> {
        if options.packages.is_empty()
            && options.includes.is_empty()
            && options.output.merge_source.is_none()
        {
            return Err(BundlerError::invalid(
                "at least one package, include or input archive is required",
            ));
        }

        let plan = EntryPlanner::new(self.fs, self.matcher, self.archives, self.logger)
            .plan(options)?;

        if options.dry_run {
            self.logger
                .info("Dry-run mode: no files will be written or deleted.");
            self.logger.info(&format!(
                "(dry-run) Would create zipapp: {}",
                dry_run_summary(options, &plan)
            ));
            return Ok(BuildResult::from_plan(BuildStatus::DryRun, options, &plan));
        }

        let staleness = StalenessDetector::new(self.fs, self.logger).check(
            &options.output.output_path,
            &plan.sources,
            options.force,
        );
        if !staleness.is_stale() {
            self.logger.info(&format!(
                "Output is up to date: {}",
                options.output.output_path.display()
            ));
            let mut result = BuildResult::from_plan(BuildStatus::UpToDate, options, &plan);
            result.staleness = Some(staleness);
            return Ok(result);
        }

        let report = self.archives.write(&options.output, &plan.entries)?;
        self.logger.info(&format!(
            "Created zipapp: {} ({} entries)",
            report.output.display(),
            report.entry_count
        ));

        let mut result = BuildResult::from_plan(BuildStatus::Built, options, &plan);
        result.staleness = Some(staleness);
        result.report = Some(report);
        Ok(result)
    }
}

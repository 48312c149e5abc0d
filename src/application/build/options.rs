//! Fully resolved build options

use std::path::PathBuf;

use crate::domain::entities::BuildOutput;
use crate::domain::value_objects::{ExcludeSpec, IncludeSpec};

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Absolute package directories, in order
    pub packages: Vec<PathBuf>,
    pub excludes: Vec<ExcludeSpec>,
    pub includes: Vec<IncludeSpec>,
    pub output: BuildOutput,
    /// Report what would be written and write nothing
    pub dry_run: bool,
    /// Rebuild even when the output is up to date
    pub force: bool,
}

impl BuildOptions {
    pub fn new(output: BuildOutput) -> Self {
        Self {
            packages: Vec::new(),
            excludes: Vec::new(),
            includes: Vec::new(),
            output,
            dry_run: false,
            force: false,
        }
    }

    pub fn with_packages(mut self, packages: Vec<PathBuf>) -> Self {
        self.packages = packages;
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<ExcludeSpec>) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn with_includes(mut self, includes: Vec<IncludeSpec>) -> Self {
        self.includes = includes;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

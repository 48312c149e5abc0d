use anyhow::{bail, Result};

use zipbundler::domain::services::resolve_packages;
use zipbundler::domain::value_objects::{ExcludeSpec, Origin};
use zipbundler::{list_sources, render_tree, GitignoreMatcher, LocalFs, TracingLogger};

pub fn cmd_list(sources: &[String], tree: bool, count: bool, exclude: &[String]) -> Result<()> {
    let cwd = super::current_dir()?;
    let fs = LocalFs::new();
    let logger = TracingLogger;

    let packages = resolve_packages(sources, &cwd, &fs, &logger)?;
    if packages.is_empty() {
        bail!("No packages matched: {}", sources.join(", "));
    }

    let excludes: Vec<ExcludeSpec> = exclude
        .iter()
        .map(|pattern| ExcludeSpec::new(pattern.as_str(), Origin::CliOverride))
        .collect();

    let entries = list_sources(&packages, &excludes, &fs, &GitignoreMatcher::new(), &logger)?;

    if count {
        println!("{}", entries.len());
    } else if tree {
        print!(
            "{}",
            render_tree(entries.iter().map(|e| e.archive_name.as_str()))
        );
    } else {
        for entry in &entries {
            println!("{}", entry.archive_name);
        }
    }
    Ok(())
}

use std::path::Path;

use anyhow::Result;

use crate::cli::BuildArgs;
use zipbundler::application::file_sha256;
use zipbundler::config::load_config;
use zipbundler::{
    BuildRequest, BuildResult, BuildStatus, BuildUseCase, GitignoreMatcher, LocalFs,
    TracingLogger, ZipArchiveStore,
};

pub fn cmd_build(args: &BuildArgs) -> Result<()> {
    let cwd = super::current_dir()?;
    let request = build_request(args, &cwd)?;

    let fs = LocalFs::new();
    let logger = TracingLogger;
    let resolved = request.resolve(&fs, &logger)?;

    let archives = ZipArchiveStore::new();
    let matcher = GitignoreMatcher::new();
    let result = BuildUseCase::new(&fs, &matcher, &archives, &logger).execute(&resolved.options)?;

    print_result(&result)
}

/// Turn the shared `build`/`watch` flags into a request, loading the config
/// named by `--config` or discovered in `cwd`.
pub(crate) fn build_request(args: &BuildArgs, cwd: &Path) -> Result<BuildRequest> {
    let config = load_config(args.config.as_deref(), cwd)?;
    match &config {
        Some(loaded) => tracing::debug!("Using config: {}", loaded.path.display()),
        None => tracing::debug!("No config file found in {}", cwd.display()),
    }

    Ok(BuildRequest {
        cwd: cwd.to_path_buf(),
        config,
        sources: args.sources.clone(),
        output: args.output.clone(),
        main: args.main.clone(),
        python: args.python.clone(),
        no_shebang: args.no_shebang,
        compress: args.compress,
        compression: args.compression.clone(),
        compression_level: args.compression_level,
        exclude: args.exclude.clone(),
        add_exclude: args.add_exclude.clone(),
        include: args.include.clone(),
        add_include: args.add_include.clone(),
        add_zip: args.add_zip.clone(),
        input: args.input.clone(),
        replace: args.replace,
        gitignore: args.gitignore_override(),
        no_main_guard: args.no_main_guard,
        dry_run: args.dry_run,
        force: args.force,
        disable_build_timestamp: args.disable_build_timestamp,
        interval: None,
    })
}

fn print_result(result: &BuildResult) -> Result<()> {
    match result.status {
        BuildStatus::Built => {
            let entries = result
                .report
                .as_ref()
                .map(|r| r.entry_count)
                .unwrap_or(result.entry_names.len());
            println!("Built: {}", result.output.display());
            println!("  Entries:  {}", entries);
            println!("  Packages: {}", result.package_count);
            println!("  SHA-256:  {}", file_sha256(&result.output)?);
        }
        BuildStatus::UpToDate => {
            println!("Up to date: {}", result.output.display());
        }
        BuildStatus::DryRun => {
            for name in &result.entry_names {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

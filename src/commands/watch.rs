use std::cell::Cell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::BuildArgs;
use zipbundler::application::ResolvedBuild;
use zipbundler::{
    BuildUseCase, GitignoreMatcher, LocalFs, TracingLogger, WatchEvent, WatchOptions,
    WatchUseCase, ZipArchiveStore,
};

pub fn cmd_watch(args: &BuildArgs, interval: Option<f64>) -> Result<()> {
    let cwd = super::current_dir()?;
    let mut request = super::build::build_request(args, &cwd)?;
    request.interval = interval;

    let fs = LocalFs::new();
    let logger = TracingLogger;
    let resolved = request.resolve(&fs, &logger)?;
    let options = watch_options(&resolved);

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Failed to install the Ctrl+C handler")?;

    let archives = ZipArchiveStore::new();
    let matcher = GitignoreMatcher::new();
    let builder = BuildUseCase::new(&fs, &matcher, &archives, &logger);

    // The first build honours the staleness check; later ones are triggered
    // by a detected change, which may be a removal the check cannot see.
    let initial = Cell::new(true);
    let rebuild = || {
        let mut build_options = resolved.options.clone();
        if !initial.replace(false) {
            build_options.force = true;
        }
        builder.execute(&build_options).map(|_| ())
    };

    WatchUseCase::new(options, &fs, &matcher, &logger).start(
        running,
        rebuild,
        log_event,
    )?;
    Ok(())
}

fn watch_options(resolved: &ResolvedBuild) -> WatchOptions {
    let build = &resolved.options;

    let mut extra_paths: Vec<PathBuf> = build.includes.iter().map(|i| i.path.clone()).collect();
    extra_paths.extend(build.output.merge_source.iter().cloned());
    extra_paths.extend(resolved.config_path.iter().cloned());

    WatchOptions::new(build.packages.clone(), build.output.output_path.clone())
        .with_interval_secs(resolved.watch_interval)
        .with_excludes(build.excludes.clone())
        .with_extra_paths(extra_paths)
}

fn log_event(event: WatchEvent) {
    tracing::trace!("{}", event.to_json());
}

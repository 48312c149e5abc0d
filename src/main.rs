//! zipbundler CLI
//!
//! Usage: zipbundler <COMMAND>
//!
//! Commands:
//!   build     Build a zip application from packages
//!   watch     Rebuild whenever the sources change
//!   list      List the files a build would include
//!   info      Show interpreter and metadata of an existing archive
//!   init      Write a starter configuration file
//!   validate  Check a configuration file
//!   version   Show version information

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;

use cli::{Cli, Commands};
use zipbundler::infrastructure::init_logging;
use zipbundler::LogLevel;

const LOG_LEVEL_ENV: &str = "ZIPBUNDLER_LOG_LEVEL";

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(resolve_log_level(&cli), std::io::stderr().is_terminal());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Build { args } => commands::build::cmd_build(&args),
        Commands::Watch { args, interval } => commands::watch::cmd_watch(&args, interval),
        Commands::List {
            sources,
            tree,
            count,
            exclude,
        } => commands::list::cmd_list(&sources, tree, count, &exclude),
        Commands::Info { archive } => commands::info::cmd_info(&archive),
        Commands::Init {
            output,
            preset,
            list_presets,
            force,
        } => commands::init::cmd_init(&output, &preset, list_presets, force),
        Commands::Validate { config, strict } => {
            commands::validate::cmd_validate(config.as_deref(), strict)
        }
        Commands::Version => commands::version::cmd_version(),
    }
}

/// `--log-level`, then `-v`/`-q`, then `ZIPBUNDLER_LOG_LEVEL`, then info.
fn resolve_log_level(cli: &Cli) -> LogLevel {
    if let Some(level) = cli.log_level.as_deref().and_then(|l| l.parse().ok()) {
        return level;
    }
    if cli.quiet {
        return LogLevel::Warn;
    }
    match cli.verbose {
        0 => {}
        1 => return LogLevel::Debug,
        _ => return LogLevel::Trace,
    }
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|l| l.parse().ok())
        .unwrap_or(LogLevel::Info)
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// zipbundler - bundle Python packages into executable zip applications
#[derive(Parser, Debug)]
#[command(name = "zipbundler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "warning", "error"]
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a zip application from packages
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Rebuild whenever the sources change
    Watch {
        #[command(flatten)]
        args: BuildArgs,

        /// Seconds between polls
        #[arg(long, value_name = "SECS")]
        interval: Option<f64>,
    },

    /// List the files a build would include
    List {
        /// Package directories
        #[arg(required = true)]
        sources: Vec<String>,

        /// Show as a tree
        #[arg(long, conflicts_with = "count")]
        tree: bool,

        /// Only print the number of files
        #[arg(long)]
        count: bool,

        /// Exclude pattern (repeatable)
        #[arg(long, value_name = "PATTERN")]
        exclude: Vec<String>,
    },

    /// Show interpreter and metadata of an existing archive
    Info {
        /// Archive to inspect
        archive: PathBuf,
    },

    /// Write a starter configuration file
    Init {
        /// Where to write the config
        #[arg(short, long, default_value = ".zipbundler.toml")]
        output: PathBuf,

        /// Preset to start from
        #[arg(long, default_value = "basic")]
        preset: String,

        /// List available presets and exit
        #[arg(long)]
        list_presets: bool,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Check a configuration file
    Validate {
        /// Config file (default: discovered in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Show version information
    Version,
}

/// Options shared by `build` and `watch`
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Package directories or globs; replace the configured packages
    pub sources: Vec<String>,

    /// Config file (default: discovered in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output archive path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Entry point, `module.path` or `module.path:function`
    #[arg(short, long, value_name = "ENTRY")]
    pub main: Option<String>,

    /// Interpreter for the shebang line
    #[arg(short, long, value_name = "INTERPRETER", conflicts_with = "no_shebang")]
    pub python: Option<String>,

    /// Do not write a shebang line
    #[arg(long)]
    pub no_shebang: bool,

    /// Compress members with deflate
    #[arg(long)]
    pub compress: bool,

    /// Compression method (stored, deflate, bzip2, zstd)
    #[arg(long, value_name = "METHOD")]
    pub compression: Option<String>,

    /// Compression level 0-9 (deflate only)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression_level: Option<u8>,

    /// Exclude pattern replacing the configured ones (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Exclude pattern added to the configured ones (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub add_exclude: Vec<String>,

    /// Include `path[:dest]` replacing the configured ones (repeatable)
    #[arg(long, value_name = "PATH[:DEST]")]
    pub include: Vec<String>,

    /// Include `path[:dest]` added to the configured ones (repeatable)
    #[arg(long, value_name = "PATH[:DEST]")]
    pub add_include: Vec<String>,

    /// Archive whose members are added (repeatable)
    #[arg(long, value_name = "ARCHIVE[:DEST]")]
    pub add_zip: Vec<String>,

    /// Existing archive or directory to merge into the output
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Drop the members of --input instead of appending to them
    #[arg(short, long, requires = "input")]
    pub replace: bool,

    /// Apply .gitignore patterns
    #[arg(long, overrides_with = "no_gitignore")]
    pub gitignore: bool,

    /// Ignore .gitignore patterns
    #[arg(long, overrides_with = "gitignore")]
    pub no_gitignore: bool,

    /// Do not wrap the entry point in `if __name__ == '__main__':`
    #[arg(long)]
    pub no_main_guard: bool,

    /// Show what would be built without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Rebuild even if the output is up to date
    #[arg(short, long)]
    pub force: bool,

    /// Use fixed timestamps for reproducible output
    #[arg(long)]
    pub disable_build_timestamp: bool,
}

impl BuildArgs {
    /// `Some` only when one of the gitignore flags was given
    pub fn gitignore_override(&self) -> Option<bool> {
        match (self.gitignore, self.no_gitignore) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_build_defaults() {
        let cli = Cli::try_parse_from(["zipbundler", "build"]).unwrap();
        if let Commands::Build { args } = cli.command {
            assert!(args.sources.is_empty());
            assert!(args.config.is_none());
            assert_eq!(args.gitignore_override(), None);
            assert!(!args.dry_run);
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_parse_build_with_options() {
        let cli = Cli::try_parse_from([
            "zipbundler",
            "build",
            "src/app",
            "-o",
            "dist/app.pyz",
            "-m",
            "app.cli:main",
            "--compression-level",
            "9",
            "--add-include",
            "data.json:etc/data.json",
            "--add-include",
            "README.md",
            "--no-gitignore",
        ])
        .unwrap();
        if let Commands::Build { args } = cli.command {
            assert_eq!(args.sources, vec!["src/app".to_string()]);
            assert_eq!(args.output, Some(PathBuf::from("dist/app.pyz")));
            assert_eq!(args.main.as_deref(), Some("app.cli:main"));
            assert_eq!(args.compression_level, Some(9));
            assert_eq!(args.add_include.len(), 2);
            assert_eq!(args.gitignore_override(), Some(false));
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_rejects_out_of_range_level() {
        assert!(
            Cli::try_parse_from(["zipbundler", "build", "--compression-level", "10"]).is_err()
        );
    }

    #[test]
    fn test_cli_replace_requires_input() {
        assert!(Cli::try_parse_from(["zipbundler", "build", "--replace"]).is_err());
        assert!(
            Cli::try_parse_from(["zipbundler", "build", "--input", "a.pyz", "--replace"]).is_ok()
        );
    }

    #[test]
    fn test_cli_last_gitignore_flag_wins() {
        let cli =
            Cli::try_parse_from(["zipbundler", "build", "--no-gitignore", "--gitignore"]).unwrap();
        if let Commands::Build { args } = cli.command {
            assert_eq!(args.gitignore_override(), Some(true));
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_verbose_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["zipbundler", "list", "pkg", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::List { .. }));
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["zipbundler", "-q", "-v", "version"]).is_err());
    }

    #[test]
    fn test_cli_parse_watch_interval() {
        let cli = Cli::try_parse_from(["zipbundler", "watch", "pkg", "--interval", "0.5"]).unwrap();
        if let Commands::Watch { args, interval } = cli.command {
            assert_eq!(args.sources, vec!["pkg".to_string()]);
            assert_eq!(interval, Some(0.5));
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn test_cli_list_requires_source() {
        assert!(Cli::try_parse_from(["zipbundler", "list"]).is_err());
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::try_parse_from(["zipbundler", "init", "--preset", "cli", "--force"]).unwrap();
        if let Commands::Init {
            output,
            preset,
            force,
            list_presets,
        } = cli.command
        {
            assert_eq!(output, PathBuf::from(".zipbundler.toml"));
            assert_eq!(preset, "cli");
            assert!(force);
            assert!(!list_presets);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_validate() {
        let cli = Cli::try_parse_from(["zipbundler", "validate", "--strict"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Validate { strict: true, config: None }
        ));
    }
}
